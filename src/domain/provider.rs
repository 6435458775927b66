use {
    super::charge::{ChargeResult, PixStatus},
    super::error::ChargeError,
    super::id::TransactionId,
    std::{future::Future, pin::Pin},
};

/// Remote payment API seen from the service layer. The charge template is
/// fixed by configuration, so charge creation takes no arguments.
pub trait PixProvider: Send + Sync {
    fn create_charge(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<ChargeResult, ChargeError>> + Send + '_>>;

    fn fetch_status(
        &self,
        id: &TransactionId,
    ) -> Pin<Box<dyn Future<Output = Result<PixStatus, ChargeError>> + Send + '_>>;
}
