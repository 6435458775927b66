use {
    super::id::TransactionId,
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

/// What the caller gets back after a successful charge creation: the PIX
/// copy-paste key (the payable instrument) and the provider's transaction id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeResult {
    pub copy_paste_key: String,
    pub transaction_id: TransactionId,
}

/// Settlement status as reported by the provider, kept verbatim. The set of
/// values is provider-defined and open-ended; only `"paid"` has local
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PixStatus(String);

impl PixStatus {
    pub const PAID: &'static str = "paid";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn is_paid(&self) -> bool {
        self.0 == Self::PAID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
