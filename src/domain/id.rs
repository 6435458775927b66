use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::ChargeError;

/// Provider-side transaction identifier, as returned by `POST /transactions`.
/// The provider emits it as a string or a number; callers always see it as
/// a string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Result<Self, ChargeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ChargeError::Validation(
                "TransactionId cannot be empty".into(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
