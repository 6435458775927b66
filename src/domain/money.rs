use {
    super::error::ChargeError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Charge amount in centavos (minor currency units).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount(i64);

impl MoneyAmount {
    pub fn new(centavos: i64) -> Result<Self, ChargeError> {
        if centavos < 0 {
            return Err(ChargeError::Validation(format!(
                "MoneyAmount cannot be negative, got: {centavos}"
            )));
        }
        Ok(Self(centavos))
    }

    pub fn centavos(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The provider settles in BRL only; the deployment is single-currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Brl,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brl => "BRL",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
