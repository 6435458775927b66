use {
    crate::domain::error::ChargeError,
    crate::domain::money::{Currency, MoneyAmount},
    std::{env, time::Duration},
};

pub const DEFAULT_BASE_URL: &str = "https://api.blackcatpagamentos.com/v1";

/// Credentials and endpoint for the Black Cat Pagamentos API.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub public_key: String,
    pub secret_key: String,
}

impl ProviderConfig {
    /// Reads `BLACKCAT_PUBLIC_KEY` and `BLACKCAT_SECRET_KEY` from the
    /// environment. A missing key fails here, before any network call.
    /// `BLACKCAT_API_URL` optionally overrides the production endpoint.
    pub fn from_env() -> Result<Self, ChargeError> {
        let public_key = require_env("BLACKCAT_PUBLIC_KEY")?;
        let secret_key = require_env("BLACKCAT_SECRET_KEY")?;
        let base_url =
            env::var("BLACKCAT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            base_url,
            public_key,
            secret_key,
        })
    }

    pub fn new(
        base_url: impl Into<String>,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

fn require_env(key: &str) -> Result<String, ChargeError> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ChargeError::Configuration(format!("{key} must be set")))
}

/// Fixed checkout parameters for this deployment. No user input ever
/// reaches the charge request body.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub amount: MoneyAmount,
    pub currency: Currency,
    pub item_title: String,
    pub poll_interval: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            // R$ 40,00
            amount: MoneyAmount::new(4000).expect("constant amount"),
            currency: Currency::Brl,
            item_title: "Consulta".to_string(),
            poll_interval: Duration::from_secs(5),
        }
    }
}
