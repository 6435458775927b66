use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChargeError {
    #[error("configuration: {0}")]
    Configuration(String),

    #[error("provider returned {status}")]
    RemoteApi { status: reqwest::StatusCode },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
