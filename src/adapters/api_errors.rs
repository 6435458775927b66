use crate::domain::error::ChargeError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Newtype over the domain error so the HTTP mapping lives in the adapter
/// layer. Provider error bodies never reach the client; they are logged
/// where the error was raised.
pub struct ApiError(pub ChargeError);

impl From<ChargeError> for ApiError {
    fn from(err: ChargeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            ChargeError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            ChargeError::Configuration(msg) => {
                tracing::error!("configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "configuration_error",
                    "service is not configured".to_string(),
                )
            }
            ChargeError::RemoteApi { status } => (
                StatusCode::BAD_GATEWAY,
                "provider_error",
                format!("payment provider returned {status}"),
            ),
            ChargeError::MalformedResponse(msg) => {
                tracing::error!("malformed provider response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "provider_error",
                    "payment provider returned an unexpected response".to_string(),
                )
            }
            ChargeError::Http(err) => {
                tracing::error!("provider request failed: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "provider_error",
                    "payment provider is unreachable".to_string(),
                )
            }
            ChargeError::Serialization(err) => {
                tracing::error!("serialization error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error_code": error_code,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
