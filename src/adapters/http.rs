use {
    crate::{AppState, adapters::api_errors::ApiError, domain::id::TransactionId},
    axum::{
        Json,
        extract::{Path, State},
    },
};

/// `POST /charges` — create a PIX charge from the fixed template and return
/// the copy-paste key with the transaction id. Field names match what the
/// checkout widget expects.
pub async fn create_charge_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let charge = state.provider.create_charge().await?;
    tracing::info!(transaction_id = %charge.transaction_id, "charge created");
    Ok(Json(serde_json::json!({
        "copyPasteKey": charge.copy_paste_key,
        "transactionId": charge.transaction_id.as_str(),
    })))
}

/// `GET /charges/{id}/status` — one-shot settlement status passthrough.
pub async fn charge_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = TransactionId::new(id)?;
    let status = state.provider.fetch_status(&id).await?;
    Ok(Json(serde_json::json!({ "status": status.as_str() })))
}
