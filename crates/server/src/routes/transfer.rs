use axum::{body::Bytes, Json};
use service::TransferRequest;

use super::decode_json;
use crate::errors::ApiError;

/// Decode a transfer request and echo it back. No storage access and no
/// balance change.
pub async fn transfer(body: Bytes) -> Result<Json<TransferRequest>, ApiError> {
    let req: TransferRequest = decode_json(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(Json(req))
}
