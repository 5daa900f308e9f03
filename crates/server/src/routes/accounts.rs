use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use common::types::{ErrorBody, MessageBody};
use service::{Account, CreateAccountRequest};
use tracing::{error, info, warn};

use super::auth::ServerState;
use super::decode_json;
use crate::errors::ApiError;

/// Fixed body written when a create request cannot be decoded.
pub const CREATE_DECODE_ERROR: &str = "Error Encoding Json ";

/// Parse a path id as a 64-bit integer. Only non-integer tokens are rejected;
/// range against the `i32` key is checked by each handler.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let id = raw
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidArgument(format!("invalid ID: {raw}")))?;
    info!(id, "requested account id");
    Ok(id)
}

pub async fn list_accounts(State(state): State<ServerState>) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.storage.get_accounts().await?;
    Ok(Json(accounts))
}

/// Create, persist, then sign a token for the new account.
///
/// The token is only logged; the response body is the account. A signing
/// failure after the insert leaves the row in place.
pub async fn create_account(State(state): State<ServerState>, body: Bytes) -> Result<Response, ApiError> {
    let input: CreateAccountRequest = match decode_json(&body) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "create account body rejected");
            return Ok((StatusCode::BAD_REQUEST, Json(ErrorBody::new(CREATE_DECODE_ERROR))).into_response());
        }
    };

    let account = input.into_account();
    state.storage.create_account(&account).await?;

    let token = state.tokens.issue(&account)?;
    info!(number = account.number(), token = %token, "account created, JWT token issued");

    Ok(Json(account).into_response())
}

pub async fn get_account_by_id(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Ok(key) = i32::try_from(id) else {
        return Err(ApiError::NotFound(id));
    };
    let account = state.storage.get_account_by_id(key).await?;
    Ok(Json(account))
}

/// Delete writes its own statuses: 500 on storage failure, 200 otherwise
/// (including ids that matched no row).
pub async fn delete_account(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    // no row can carry an id outside the key range
    let outcome = match i32::try_from(id) {
        Ok(key) => state.storage.delete_account(key).await,
        Err(_) => Ok(()),
    };
    if let Err(e) = outcome {
        error!(id, error = %e, "account delete failed");
        let body = ErrorBody::new(format!("Error deleting account: {e}"));
        return Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response());
    }
    let body = MessageBody::new(format!("Account with ID {id} deleted successfully"));
    Ok(Json(body).into_response())
}

/// Fallback for verbs `/account` does not route.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}
