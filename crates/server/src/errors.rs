use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::auth::TokenError;
use service::StorageError;
use thiserror::Error;
use tracing::{error, warn};

/// Every error a handler can return.
///
/// The variants are kept distinct so callers and logs can tell them apart, but
/// at the HTTP edge they all currently map to `400 {"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid JSON body: {0}")]
    Decode(String),
    #[error("{0}")]
    InvalidArgument(String),
    /// Path ids are parsed as `i64`; ids outside the `i32` key range are
    /// reported here without a storage round trip.
    #[error("account with ID {0} not found")]
    NotFound(i64),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("Token is Invalid")]
    Auth(#[source] TokenError),
    #[error("method not allowed {0}")]
    MethodNotAllowed(String),
    #[error("token issuance failed: {0}")]
    Token(#[source] TokenError),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Decode(_) => "decode",
            ApiError::InvalidArgument(_) => "invalid_argument",
            ApiError::NotFound(_) => "not_found",
            ApiError::Persistence(_) => "persistence",
            ApiError::Auth(_) => "auth",
            ApiError::MethodNotAllowed(_) => "method_not_allowed",
            ApiError::Token(_) => "token",
        }
    }

    /// Status written for this error. Kept at 400 for every kind so existing
    /// clients see one error status; switching e.g. `NotFound` to 404 is a
    /// contract change.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(id) => ApiError::NotFound(id.into()),
            StorageError::Persistence(msg) => ApiError::Persistence(msg),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        ApiError::Token(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Auth(cause) => warn!(kind = self.kind(), cause = %cause, "request rejected"),
            _ => warn!(kind = self.kind(), error = %self, "handler error"),
        }
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Database(String),
    #[error("schema initialisation failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StartupError {
    pub fn log(&self) {
        error!(error = %self, "startup failed");
    }
}
