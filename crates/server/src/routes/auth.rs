use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use service::{auth::TokenService, AccountStorage};
use tracing::debug;

use crate::errors::ApiError;

/// Header carrying the signed account token.
pub const TOKEN_HEADER: &str = "x-jwt-token";

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub protect_account_lookup: bool,
}

impl Default for ServerAuthConfig {
    fn default() -> Self {
        Self { protect_account_lookup: true }
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub storage: Arc<dyn AccountStorage>,
    pub tokens: Arc<TokenService>,
    pub auth: ServerAuthConfig,
}

impl ServerState {
    pub fn new(storage: Arc<dyn AccountStorage>, tokens: TokenService, auth: ServerAuthConfig) -> Self {
        Self { storage, tokens: Arc::new(tokens), auth }
    }
}

/// Route middleware: verify `x-jwt-token` before the wrapped handler runs.
///
/// A missing, malformed, wrongly signed or non-HMAC token short-circuits with
/// `400 {"error":"Token is Invalid"}`. Any valid token is accepted for any
/// account id.
pub async fn require_jwt_token(State(state): State<ServerState>, req: Request, next: Next) -> Response {
    debug!(path = %req.uri().path(), "validating JWT token");
    let token = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match state.tokens.verify(token) {
        Ok(claims) => {
            debug!(account_number = claims.account_number, "token accepted");
            next.run(req).await
        }
        Err(e) => ApiError::Auth(e).into_response(),
    }
}
