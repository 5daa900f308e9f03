use axum::{
    middleware,
    routing::{get, MethodRouter},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use serde::de::DeserializeOwned;
use tracing::Level;

use common::types::Health;

pub mod accounts;
pub mod auth;
pub mod transfer;

use auth::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Decode the first JSON value in `body`; bytes after it are ignored.
/// An empty body is an end-of-input error.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(value) => value,
        None => serde_json::from_slice(body),
    }
}

/// Wrap a route with the `x-jwt-token` check when `enabled`.
/// Only the methods registered on `route` so far are covered.
pub fn protect(route: MethodRouter<ServerState>, state: &ServerState, enabled: bool) -> MethodRouter<ServerState> {
    if !enabled {
        return route;
    }
    route.route_layer(middleware::from_fn_with_state(state.clone(), auth::require_jwt_token))
}

/// Build the full application router.
///
/// | Method | Path            | Token |
/// |--------|-----------------|-------|
/// | GET    | `/account`      | no    |
/// | POST   | `/account`      | no    |
/// | GET    | `/account/:id`  | yes (configurable) |
/// | DELETE | `/account/:id`  | no    |
/// | GET    | `/transfer`     | no    |
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let lookup = protect(
        get(accounts::get_account_by_id),
        &state,
        state.auth.protect_account_lookup,
    );

    Router::new()
        .route("/health", get(health))
        .route(
            "/account",
            get(accounts::list_accounts)
                .post(accounts::create_account)
                .fallback(accounts::method_not_allowed),
        )
        .route("/account/:id", lookup.delete(accounts::delete_account))
        .route("/transfer", get(transfer::transfer))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
