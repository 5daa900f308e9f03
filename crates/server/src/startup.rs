use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::{auth::TokenService, storage::SeaOrmAccountStorage};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, auth};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect to Postgres, make sure the `account` table exists, then serve the
/// API on the configured address until the listener fails.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;

    let state = auth::ServerState::new(
        Arc::new(SeaOrmAccountStorage::new(db)),
        TokenService::new(&cfg.auth.jwt_secret),
        auth::ServerAuthConfig { protect_account_lookup: cfg.auth.protect_account_lookup },
    );
    let app = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "JSON API server started");
    serve(listener, app).await
}

/// Serve an already-built router on `listener`.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), StartupError> {
    axum::serve(listener, app).await?;
    Ok(())
}
