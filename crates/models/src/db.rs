use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use configs::DatabaseConfig;

/// Open a pooled connection using the validated database settings.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout())
        .idle_timeout(cfg.idle_timeout())
        .max_lifetime(cfg.max_lifetime())
        .acquire_timeout(cfg.acquire_timeout())
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    db.ping().await?;
    info!(max_connections = cfg.max_connections, "database pool ready");
    Ok(db)
}

/// Connect with default pool settings.
pub async fn connect(url: &str) -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: url.to_string(), ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}
