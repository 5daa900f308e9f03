//! Row-level tests against a live Postgres. They run only when `DATABASE_URL`
//! is available and `SKIP_DB_TESTS` is unset.

use chrono::Utc;
use migration::MigratorTrait;
use once_cell::sync::Lazy;
use sea_orm::DatabaseConnection;

use crate::{account, db, errors::ModelError};

static TEST_DATABASE_URL: Lazy<Option<String>> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    std::env::var("DATABASE_URL").ok()
});

async fn setup_test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    let Some(url) = TEST_DATABASE_URL.as_ref() else {
        eprintln!("DATABASE_URL missing; skipping database test");
        return Ok(None);
    };
    let db = db::connect(url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_account_row_lifecycle() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let id = account::insert(&db, "Ada", "Lovelace", 1234567, 0, Utc::now().into()).await?;
    assert!(id > 0);

    let found = account::find(&db, id).await?.expect("row inserted");
    assert_eq!(found.firstname, "Ada");
    assert_eq!(found.number, 1234567);
    assert_eq!(found.balance, 0);

    let all = account::list_all(&db).await?;
    assert!(all.iter().any(|m| m.id == id));

    let matched = account::update(&db, id, "Ada", "King", 1234567, 0).await?;
    assert_eq!(matched, 1);
    assert_eq!(account::find(&db, id).await?.unwrap().lastname, "King");

    assert_eq!(account::hard_delete(&db, id).await?, 1);
    assert!(account::find(&db, id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_row_is_not_an_error() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    assert_eq!(account::hard_delete(&db, i32::MAX).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_name_longer_than_column_is_rejected() -> anyhow::Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let long = "x".repeat(account::NAME_MAX_LEN + 1);
    let err = account::insert(&db, &long, "Doe", 1, 0, Utc::now().into()).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}
