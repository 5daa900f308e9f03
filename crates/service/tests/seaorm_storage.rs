//! `SeaOrmAccountStorage` against a live Postgres. Skipped unless
//! `DATABASE_URL` is set and `SKIP_DB_TESTS` is not.

use migration::MigratorTrait;
use service::storage::{AccountStorage, SeaOrmAccountStorage};
use service::{Account, StorageError};

async fn storage() -> anyhow::Result<Option<SeaOrmAccountStorage>> {
    let _ = dotenvy::dotenv();
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(None); }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skip storage tests");
        return Ok(None);
    };
    let db = models::db::connect(&url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(SeaOrmAccountStorage::new(db)))
}

#[tokio::test]
async fn create_list_get_delete() -> anyhow::Result<()> {
    let Some(store) = storage().await? else { return Ok(()) };

    let marker = format!("it-{}", std::process::id());
    let account = Account::new(marker.clone(), "Storage");
    store.create_account(&account).await?;
    assert_eq!(account.id(), 0);

    let stored = store
        .get_accounts()
        .await?
        .into_iter()
        .find(|a| a.first_name() == marker && a.number() == account.number())
        .expect("created row listed");
    assert!(stored.id() > 0);
    assert_eq!(stored.balance(), 0);

    let fetched = store.get_account_by_id(stored.id()).await?;
    assert_eq!(fetched.last_name(), "Storage");

    store.delete_account(stored.id()).await?;
    assert_eq!(store.get_account_by_id(stored.id()).await.unwrap_err(), StorageError::NotFound(stored.id()));

    // second delete of the same id still succeeds
    store.delete_account(stored.id()).await?;
    Ok(())
}

#[tokio::test]
async fn update_missing_row_is_not_found() -> anyhow::Result<()> {
    let Some(store) = storage().await? else { return Ok(()) };
    let ghost = Account::restore(i32::MAX, "x".into(), "y".into(), 1, 0, chrono::Utc::now());
    assert_eq!(store.update_account(&ghost).await.unwrap_err(), StorageError::NotFound(i32::MAX));
    Ok(())
}

#[tokio::test]
async fn oversized_name_is_a_persistence_error() -> anyhow::Result<()> {
    let Some(store) = storage().await? else { return Ok(()) };
    let err = store.create_account(&Account::new("x".repeat(80), "y")).await.unwrap_err();
    assert!(matches!(err, StorageError::Persistence(_)));
    Ok(())
}
