use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::domain::Account;
use crate::errors::StorageError;
use crate::storage::AccountStorage;

/// Postgres-backed storage through sea-orm.
pub struct SeaOrmAccountStorage {
    pub db: DatabaseConnection,
}

impl SeaOrmAccountStorage {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl AccountStorage for SeaOrmAccountStorage {
    async fn create_account(&self, account: &Account) -> Result<(), StorageError> {
        let id = models::account::insert(
            &self.db,
            account.first_name(),
            account.last_name(),
            account.number(),
            account.balance(),
            account.created_at().into(),
        )
        .await?;
        debug!(id, number = account.number(), "account row inserted");
        Ok(())
    }

    async fn update_account(&self, account: &Account) -> Result<(), StorageError> {
        let matched = models::account::update(
            &self.db,
            account.id(),
            account.first_name(),
            account.last_name(),
            account.number(),
            account.balance(),
        )
        .await?;
        if matched == 0 {
            return Err(StorageError::NotFound(account.id()));
        }
        Ok(())
    }

    async fn delete_account(&self, id: i32) -> Result<(), StorageError> {
        let rows = models::account::hard_delete(&self.db, id).await?;
        debug!(id, rows, "account delete executed");
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, StorageError> {
        let rows = models::account::list_all(&self.db).await?;
        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StorageError> {
        models::account::find(&self.db, id)
            .await?
            .map(Account::from)
            .ok_or(StorageError::NotFound(id))
    }
}
