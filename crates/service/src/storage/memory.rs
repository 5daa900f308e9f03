use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::Account;
use crate::errors::StorageError;
use crate::storage::AccountStorage;

/// Process-local storage with serial-style ids, kept in insertion order.
///
/// # Examples
/// ```
/// use service::storage::{AccountStorage, InMemoryAccountStorage};
/// use service::Account;
/// let store = InMemoryAccountStorage::default();
/// tokio_test::block_on(store.create_account(&Account::new("Ada", "Lovelace"))).unwrap();
/// let all = tokio_test::block_on(store.get_accounts()).unwrap();
/// assert_eq!(all.len(), 1);
/// assert_eq!(all[0].id(), 1);
/// ```
#[derive(Default)]
pub struct InMemoryAccountStorage {
    inner: Mutex<Rows>,
}

#[derive(Default)]
struct Rows {
    last_id: i32,
    accounts: Vec<Account>,
}

impl InMemoryAccountStorage {
    fn rows(&self) -> Result<MutexGuard<'_, Rows>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Persistence("account table lock poisoned".into()))
    }
}

#[async_trait]
impl AccountStorage for InMemoryAccountStorage {
    async fn create_account(&self, account: &Account) -> Result<(), StorageError> {
        let mut rows = self.rows()?;
        rows.last_id += 1;
        let stored = Account::restore(
            rows.last_id,
            account.first_name().to_string(),
            account.last_name().to_string(),
            account.number(),
            account.balance(),
            account.created_at(),
        );
        rows.accounts.push(stored);
        Ok(())
    }

    async fn update_account(&self, account: &Account) -> Result<(), StorageError> {
        let mut rows = self.rows()?;
        let slot = rows
            .accounts
            .iter_mut()
            .find(|a| a.id() == account.id())
            .ok_or(StorageError::NotFound(account.id()))?;
        *slot = Account::restore(
            slot.id(),
            account.first_name().to_string(),
            account.last_name().to_string(),
            account.number(),
            account.balance(),
            slot.created_at(),
        );
        Ok(())
    }

    async fn delete_account(&self, id: i32) -> Result<(), StorageError> {
        self.rows()?.accounts.retain(|a| a.id() != id);
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, StorageError> {
        Ok(self.rows()?.accounts.clone())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StorageError> {
        self.rows()?
            .accounts
            .iter()
            .find(|a| a.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }
}
