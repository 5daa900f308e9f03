//! Storage contract for accounts.
//!
//! Handlers only see `Arc<dyn AccountStorage>`; the concrete backend is chosen
//! at startup.

use async_trait::async_trait;

use crate::domain::Account;
use crate::errors::StorageError;

pub mod memory;
pub mod seaorm;

pub use memory::InMemoryAccountStorage;
pub use seaorm::SeaOrmAccountStorage;

#[async_trait]
pub trait AccountStorage: Send + Sync {
    /// Persist a new row. The backend assigns the id but does not write it
    /// back into `account`.
    async fn create_account(&self, account: &Account) -> Result<(), StorageError>;

    /// Overwrite names, number and balance of the row with `account.id()`.
    /// No route calls this.
    async fn update_account(&self, account: &Account) -> Result<(), StorageError>;

    /// Remove the row with `id`. Deleting a missing id succeeds.
    async fn delete_account(&self, id: i32) -> Result<(), StorageError>;

    /// Every account, in the backend's natural order.
    async fn get_accounts(&self) -> Result<Vec<Account>, StorageError>;

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StorageError>;
}
