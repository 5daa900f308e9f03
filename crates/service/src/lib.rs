//! Service layer for the accounts API.
//! - `domain`: the account entity and the transient request DTOs.
//! - `storage`: the storage contract plus its sea-orm and in-memory backends.
//! - `auth`: signed token issuance and verification.

pub mod errors;
pub mod domain;
pub mod storage;
pub mod auth;

pub use domain::{Account, CreateAccountRequest, TransferRequest};
pub use errors::StorageError;
pub use storage::AccountStorage;
