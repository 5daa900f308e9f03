use thiserror::Error;

/// Failures surfaced by any [`crate::storage::AccountStorage`] backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("account with ID {0} not found")]
    NotFound(i32),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl StorageError {
    pub fn persistence(e: impl std::fmt::Display) -> Self { Self::Persistence(e.to_string()) }
}

impl From<models::errors::ModelError> for StorageError {
    fn from(e: models::errors::ModelError) -> Self {
        Self::persistence(e)
    }
}
