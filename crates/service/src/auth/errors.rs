use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(String),
    #[error("unexpected signing method: {0}")]
    UnexpectedAlgorithm(String),
    #[error("invalid token: {0}")]
    Invalid(String),
}
