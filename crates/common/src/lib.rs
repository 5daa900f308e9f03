//! Shared building blocks for the accounts service crates.

pub mod types;
pub mod utils;
