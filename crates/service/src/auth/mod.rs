//! Signed account tokens: issued when an account is created, checked on the
//! protected lookup route.

pub mod claims;
pub mod errors;
pub mod token;

pub use claims::AuthClaims;
pub use errors::TokenError;
pub use token::TokenService;
