use serde::{Deserialize, Serialize};

use crate::domain::Account;

/// Value written into `expiresAt`. It is a raw number, never compared to a clock.
pub const FIXED_EXPIRES_AT: i64 = 150_000;

/// Payload of an account token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClaims {
    #[serde(rename = "expiresAt", default)]
    pub expires_at: i64,
    #[serde(rename = "accountNumber", default)]
    pub account_number: i64,
}

impl AuthClaims {
    pub fn for_account(account: &Account) -> Self {
        Self { expires_at: FIXED_EXPIRES_AT, account_number: account.number() }
    }
}
