use std::ops::Range;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Account numbers are drawn uniformly from this range. Uniqueness is not enforced.
pub const ACCOUNT_NUMBER_RANGE: Range<i64> = 0..10_000_000;

/// Bank-style account record.
///
/// The identifier is assigned by storage and the account number is drawn once
/// in [`Account::new`]; neither can be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: i32,
    #[serde(rename = "firstname")]
    first_name: String,
    #[serde(rename = "lastname")]
    last_name: String,
    number: i64,
    balance: i64,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl Account {
    /// New unsaved account: id 0, random number, zero balance, created now.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::with_rng(first_name, last_name, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        rng: &mut R,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: rng.gen_range(ACCOUNT_NUMBER_RANGE),
            balance: 0,
            created_at: Utc::now(),
        }
    }

    /// Rebuild an account read back from storage.
    pub fn restore(
        id: i32,
        first_name: String,
        last_name: String,
        number: i64,
        balance: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id, first_name, last_name, number, balance, created_at }
    }

    pub fn id(&self) -> i32 { self.id }
    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }
    pub fn number(&self) -> i64 { self.number }
    pub fn balance(&self) -> i64 { self.balance }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
}

impl From<models::account::Model> for Account {
    fn from(m: models::account::Model) -> Self {
        Account::restore(m.id, m.firstname, m.lastname, m.number, m.balance, m.created_at.with_timezone(&Utc))
    }
}

/// Body of `POST /account`. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(rename = "firstname", default)]
    pub first_name: String,
    #[serde(rename = "lastname", default)]
    pub last_name: String,
}

impl CreateAccountRequest {
    pub fn into_account(self) -> Account {
        Account::new(self.first_name, self.last_name)
    }
}

/// Body of `GET /transfer`. Decoded and echoed back; nothing is moved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "toAccount", default)]
    pub to_account: i64,
    #[serde(default)]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn new_account_defaults() {
        let acc = Account::new("Ada", "Lovelace");
        assert_eq!(acc.id(), 0);
        assert_eq!(acc.first_name(), "Ada");
        assert_eq!(acc.last_name(), "Lovelace");
        assert_eq!(acc.balance(), 0);
        assert!(ACCOUNT_NUMBER_RANGE.contains(&acc.number()));
        assert!(acc.created_at() <= Utc::now());
    }

    #[test]
    fn account_numbers_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let acc = Account::with_rng("a", "b", &mut rng);
            assert!(ACCOUNT_NUMBER_RANGE.contains(&acc.number()));
        }
    }

    #[test]
    fn account_json_shape() {
        let acc = Account::restore(
            3,
            "Grace".into(),
            "Hopper".into(),
            42,
            0,
            DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z").unwrap().with_timezone(&Utc),
        );
        let v = serde_json::to_value(&acc).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "id": 3,
                "firstname": "Grace",
                "lastname": "Hopper",
                "number": 42,
                "balance": 0,
                "createdAt": "2024-05-01T10:00:00Z"
            })
        );
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateAccountRequest = serde_json::from_str(r#"{"firstname":"Only"}"#).unwrap();
        assert_eq!(req.first_name, "Only");
        assert_eq!(req.last_name, "");
    }

    #[test]
    fn transfer_request_uses_camel_case_keys() {
        let req: TransferRequest = serde_json::from_str(r#"{"toAccount":5,"amount":100}"#).unwrap();
        assert_eq!(req, TransferRequest { to_account: 5, amount: 100 });
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"toAccount":5,"amount":100}"#);
    }

    #[test]
    fn transfer_request_rejects_wrong_types() {
        assert!(serde_json::from_str::<TransferRequest>(r#"{"toAccount":"five"}"#).is_err());
    }
}
