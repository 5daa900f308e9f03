use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::claims::AuthClaims;
use super::errors::TokenError;
use crate::domain::Account;

/// Only the symmetric HMAC family is accepted on verification.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Issues and verifies HMAC-signed account tokens with one shared secret.
///
/// Verification checks the algorithm family and the signature only: the
/// `expiresAt` claim is not treated as a deadline and the embedded account
/// number is not matched against anything.
///
/// # Examples
/// ```
/// use service::auth::TokenService;
/// use service::Account;
/// let tokens = TokenService::new("secret");
/// let account = Account::new("Ada", "Lovelace");
/// let token = tokens.issue(&account).unwrap();
/// let claims = tokens.verify(&token).unwrap();
/// assert_eq!(claims.account_number, account.number());
/// ```
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign the claims for `account` with HS256.
    #[instrument(skip(self, account), fields(number = account.number()))]
    pub fn issue(&self, account: &Account) -> Result<String, TokenError> {
        let claims = AuthClaims::for_account(account);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<AuthClaims, TokenError> {
        let header = decode_header(token).map_err(|e| TokenError::Invalid(e.to_string()))?;
        if !HMAC_ALGORITHMS.contains(&header.alg) {
            return Err(TokenError::UnexpectedAlgorithm(format!("{:?}", header.alg)));
        }
        let data = decode::<AuthClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;
        debug!(account_number = data.claims.account_number, "token verified");
        Ok(data.claims)
    }
}
