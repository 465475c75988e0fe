use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidIssuer,
    InvalidSignature,
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidIssuer => write!(f, "Token issuer is not trusted"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}
impl Error for TokenError {}

/// Claims of an access token issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Provider user id, opaque to this service
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
}

impl TokenClaims {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.sub.as_str())
    }
}

/// Tokens are issued by the external identity provider. This service only
/// verifies them; `generate_access_token` exists for tests and dev tooling.
pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: &UserId) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
