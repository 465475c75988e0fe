use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(&self, user_id: &UserId, expiry_seconds: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: &UserId) -> Result<String, TokenError> {
        self.generate_token(user_id, self.config.access_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Token verification failed: Untrusted issuer");
                    TokenError::InvalidIssuer
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::error!("Security alert: Malformed or invalid algorithm token");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!("Token verification failed: {}", e);
                    TokenError::MalformedToken
                }
            }
        })?;

        Ok(decoded.claims)
    }
}
