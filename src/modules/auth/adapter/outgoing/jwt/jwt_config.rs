use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256 algorithm")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidExpiry(&'static str),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    fn parse_expiry(key: &'static str, default: i64) -> Result<i64, JwtConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidExpiry(key)),
            Err(_) => Ok(default),
        }
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", 1800)?;
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(JwtConfigError::InvalidExpiry("JWT_ACCESS_EXPIRY"));
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "resume-builder".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
