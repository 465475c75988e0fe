use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "resume-builder-test".to_string(),
        secret_key: "test_secret_key_for_testing_only_32b".to_string(),
        access_token_expiry: 3600,
    })
}

/// What `AuthenticatedUser` looks up in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(create_test_jwt_service())
}

/// `Authorization` header value for `user_id`, signed with the test key.
pub fn bearer(user_id: &str) -> String {
    let token = create_test_jwt_service()
        .generate_access_token(&UserId::from(user_id))
        .expect("token generation");
    format!("Bearer {}", token)
}
