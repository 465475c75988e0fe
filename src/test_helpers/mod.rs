//! Routes for end-to-end test suites. Compiled only with the `test-helpers` feature
//! and refused at startup when `RUST_ENV=production`.

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::modules::resume::application::ports::incoming::use_cases::DeleteResumeError;
use crate::AppState;

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_resumes: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

/// Delete every resume (and its sections) of a user
/// DELETE /test/cleanup/{user_id}
pub async fn cleanup_test_user(
    user_id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse> {
    let user_id = UserId::from(user_id.into_inner());

    let resumes = data
        .resume
        .list_for_user
        .execute(&user_id)
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to list resumes: {}", e))
        })?;

    let mut deleted_resumes = 0;
    for resume in resumes {
        match data.resume.delete.execute(&resume.resume_id).await {
            Ok(()) => deleted_resumes += 1,
            // Raced with another cleanup
            Err(DeleteResumeError::NotFound) => {}
            Err(e) => {
                return Err(actix_web::error::ErrorInternalServerError(format!(
                    "Failed to delete resume {}: {}",
                    resume.resume_id, e
                )))
            }
        }
    }

    tracing::debug!("Cleaned up {} resumes of {}", deleted_resumes, user_id);

    Ok(HttpResponse::Ok().json(CleanupResponse { deleted_resumes }))
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Additional safety check
    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Sign an access token the way the identity provider would
/// GET /test/token/{user_id}
pub async fn generate_test_token(
    user_id: web::Path<String>,
    token_provider: web::Data<Arc<dyn TokenProvider + Send + Sync>>,
) -> Result<HttpResponse> {
    let user_id = UserId::from(user_id.into_inner());

    tracing::debug!("Generating test token for user {}", user_id);

    let token = token_provider
        .generate_access_token(&user_id)
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
        })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/cleanup/{user_id}", web::delete().to(cleanup_test_user))
            .route("/token/{user_id}", web::get().to(generate_test_token)),
    );
}
