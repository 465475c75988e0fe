use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, ResumeListResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::resume::application::ports::incoming::use_cases::ListUserResumesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's resumes
///
/// Newest first, every section populated.
#[utoipa::path(
    get,
    path = "/api/resumes",
    tag = "resumes",
    responses(
        (status = 200, description = "Resumes of the authenticated user", body = ResumeListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/resumes")]
pub async fn list_resumes_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.list_for_user.execute(&user.user_id).await {
        Ok(resumes) => ApiResponse::success(resumes),
        Err(ListUserResumesError::RepositoryError(e)) => {
            error!("Failed to list resumes of user {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
