use actix_web::{delete, web, Responder};
use tracing::{error, info};

use super::owner_guard::reject_non_owner;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::resume::application::ports::incoming::use_cases::DeleteResumeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a resume together with every section record it references
#[utoipa::path(
    delete,
    path = "/api/resumes/{resume_id}",
    tag = "resumes",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    responses(
        (status = 204, description = "Resume deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller does not own the resume", body = ErrorResponse),
        (status = 404, description = "Resume vanished during the delete", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/resumes/{resume_id}")]
pub async fn delete_resume_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    if let Some(denied) = reject_non_owner(&data, &user.user_id, &resume_id).await {
        return denied;
    }

    match data.resume.delete.execute(&resume_id).await {
        Ok(()) => {
            if data.resume.drafts.discard(&user.user_id, &resume_id).await {
                info!("Discarded open draft of deleted resume {}", resume_id);
            }
            ApiResponse::no_content()
        }
        Err(DeleteResumeError::NotFound) => {
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found")
        }
        Err(DeleteResumeError::RepositoryError(e)) => {
            error!("Failed to delete resume {}: {}", resume_id, e);
            ApiResponse::internal_error()
        }
    }
}
