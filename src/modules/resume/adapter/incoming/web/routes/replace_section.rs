use actix_web::{put, web, Responder};
use serde_json::Value;
use tracing::{error, info};

use super::owner_guard::reject_non_owner;
use crate::api::schemas::{ErrorResponse, ResumeResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::resume::application::ports::incoming::use_cases::{
    ReplaceSubCollectionError, SectionBatch,
};
use crate::modules::resume::domain::entities::SectionKind;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace one section of a resume with the submitted list
///
/// Entries carrying a known `_id` are updated in place, the rest are inserted.
/// The section then lists exactly the submitted entries, in submission order.
#[utoipa::path(
    put,
    path = "/api/resumes/{resume_id}/{section}",
    tag = "resumes",
    params(
        ("resume_id" = String, Path, description = "Client-generated resume id"),
        ("section" = String, Path, description = "experience, education, skills, custom-sections or social-profiles"),
    ),
    request_body(content = serde_json::Value, description = "Full list of entries for the section",
        example = json!([{ "_id": "0b6c3c1e-8f0c-4d57-9e3d-1b2a3c4d5e6f", "company": "Acme Corp", "title": "Engineer" }])),
    responses(
        (status = 200, description = "Updated resume", body = ResumeResponse),
        (status = 400, description = "Body is not a valid list for the section", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller does not own the resume", body = ErrorResponse),
        (status = 404, description = "Unknown section, or resume vanished", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/resumes/{resume_id}/{section}")]
pub async fn replace_section_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    req: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (resume_id, section) = path.into_inner();

    let Some(kind) = SectionKind::from_path_segment(&section) else {
        return ApiResponse::not_found("UNKNOWN_SECTION", "Unknown resume section");
    };

    if let Some(denied) = reject_non_owner(&data, &user.user_id, &resume_id).await {
        return denied;
    }

    let batch = match SectionBatch::from_json(kind, req.into_inner()) {
        Ok(batch) => batch,
        Err(e) => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                &format!("Invalid {} list: {}", kind, e),
            )
        }
    };
    let submitted = batch.len();

    match data.resume.replace_section.execute(&resume_id, batch).await {
        Ok(resume) => {
            info!(
                "Replaced {} of resume {} with {} entries",
                kind, resume_id, submitted
            );
            ApiResponse::success(resume)
        }
        Err(ReplaceSubCollectionError::NotFound) => {
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found")
        }
        Err(ReplaceSubCollectionError::RepositoryError(e)) => {
            error!("Failed to replace {} of resume {}: {}", kind, resume_id, e);
            ApiResponse::internal_error()
        }
    }
}
