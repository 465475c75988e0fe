use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::modules::resume::application::ports::incoming::use_cases::FetchResumeError;
use crate::modules::resume::domain::draft::ResumeDraft;
use crate::modules::resume::domain::preview::render_resume;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeViewResponse {
    /// Rendered resume markup
    pub html: String,
    /// True when the caller owns the resume and may be offered edit actions
    pub is_owner_view: bool,
}

/// Render a saved resume for its share page
#[utoipa::path(
    get,
    path = "/api/resumes/{resume_id}/view",
    tag = "resumes",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    responses(
        (status = 200, description = "Rendered resume", body = ResumeViewResponse),
        (status = 404, description = "No resume with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/resumes/{resume_id}/view")]
pub async fn view_resume_handler(
    user: MaybeUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    let resume = match data.resume.fetch.execute(&resume_id).await {
        Ok(resume) => resume,
        Err(FetchResumeError::NotFound) => {
            return ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found")
        }
        Err(FetchResumeError::RepositoryError(e)) => {
            error!("Failed to load resume {} for viewing: {}", resume_id, e);
            return ApiResponse::internal_error();
        }
    };

    let is_owner_view = match user.user_id() {
        Some(user_id) => {
            data.resume
                .check_ownership
                .execute(user_id, &resume_id)
                .await
        }
        None => false,
    };

    ApiResponse::success(ResumeViewResponse {
        html: render_resume(&ResumeDraft::from(&resume)),
        is_owner_view,
    })
}
