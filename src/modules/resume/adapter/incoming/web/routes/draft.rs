use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use super::owner_guard::reject_non_owner;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::resume::application::ports::incoming::use_cases::DraftSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetDraftFieldRequest {
    /// camelCase field name, e.g. `firstName` or `experience`
    #[schema(example = "firstName")]
    pub name: String,

    /// New value. List fields take the whole list.
    #[schema(value_type = Object, example = "Ada")]
    pub value: Value,
}

fn draft_error_response(resume_id: &str, err: DraftSessionError) -> HttpResponse {
    match err {
        DraftSessionError::ResumeNotFound => {
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found")
        }
        DraftSessionError::NoActiveDraft => {
            ApiResponse::not_found("DRAFT_NOT_FOUND", "No draft is open for this resume")
        }
        DraftSessionError::InvalidEdit(e) => {
            ApiResponse::unprocessable("INVALID_DRAFT_FIELD", &e.to_string())
        }
        DraftSessionError::RepositoryError(e) => {
            error!("Draft of resume {} failed: {}", resume_id, e);
            ApiResponse::internal_error()
        }
    }
}

/// Open an editing draft seeded from the saved resume
///
/// Replaces any draft the caller already had open for this resume.
#[utoipa::path(
    post,
    path = "/api/resumes/{resume_id}/draft",
    tag = "drafts",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    responses(
        (status = 200, description = "Fresh draft"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller does not own the resume", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/resumes/{resume_id}/draft")]
pub async fn open_draft_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    if let Some(denied) = reject_non_owner(&data, &user.user_id, &resume_id).await {
        return denied;
    }

    match data.resume.drafts.open(&user.user_id, &resume_id).await {
        Ok(draft) => ApiResponse::success(draft),
        Err(e) => draft_error_response(&resume_id, e),
    }
}

/// Overwrite one field of the open draft
#[utoipa::path(
    patch,
    path = "/api/resumes/{resume_id}/draft",
    tag = "drafts",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    request_body = SetDraftFieldRequest,
    responses(
        (status = 200, description = "Draft after the edit"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No draft open", body = ErrorResponse,
            example = json!({"success": false, "error": {"code": "DRAFT_NOT_FOUND", "message": "No draft is open for this resume"}})),
        (status = 422, description = "Unknown, read-only or mistyped field", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/resumes/{resume_id}/draft")]
pub async fn set_draft_field_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<SetDraftFieldRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();
    let SetDraftFieldRequest { name, value } = req.into_inner();

    match data
        .resume
        .drafts
        .set_field(&user.user_id, &resume_id, &name, value)
        .await
    {
        Ok(draft) => ApiResponse::success(draft),
        Err(e) => draft_error_response(&resume_id, e),
    }
}

/// Live HTML preview of the open draft
#[utoipa::path(
    get,
    path = "/api/resumes/{resume_id}/draft/preview",
    tag = "drafts",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    responses(
        (status = 200, description = "Rendered draft", content_type = "text/html", body = String),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No draft open", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/resumes/{resume_id}/draft/preview")]
pub async fn preview_draft_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    match data.resume.drafts.preview(&user.user_id, &resume_id).await {
        Ok(html) => ApiResponse::html(html),
        Err(e) => draft_error_response(&resume_id, e),
    }
}

/// Throw away the open draft without saving
#[utoipa::path(
    delete,
    path = "/api/resumes/{resume_id}/draft",
    tag = "drafts",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    responses(
        (status = 204, description = "Draft discarded"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No draft open", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/resumes/{resume_id}/draft")]
pub async fn discard_draft_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    if data.resume.drafts.discard(&user.user_id, &resume_id).await {
        ApiResponse::no_content()
    } else {
        draft_error_response(&resume_id, DraftSessionError::NoActiveDraft)
    }
}
