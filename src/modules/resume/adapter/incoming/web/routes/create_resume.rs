use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, ResumeResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::resume::application::ports::incoming::use_cases::CreateResumeError;
use crate::modules::resume::application::ports::outgoing::resume_repository::CreateResumeData;
use crate::shared::api::ApiResponse;
use crate::AppState;

const MAX_RESUME_ID_LEN: usize = 64;
const MAX_TITLE_LEN: usize = 150;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    /// Identifier chosen by the client, immutable afterwards
    #[schema(example = "6c1f0b9e-3d57-4c1e-8f0c-1b2a3c4d5e6f")]
    pub resume_id: String,

    #[schema(example = "Backend Engineer")]
    pub title: String,
}

impl CreateResumeRequest {
    fn validate(&self) -> Result<(), &'static str> {
        let resume_id = self.resume_id.trim();
        if resume_id.is_empty() {
            return Err("resumeId must not be empty");
        }
        if resume_id.len() > MAX_RESUME_ID_LEN {
            return Err("resumeId must be at most 64 characters");
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err("title must not be empty");
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err("title must be at most 150 characters");
        }

        Ok(())
    }
}

/// Create a resume
///
/// The resume starts with only its title; every section is empty.
#[utoipa::path(
    post,
    path = "/api/resumes",
    tag = "resumes",
    request_body = CreateResumeRequest,
    responses(
        (status = 201, description = "Resume created", body = ResumeResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "resumeId already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/resumes")]
pub async fn create_resume_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateResumeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(message) = req.validate() {
        return ApiResponse::bad_request("VALIDATION_ERROR", message);
    }

    let create_data = CreateResumeData {
        resume_id: req.resume_id.trim().to_string(),
        user_id: user.user_id,
        title: req.title.trim().to_string(),
    };

    match data.resume.create.execute(create_data).await {
        Ok(resume) => {
            info!("Resume {} created", resume.resume_id);
            ApiResponse::created(resume)
        }
        Err(CreateResumeError::DuplicateKey) => {
            ApiResponse::conflict("DUPLICATE_RESUME_ID", "A resume with this id already exists")
        }
        Err(CreateResumeError::RepositoryError(e)) => {
            error!("Failed to create resume: {}", e);
            ApiResponse::internal_error()
        }
    }
}
