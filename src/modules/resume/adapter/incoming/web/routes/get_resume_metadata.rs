use actix_web::{get, web, Responder};
use tracing::debug;

use crate::modules::resume::domain::metadata::ResumeMetadata;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Page title and description for a shared resume link
///
/// Never fails: unknown resumes, store errors and unnamed resumes all get the
/// generic product metadata.
#[utoipa::path(
    get,
    path = "/api/resumes/{resume_id}/metadata",
    tag = "resumes",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    responses(
        (status = 200, description = "Metadata for the share page"),
    )
)]
#[get("/api/resumes/{resume_id}/metadata")]
pub async fn get_resume_metadata_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    let metadata = match data.resume.fetch.execute(&resume_id).await {
        Ok(resume) => ResumeMetadata::for_resume(&resume),
        Err(e) => {
            debug!("Falling back to default metadata for {}: {}", resume_id, e);
            ResumeMetadata::fallback()
        }
    };

    ApiResponse::success(metadata)
}
