use crate::api::schemas::{
    ErrorDetail, ErrorResponse, ResumeListResponse, ResumeResponse, SuccessResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::resume::adapter::incoming::web::routes::{
    CreateResumeRequest, OwnershipResponse, ResumeViewResponse, SetDraftFieldRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resume Builder API",
        version = "1.0.0",
        description = "Storage, ownership and preview API of the resume builder",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Resume endpoints
        crate::modules::resume::adapter::incoming::web::routes::list_resumes_handler,
        crate::modules::resume::adapter::incoming::web::routes::create_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::get_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::get_resume_metadata_handler,
        crate::modules::resume::adapter::incoming::web::routes::view_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::check_ownership_handler,
        crate::modules::resume::adapter::incoming::web::routes::patch_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::delete_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::replace_section_handler,

        // Draft endpoints
        crate::modules::resume::adapter::incoming::web::routes::open_draft_handler,
        crate::modules::resume::adapter::incoming::web::routes::set_draft_field_handler,
        crate::modules::resume::adapter::incoming::web::routes::preview_draft_handler,
        crate::modules::resume::adapter::incoming::web::routes::discard_draft_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<OwnershipResponse>,
            SuccessResponse<ResumeViewResponse>,
            ResumeResponse,
            ResumeListResponse,
            ErrorResponse,
            ErrorDetail,

            // Resume DTOs
            CreateResumeRequest,
            OwnershipResponse,
            ResumeViewResponse,
            SetDraftFieldRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "resumes", description = "Resume storage and sharing endpoints"),
        (name = "drafts", description = "Unsaved editing sessions and live preview"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the identity provider"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_resume_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/resumes"));
        assert!(doc.paths.paths.contains_key("/api/resumes/{resume_id}/{section}"));
        assert!(doc.paths.paths.contains_key("/api/resumes/{resume_id}/draft/preview"));
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();

        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }

    #[test]
    fn test_resume_envelope_carries_an_example() {
        let doc = ApiDoc::openapi();

        let components = doc.components.unwrap();
        let schema = serde_json::to_string(&components.schemas["ResumeResponse"]).unwrap();
        assert!(schema.contains("\"workSummary\""));
        assert!(schema.contains("\"_id\""));
        assert!(components.schemas.contains_key("ResumeListResponse"));
    }
}
