use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, ResumeResponse};
use crate::modules::resume::application::ports::incoming::use_cases::FetchResumeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one resume with every section populated
///
/// Resumes are shareable by link, so no token is required.
#[utoipa::path(
    get,
    path = "/api/resumes/{resume_id}",
    tag = "resumes",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    responses(
        (status = 200, description = "Resume found", body = ResumeResponse),
        (status = 404, description = "No resume with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/resumes/{resume_id}")]
pub async fn get_resume_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    match data.resume.fetch.execute(&resume_id).await {
        Ok(resume) => ApiResponse::success(resume),
        Err(FetchResumeError::NotFound) => {
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found")
        }
        Err(FetchResumeError::RepositoryError(e)) => {
            error!("Failed to fetch resume {}: {}", resume_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::resume::domain::entities::Skill;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory_store::InMemoryResumeStore;
    use crate::tests::support::resume_fixtures::{experience, record};
    use crate::tests::support::stubs::StubFailingResumeUseCases;

    #[actix_web::test]
    async fn test_get_resume_populates_sections_in_order() {
        let store = InMemoryResumeStore::default();
        let acme = store.seed_experience(experience("Acme"));
        let initech = store.seed_experience(experience("Initech"));
        let rust = store.seed_skill(Skill {
            name: "Rust".to_string(),
            rating: Some(5),
        });
        let mut row = record("r1", "u1", "Draft");
        row.experience = vec![initech, acme];
        row.skills = vec![rust];
        store.seed_resume(row);

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(&store).build())
                .service(get_resume_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/resumes/r1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["experience"][0]["company"], "Initech");
        assert_eq!(body["data"]["experience"][1]["company"], "Acme");
        assert_eq!(body["data"]["experience"][1]["id"], acme.to_string());
        assert_eq!(body["data"]["skills"][0]["name"], "Rust");
        assert_eq!(body["data"]["education"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_get_missing_resume_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_resume_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/resumes/nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "RESUME_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_resume_repository_error() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_fetch(StubFailingResumeUseCases)
                        .build(),
                )
                .service(get_resume_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/resumes/r1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
