use actix_web::{patch, web, Responder};
use tracing::error;

use super::owner_guard::reject_non_owner;
use crate::api::schemas::{ErrorResponse, ResumeResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::resume::application::ports::incoming::use_cases::UpdateResumeError;
use crate::modules::resume::application::ports::outgoing::resume_repository::PatchResumeData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partially update the scalar fields of a resume
///
/// Omitted fields are kept, `null` clears them. `title` cannot be cleared and
/// `photoPosition` / `themeColor` reset to their defaults.
#[utoipa::path(
    patch,
    path = "/api/resumes/{resume_id}",
    tag = "resumes",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    request_body(content = serde_json::Value, description = "Any subset of the resume's scalar fields",
        example = json!({ "firstName": "Ada", "lastName": "Lovelace", "phone": null })),
    responses(
        (status = 200, description = "Updated resume", body = ResumeResponse),
        (status = 400, description = "Invalid request body or theme color", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller does not own the resume", body = ErrorResponse),
        (status = 404, description = "Resume vanished during the update", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/resumes/{resume_id}")]
pub async fn patch_resume_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<PatchResumeData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    if let Some(denied) = reject_non_owner(&data, &user.user_id, &resume_id).await {
        return denied;
    }

    let patch = req.into_inner();
    if let Err(message) = patch.validate() {
        return ApiResponse::bad_request("VALIDATION_ERROR", &message);
    }

    match data.resume.update.execute(&resume_id, patch).await {
        Ok(resume) => ApiResponse::success(resume),
        Err(UpdateResumeError::NotFound) => {
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found")
        }
        Err(UpdateResumeError::RepositoryError(e)) => {
            error!("Failed to update resume {}: {}", resume_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::resume::domain::entities::{PhotoPosition, DEFAULT_THEME_COLOR};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::in_memory_store::InMemoryResumeStore;
    use crate::tests::support::resume_fixtures::record;
    use crate::tests::support::stubs::{StubCheckOwnershipUseCase, StubFailingResumeUseCases};

    async fn send(
        state: web::Data<AppState>,
        user: &str,
        body: Value,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(crate::shared::api::custom_json_config())
                .service(patch_resume_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/resumes/r1")
            .insert_header(("Authorization", bearer(user)))
            .set_json(&body)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_patch_by_owner_updates_only_given_fields() {
        let store = InMemoryResumeStore::default();
        let mut row = record("r1", "u1", "Draft");
        row.phone = Some("555-0100".to_string());
        store.seed_resume(row);

        let resp = send(
            TestAppStateBuilder::with_store(&store).build(),
            "u1",
            json!({ "firstName": "Ada", "photoPosition": "left" }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["firstName"], "Ada");
        assert_eq!(body["data"]["phone"], "555-0100");
        assert_eq!(body["data"]["title"], "Draft");

        let stored = store.record("r1").unwrap();
        assert_eq!(stored.photo_position, PhotoPosition::Left);
    }

    #[actix_web::test]
    async fn test_patch_null_clears_field() {
        let store = InMemoryResumeStore::default();
        let mut row = record("r1", "u1", "Draft");
        row.phone = Some("555-0100".to_string());
        store.seed_resume(row);

        let resp = send(
            TestAppStateBuilder::with_store(&store).build(),
            "u1",
            json!({ "phone": null }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(store.record("r1").unwrap().phone, None);
    }

    #[actix_web::test]
    async fn test_patch_by_stranger_is_forbidden_and_changes_nothing() {
        let store = InMemoryResumeStore::default();
        store.seed_resume(record("r1", "u1", "Draft"));

        let resp = send(
            TestAppStateBuilder::with_store(&store).build(),
            "u2",
            json!({ "title": "Hijacked" }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_RESUME_OWNER");
        assert_eq!(store.record("r1").unwrap().title, "Draft");
    }

    #[actix_web::test]
    async fn test_patch_unknown_resume_is_forbidden() {
        let resp = send(
            TestAppStateBuilder::default().build(),
            "u1",
            json!({ "title": "Anything" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_patch_invalid_photo_position_is_bad_request() {
        let store = InMemoryResumeStore::default();
        store.seed_resume(record("r1", "u1", "Draft"));

        let resp = send(
            TestAppStateBuilder::with_store(&store).build(),
            "u1",
            json!({ "photoPosition": "top" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_patch_rejects_non_hex_theme_color() {
        let store = InMemoryResumeStore::default();
        store.seed_resume(record("r1", "u1", "Draft"));

        let resp = send(
            TestAppStateBuilder::with_store(&store).build(),
            "u1",
            json!({ "themeColor": "red; background:url(//x)", "firstName": "Ada" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let stored = store.record("r1").unwrap();
        assert_eq!(stored.theme_color, DEFAULT_THEME_COLOR);
        assert_eq!(stored.first_name, None);
    }

    #[actix_web::test]
    async fn test_patch_accepts_short_hex_theme_color() {
        let store = InMemoryResumeStore::default();
        store.seed_resume(record("r1", "u1", "Draft"));

        let resp = send(
            TestAppStateBuilder::with_store(&store).build(),
            "u1",
            json!({ "themeColor": "#0af" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(store.record("r1").unwrap().theme_color, "#0af");
    }

    #[actix_web::test]
    async fn test_patch_repository_error() {
        let state = TestAppStateBuilder::default()
            .with_check_ownership(StubCheckOwnershipUseCase::owner())
            .with_update(StubFailingResumeUseCases)
            .build();

        let resp = send(state, "u1", json!({ "title": "New" })).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
