use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipResponse {
    pub is_owner: bool,
}

/// Whether the caller owns a resume
///
/// Unknown resumes and store failures answer `false`.
#[utoipa::path(
    get,
    path = "/api/resumes/{resume_id}/ownership",
    tag = "resumes",
    params(("resume_id" = String, Path, description = "Client-generated resume id")),
    responses(
        (status = 200, description = "Ownership answer", body = OwnershipResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/resumes/{resume_id}/ownership")]
pub async fn check_ownership_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let resume_id = path.into_inner();

    let is_owner = data
        .resume
        .check_ownership
        .execute(&user.user_id, &resume_id)
        .await;

    ApiResponse::success(OwnershipResponse { is_owner })
}
