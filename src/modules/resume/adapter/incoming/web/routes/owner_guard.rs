use actix_web::HttpResponse;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `Some(403)` unless `user_id` owns `resume_id`. Unknown resumes are refused the same way.
pub(super) async fn reject_non_owner(
    data: &AppState,
    user_id: &UserId,
    resume_id: &str,
) -> Option<HttpResponse> {
    if data
        .resume
        .check_ownership
        .execute(user_id, resume_id)
        .await
    {
        return None;
    }

    warn!("User {} refused access to resume {}", user_id, resume_id);
    Some(ApiResponse::forbidden(
        "NOT_RESUME_OWNER",
        "You do not have permission to modify this resume",
    ))
}
