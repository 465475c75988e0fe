use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

/// True iff a resume with exactly this `(resume_id, user_id)` pair exists.
/// Lookup failures answer `false`.
#[async_trait]
pub trait CheckOwnershipUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId, resume_id: &str) -> bool;
}
