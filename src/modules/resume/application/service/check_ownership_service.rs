use async_trait::async_trait;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::application::ports::incoming::use_cases::CheckOwnershipUseCase;
use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRepository;

pub struct CheckOwnershipService<R>
where
    R: ResumeRepository,
{
    resume_repository: R,
}

impl<R> CheckOwnershipService<R>
where
    R: ResumeRepository,
{
    pub fn new(resume_repository: R) -> Self {
        Self { resume_repository }
    }
}

#[async_trait]
impl<R> CheckOwnershipUseCase for CheckOwnershipService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self, user_id: &UserId, resume_id: &str) -> bool {
        match self
            .resume_repository
            .exists_for_owner(resume_id, user_id)
            .await
        {
            Ok(is_owner) => is_owner,
            Err(e) => {
                warn!(
                    "Ownership check of resume {} for user {} failed, denying: {}",
                    resume_id, user_id, e
                );
                false
            }
        }
    }
}
