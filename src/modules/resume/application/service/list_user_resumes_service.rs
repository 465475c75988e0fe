use async_trait::async_trait;
use futures::future::try_join_all;

use super::ResumeAggregateLoader;
use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::application::ports::incoming::use_cases::{
    ListUserResumesError, ListUserResumesUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRepository;
use crate::modules::resume::domain::entities::Resume;

pub struct ListUserResumesService<R>
where
    R: ResumeRepository,
{
    resume_repository: R,
    loader: ResumeAggregateLoader,
}

impl<R> ListUserResumesService<R>
where
    R: ResumeRepository,
{
    pub fn new(resume_repository: R, loader: ResumeAggregateLoader) -> Self {
        Self {
            resume_repository,
            loader,
        }
    }
}

#[async_trait]
impl<R> ListUserResumesUseCase for ListUserResumesService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self, user_id: &UserId) -> Result<Vec<Resume>, ListUserResumesError> {
        let records = self
            .resume_repository
            .find_by_user(user_id)
            .await
            .map_err(|e| ListUserResumesError::RepositoryError(e.to_string()))?;

        try_join_all(records.into_iter().map(|record| self.loader.load(record)))
            .await
            .map_err(|e| ListUserResumesError::RepositoryError(e.to_string()))
    }
}
