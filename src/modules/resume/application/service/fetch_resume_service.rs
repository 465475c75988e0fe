use async_trait::async_trait;

use super::ResumeAggregateLoader;
use crate::modules::resume::application::ports::incoming::use_cases::{
    FetchResumeError, FetchResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    ResumeRepository, ResumeRepositoryError,
};
use crate::modules::resume::domain::entities::Resume;

pub struct FetchResumeService<R>
where
    R: ResumeRepository,
{
    resume_repository: R,
    loader: ResumeAggregateLoader,
}

impl<R> FetchResumeService<R>
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
impl<R> FetchResumeUseCase for FetchResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self, resume_id: &str) -> Result<Resume, FetchResumeError> {
        let record = self
            .resume_repository
            .find_by_resume_id(resume_id)
            .await
            .map_err(|e| match e {
                ResumeRepositoryError::NotFound => FetchResumeError::NotFound,
                ResumeRepositoryError::DatabaseError(msg)
                | ResumeRepositoryError::SerializationError(msg) => {
                    FetchResumeError::RepositoryError(msg)
                }
                ResumeRepositoryError::DuplicateKey => FetchResumeError::RepositoryError(
                    "unexpected duplicate key while fetching resume".to_string(),
                ),
            })?;

        self.loader
            .load(record)
            .await
            .map_err(|e| FetchResumeError::RepositoryError(e.to_string()))
    }
}
