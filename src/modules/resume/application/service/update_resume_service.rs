use async_trait::async_trait;
use tracing::error;

use super::ResumeAggregateLoader;
use crate::modules::resume::application::ports::incoming::use_cases::{
    UpdateResumeError, UpdateResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    PatchResumeData, ResumeRepository, ResumeRepositoryError,
};
use crate::modules::resume::domain::entities::Resume;

pub struct UpdateResumeService<R>
where
    R: ResumeRepository,
{
    resume_repository: R,
    loader: ResumeAggregateLoader,
}

impl<R> UpdateResumeService<R>
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
impl<R> UpdateResumeUseCase for UpdateResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(
        &self,
        resume_id: &str,
        data: PatchResumeData,
    ) -> Result<Resume, UpdateResumeError> {
        let record = self
            .resume_repository
            .patch(resume_id, data)
            .await
            .map_err(|e| match e {
                ResumeRepositoryError::NotFound => UpdateResumeError::NotFound,
                ResumeRepositoryError::DatabaseError(msg)
                | ResumeRepositoryError::SerializationError(msg) => {
                    error!("Repository error updating resume {}: {}", resume_id, msg);
                    UpdateResumeError::RepositoryError(msg)
                }
                ResumeRepositoryError::DuplicateKey => UpdateResumeError::RepositoryError(
                    "unexpected duplicate key while updating resume".to_string(),
                ),
            })?;

        self.loader
            .load(record)
            .await
            .map_err(|e| UpdateResumeError::RepositoryError(e.to_string()))
    }
}
