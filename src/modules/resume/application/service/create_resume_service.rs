use async_trait::async_trait;
use tracing::{error, info};

use super::ResumeAggregateLoader;
use crate::modules::resume::application::ports::incoming::use_cases::{
    CreateResumeError, CreateResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    CreateResumeData, ResumeRepository, ResumeRepositoryError,
};
use crate::modules::resume::domain::entities::Resume;

pub struct CreateResumeService<R>
where
    R: ResumeRepository,
{
    resume_repository: R,
    loader: ResumeAggregateLoader,
}

impl<R> CreateResumeService<R>
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
impl<R> CreateResumeUseCase for CreateResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self, data: CreateResumeData) -> Result<Resume, CreateResumeError> {
        let record = self
            .resume_repository
            .insert(data)
            .await
            .map_err(|e| match e {
                ResumeRepositoryError::DuplicateKey => CreateResumeError::DuplicateKey,
                ResumeRepositoryError::DatabaseError(msg)
                | ResumeRepositoryError::SerializationError(msg) => {
                    error!("Repository error creating resume: {}", msg);
                    CreateResumeError::RepositoryError(msg)
                }
                ResumeRepositoryError::NotFound => CreateResumeError::RepositoryError(
                    "unexpected not found while creating resume".to_string(),
                ),
            })?;

        info!(
            "Created resume {} for user {}",
            record.resume_id, record.user_id
        );

        // A new resume references no sections, so this performs no queries.
        self.loader
            .load(record)
            .await
            .map_err(|e| CreateResumeError::RepositoryError(e.to_string()))
    }
}
