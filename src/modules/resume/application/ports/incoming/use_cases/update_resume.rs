use async_trait::async_trait;
use std::fmt;

use crate::modules::resume::application::ports::outgoing::resume_repository::PatchResumeData;
use crate::modules::resume::domain::entities::Resume;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResumeError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateResumeError::NotFound => write!(f, "Resume not found"),
            UpdateResumeError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateResumeUseCase: Send + Sync {
    async fn execute(
        &self,
        resume_id: &str,
        data: PatchResumeData,
    ) -> Result<Resume, UpdateResumeError>;
}
