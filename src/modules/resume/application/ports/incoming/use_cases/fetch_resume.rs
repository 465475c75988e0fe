use async_trait::async_trait;
use std::fmt;

use crate::modules::resume::domain::entities::Resume;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResumeError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for FetchResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchResumeError::NotFound => write!(f, "Resume not found"),
            FetchResumeError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Loads one resume with all sections populated.
#[async_trait]
pub trait FetchResumeUseCase: Send + Sync {
    async fn execute(&self, resume_id: &str) -> Result<Resume, FetchResumeError>;
}
