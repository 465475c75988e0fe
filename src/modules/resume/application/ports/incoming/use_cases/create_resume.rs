use async_trait::async_trait;
use std::fmt;

use crate::modules::resume::application::ports::outgoing::resume_repository::CreateResumeData;
use crate::modules::resume::domain::entities::Resume;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateResumeError {
    DuplicateKey,
    RepositoryError(String),
}

impl fmt::Display for CreateResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateResumeError::DuplicateKey => write!(f, "resume id already exists"),
            CreateResumeError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateResumeUseCase: Send + Sync {
    async fn execute(&self, data: CreateResumeData) -> Result<Resume, CreateResumeError>;
}
