use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteResumeError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteResumeError::NotFound => write!(f, "Resume not found"),
            DeleteResumeError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Removes every referenced section record, then the resume itself.
#[async_trait]
pub trait DeleteResumeUseCase: Send + Sync {
    async fn execute(&self, resume_id: &str) -> Result<(), DeleteResumeError>;
}
