use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::domain::entities::Resume;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUserResumesError {
    RepositoryError(String),
}

impl fmt::Display for ListUserResumesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListUserResumesError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListUserResumesUseCase: Send + Sync {
    /// Newest first; empty when the user has none.
    async fn execute(&self, user_id: &UserId) -> Result<Vec<Resume>, ListUserResumesError>;
}
