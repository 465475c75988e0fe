use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::domain::draft::{DraftError, ResumeDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftSessionError {
    ResumeNotFound,
    NoActiveDraft,
    InvalidEdit(DraftError),
    RepositoryError(String),
}

impl fmt::Display for DraftSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftSessionError::ResumeNotFound => write!(f, "Resume not found"),
            DraftSessionError::NoActiveDraft => write!(f, "No draft is open for this resume"),
            DraftSessionError::InvalidEdit(e) => write!(f, "{}", e),
            DraftSessionError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// In-memory editing sessions, one draft per `(user, resume)`.
///
/// Drafts are never written to the store; saving goes through the write use cases.
#[async_trait]
pub trait DraftSessionUseCase: Send + Sync {
    /// Seeds a draft from the stored resume, replacing any open one.
    async fn open(&self, user_id: &UserId, resume_id: &str)
        -> Result<ResumeDraft, DraftSessionError>;

    async fn set_field(
        &self,
        user_id: &UserId,
        resume_id: &str,
        name: &str,
        value: Value,
    ) -> Result<ResumeDraft, DraftSessionError>;

    /// Full HTML rendering of the current draft.
    async fn preview(&self, user_id: &UserId, resume_id: &str)
        -> Result<String, DraftSessionError>;

    /// Returns whether a draft was open.
    async fn discard(&self, user_id: &UserId, resume_id: &str) -> bool;

    /// Drops every draft idle past its time-to-live; returns how many went.
    async fn evict_idle(&self) -> usize;
}
