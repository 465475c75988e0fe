use async_trait::async_trait;
use serde_json::Value;

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::application::ports::incoming::use_cases::{
    CheckOwnershipUseCase, CreateResumeError, CreateResumeUseCase, DeleteResumeError,
    DeleteResumeUseCase, DraftSessionError, DraftSessionUseCase, FetchResumeError,
    FetchResumeUseCase, ListUserResumesError, ListUserResumesUseCase, ReplaceSubCollectionError,
    ReplaceSubCollectionUseCase, SectionBatch, UpdateResumeError, UpdateResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    CreateResumeData, PatchResumeData,
};
use crate::modules::resume::domain::draft::ResumeDraft;
use crate::modules::resume::domain::entities::Resume;

/// Answers every resume use case with a repository failure.
#[derive(Clone, Default)]
pub struct StubFailingResumeUseCases;

const FAILURE: &str = "connection reset";

#[async_trait]
impl FetchResumeUseCase for StubFailingResumeUseCases {
    async fn execute(&self, _resume_id: &str) -> Result<Resume, FetchResumeError> {
        Err(FetchResumeError::RepositoryError(FAILURE.to_string()))
    }
}

#[async_trait]
impl ListUserResumesUseCase for StubFailingResumeUseCases {
    async fn execute(&self, _user_id: &UserId) -> Result<Vec<Resume>, ListUserResumesError> {
        Err(ListUserResumesError::RepositoryError(FAILURE.to_string()))
    }
}

#[async_trait]
impl CreateResumeUseCase for StubFailingResumeUseCases {
    async fn execute(&self, _data: CreateResumeData) -> Result<Resume, CreateResumeError> {
        Err(CreateResumeError::RepositoryError(FAILURE.to_string()))
    }
}

#[async_trait]
impl UpdateResumeUseCase for StubFailingResumeUseCases {
    async fn execute(
        &self,
        _resume_id: &str,
        _data: PatchResumeData,
    ) -> Result<Resume, UpdateResumeError> {
        Err(UpdateResumeError::RepositoryError(FAILURE.to_string()))
    }
}

#[async_trait]
impl DeleteResumeUseCase for StubFailingResumeUseCases {
    async fn execute(&self, _resume_id: &str) -> Result<(), DeleteResumeError> {
        Err(DeleteResumeError::RepositoryError(FAILURE.to_string()))
    }
}

#[async_trait]
impl ReplaceSubCollectionUseCase for StubFailingResumeUseCases {
    async fn execute(
        &self,
        _resume_id: &str,
        _batch: SectionBatch,
    ) -> Result<Resume, ReplaceSubCollectionError> {
        Err(ReplaceSubCollectionError::RepositoryError(
            FAILURE.to_string(),
        ))
    }
}

#[async_trait]
impl DraftSessionUseCase for StubFailingResumeUseCases {
    async fn open(
        &self,
        _user_id: &UserId,
        _resume_id: &str,
    ) -> Result<ResumeDraft, DraftSessionError> {
        Err(DraftSessionError::RepositoryError(FAILURE.to_string()))
    }

    async fn set_field(
        &self,
        _user_id: &UserId,
        _resume_id: &str,
        _name: &str,
        _value: Value,
    ) -> Result<ResumeDraft, DraftSessionError> {
        Err(DraftSessionError::RepositoryError(FAILURE.to_string()))
    }

    async fn preview(
        &self,
        _user_id: &UserId,
        _resume_id: &str,
    ) -> Result<String, DraftSessionError> {
        Err(DraftSessionError::RepositoryError(FAILURE.to_string()))
    }

    async fn discard(&self, _user_id: &UserId, _resume_id: &str) -> bool {
        false
    }

    async fn evict_idle(&self) -> usize {
        0
    }
}

/// Fixed ownership answer, whatever the store holds.
pub struct StubCheckOwnershipUseCase {
    is_owner: bool,
}

impl StubCheckOwnershipUseCase {
    pub fn owner() -> Self {
        Self { is_owner: true }
    }

    pub fn stranger() -> Self {
        Self { is_owner: false }
    }
}

#[async_trait]
impl CheckOwnershipUseCase for StubCheckOwnershipUseCase {
    async fn execute(&self, _user_id: &UserId, _resume_id: &str) -> bool {
        self.is_owner
    }
}
