use actix_web::web;
use std::sync::Arc;

use crate::modules::resume::application::ports::incoming::use_cases::{
    CheckOwnershipUseCase, CreateResumeUseCase, DeleteResumeUseCase, DraftSessionUseCase,
    FetchResumeUseCase, ListUserResumesUseCase, ReplaceSubCollectionUseCase, UpdateResumeUseCase,
};
use crate::modules::resume::application::service::DEFAULT_DRAFT_IDLE_TTL;
use crate::modules::resume::application::ResumeUseCases;
use crate::tests::support::in_memory_store::InMemoryResumeStore;
use crate::AppState;

/// The production wiring of the resume use cases, over an in-memory store.
pub fn resume_use_cases(store: &InMemoryResumeStore) -> ResumeUseCases {
    ResumeUseCases::wire(store.clone(), store.sections(), DEFAULT_DRAFT_IDLE_TTL)
}

pub struct TestAppStateBuilder {
    resume: ResumeUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::with_store(&InMemoryResumeStore::default())
    }
}

impl TestAppStateBuilder {
    pub fn with_store(store: &InMemoryResumeStore) -> Self {
        Self {
            resume: resume_use_cases(store),
        }
    }

    pub fn with_fetch(mut self, uc: impl FetchResumeUseCase + Send + Sync + 'static) -> Self {
        self.resume.fetch = Arc::new(uc);
        self
    }

    pub fn with_list_for_user(
        mut self,
        uc: impl ListUserResumesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.list_for_user = Arc::new(uc);
        self
    }

    pub fn with_create(mut self, uc: impl CreateResumeUseCase + Send + Sync + 'static) -> Self {
        self.resume.create = Arc::new(uc);
        self
    }

    pub fn with_update(mut self, uc: impl UpdateResumeUseCase + Send + Sync + 'static) -> Self {
        self.resume.update = Arc::new(uc);
        self
    }

    pub fn with_delete(mut self, uc: impl DeleteResumeUseCase + Send + Sync + 'static) -> Self {
        self.resume.delete = Arc::new(uc);
        self
    }

    pub fn with_replace_section(
        mut self,
        uc: impl ReplaceSubCollectionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.replace_section = Arc::new(uc);
        self
    }

    pub fn with_check_ownership(
        mut self,
        uc: impl CheckOwnershipUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.check_ownership = Arc::new(uc);
        self
    }

    pub fn with_drafts(mut self, uc: impl DraftSessionUseCase + Send + Sync + 'static) -> Self {
        self.resume.drafts = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            resume: self.resume,
        })
    }
}
