use std::sync::Arc;
use std::time::Duration;

use crate::modules::resume::application::ports::incoming::use_cases::{
    CheckOwnershipUseCase, CreateResumeUseCase, DeleteResumeUseCase, DraftSessionUseCase,
    FetchResumeUseCase, ListUserResumesUseCase, ReplaceSubCollectionUseCase, UpdateResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRepository;
use crate::modules::resume::application::ports::outgoing::sub_entity_repository::SectionRepositories;
use crate::modules::resume::application::service::{
    CheckOwnershipService, CreateResumeService, DeleteResumeService, DraftSessionService,
    FetchResumeService, ListUserResumesService, ReplaceSubCollectionService,
    ResumeAggregateLoader, UpdateResumeService,
};

#[derive(Clone)]
pub struct ResumeUseCases {
    pub fetch: Arc<dyn FetchResumeUseCase + Send + Sync>,
    pub list_for_user: Arc<dyn ListUserResumesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateResumeUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateResumeUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteResumeUseCase + Send + Sync>,
    pub replace_section: Arc<dyn ReplaceSubCollectionUseCase + Send + Sync>,
    pub check_ownership: Arc<dyn CheckOwnershipUseCase + Send + Sync>,
    pub drafts: Arc<dyn DraftSessionUseCase + Send + Sync>,
}

impl ResumeUseCases {
    /// Every resume use case over one resume adapter and the five section adapters.
    pub fn wire<R>(
        resume_repository: R,
        sections: SectionRepositories,
        draft_idle_ttl: Duration,
    ) -> Self
    where
        R: ResumeRepository + Clone + Send + Sync + 'static,
    {
        let loader = ResumeAggregateLoader::new(sections.clone());
        let fetch: Arc<dyn FetchResumeUseCase + Send + Sync> = Arc::new(FetchResumeService::new(
            resume_repository.clone(),
            loader.clone(),
        ));

        Self {
            fetch: Arc::clone(&fetch),
            list_for_user: Arc::new(ListUserResumesService::new(
                resume_repository.clone(),
                loader.clone(),
            )),
            create: Arc::new(CreateResumeService::new(
                resume_repository.clone(),
                loader.clone(),
            )),
            update: Arc::new(UpdateResumeService::new(
                resume_repository.clone(),
                loader.clone(),
            )),
            delete: Arc::new(DeleteResumeService::new(
                resume_repository.clone(),
                sections,
            )),
            replace_section: Arc::new(ReplaceSubCollectionService::new(
                resume_repository.clone(),
                loader,
            )),
            check_ownership: Arc::new(CheckOwnershipService::new(resume_repository)),
            drafts: Arc::new(DraftSessionService::with_idle_ttl(fetch, draft_idle_ttl)),
        }
    }
}
