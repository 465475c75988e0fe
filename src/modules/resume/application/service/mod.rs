mod check_ownership_service;
mod create_resume_service;
mod delete_resume_service;
mod draft_session_service;
mod fetch_resume_service;
mod list_user_resumes_service;
mod replace_sub_collection_service;
mod resume_aggregate_loader;
mod update_resume_service;

pub use check_ownership_service::CheckOwnershipService;
pub use create_resume_service::CreateResumeService;
pub use delete_resume_service::DeleteResumeService;
pub use draft_session_service::{DraftSessionService, DEFAULT_DRAFT_IDLE_TTL};
pub use fetch_resume_service::FetchResumeService;
pub use list_user_resumes_service::ListUserResumesService;
pub use replace_sub_collection_service::ReplaceSubCollectionService;
pub use resume_aggregate_loader::ResumeAggregateLoader;
pub use update_resume_service::UpdateResumeService;
