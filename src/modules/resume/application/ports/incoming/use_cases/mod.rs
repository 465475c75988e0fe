mod check_ownership;
mod create_resume;
mod delete_resume;
mod draft_session;
mod fetch_resume;
mod list_user_resumes;
mod replace_sub_collection;
mod update_resume;

pub use check_ownership::CheckOwnershipUseCase;
pub use create_resume::{CreateResumeError, CreateResumeUseCase};
pub use delete_resume::{DeleteResumeError, DeleteResumeUseCase};
pub use draft_session::{DraftSessionError, DraftSessionUseCase};
pub use fetch_resume::{FetchResumeError, FetchResumeUseCase};
pub use list_user_resumes::{ListUserResumesError, ListUserResumesUseCase};
pub use replace_sub_collection::{
    ReplaceSubCollectionError, ReplaceSubCollectionUseCase, SectionBatch,
};
pub use update_resume::{UpdateResumeError, UpdateResumeUseCase};
