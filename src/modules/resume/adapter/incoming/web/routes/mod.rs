mod check_ownership;
mod create_resume;
mod delete_resume;
mod draft;
mod get_resume;
mod get_resume_metadata;
mod list_resumes;
mod owner_guard;
mod patch_resume;
mod replace_section;
mod view_resume;

pub use check_ownership::{check_ownership_handler, OwnershipResponse};
pub use create_resume::{create_resume_handler, CreateResumeRequest};
pub use delete_resume::delete_resume_handler;
pub use draft::{
    discard_draft_handler, open_draft_handler, preview_draft_handler, set_draft_field_handler,
    SetDraftFieldRequest,
};
pub use get_resume::get_resume_handler;
pub use get_resume_metadata::get_resume_metadata_handler;
pub use list_resumes::list_resumes_handler;
pub use patch_resume::patch_resume_handler;
pub use replace_section::replace_section_handler;
pub use view_resume::{view_resume_handler, ResumeViewResponse};

// utoipa path structs, needed by the OpenApi derive in crate::api::openapi
pub use check_ownership::__path_check_ownership_handler;
pub use create_resume::__path_create_resume_handler;
pub use delete_resume::__path_delete_resume_handler;
pub use draft::__path_discard_draft_handler;
pub use draft::__path_open_draft_handler;
pub use draft::__path_preview_draft_handler;
pub use draft::__path_set_draft_field_handler;
pub use get_resume::__path_get_resume_handler;
pub use get_resume_metadata::__path_get_resume_metadata_handler;
pub use list_resumes::__path_list_resumes_handler;
pub use patch_resume::__path_patch_resume_handler;
pub use replace_section::__path_replace_section_handler;
pub use view_resume::__path_view_resume_handler;
