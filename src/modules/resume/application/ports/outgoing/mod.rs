pub mod resume_repository;
pub mod sub_entity_repository;

pub use resume_repository::{
    CreateResumeData, PatchField, PatchResumeData, ResumeRecord, ResumeRepository,
    ResumeRepositoryError,
};
pub use sub_entity_repository::{SectionRepositories, SubEntityRepository, SubEntityRepositoryError};
