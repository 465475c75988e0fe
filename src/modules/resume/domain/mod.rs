pub mod draft;
pub mod entities;
pub mod metadata;
pub mod preview;

pub use draft::{DraftError, ResumeDraft};
pub use entities::{
    CustomSection, Education, Experience, Identified, PhotoPosition, Resume, SectionKind, Skill,
    SocialProfile, Stored, DEFAULT_THEME_COLOR,
};
pub use metadata::ResumeMetadata;
