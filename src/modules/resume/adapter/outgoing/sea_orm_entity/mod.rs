pub mod custom_sections;
pub mod educations;
pub mod experiences;
pub mod resumes;
pub mod skills;
pub mod social_profiles;
