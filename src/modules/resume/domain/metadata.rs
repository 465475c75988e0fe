use serde::Serialize;

use super::entities::Resume;

const DEFAULT_TITLE: &str = "Skill Match AI - AI-Powered Professional Resume Creator";
const DEFAULT_DESCRIPTION: &str = "Easily craft a standout professional resume with Skill Match's AI-driven Resume Builder. With just a few clicks, generate a personalized and polished resume that highlights your skills and experience.";

/// Page metadata for a shared resume link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeMetadata {
    pub title: String,
    pub description: String,
}

impl ResumeMetadata {
    /// Generic metadata used when the resume is missing, unreadable or unnamed.
    pub fn fallback() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    pub fn for_resume(resume: &Resume) -> Self {
        match resume.display_name() {
            Some(name) => Self {
                title: format!("{} - SkillMatch AI Resume Builder", name),
                description: format!(
                    "{}'s Resume. Powered by Skill Match AI Resume Builder.",
                    name
                ),
            },
            None => Self::fallback(),
        }
    }
}
