use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::entities::{
    is_hex_color, CustomSection, Education, Experience, Identified, PhotoPosition, Resume,
    Skill, SocialProfile, DEFAULT_THEME_COLOR,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {0} cannot be edited")]
    ReadOnlyField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Unsaved form state of the resume being edited.
///
/// Edits are merged field by field with [`ResumeDraft::set_field`] and read back by
/// the preview renderers. Nothing here touches the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDraft {
    pub resume_id: String,
    pub title: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub summary: Option<String>,
    pub profile_photo: Option<String>,
    pub photo_position: PhotoPosition,
    pub theme_color: String,
    pub experience: Vec<Identified<Experience>>,
    pub education: Vec<Identified<Education>>,
    pub skills: Vec<Identified<Skill>>,
    pub custom_sections: Vec<Identified<CustomSection>>,
    pub social_profiles: Vec<Identified<SocialProfile>>,
}

impl ResumeDraft {
    /// Blank draft, as for a freshly created resume.
    pub fn empty(resume_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            resume_id: resume_id.into(),
            title: title.into(),
            first_name: None,
            last_name: None,
            job_title: None,
            address: None,
            phone: None,
            email: None,
            summary: None,
            profile_photo: None,
            photo_position: PhotoPosition::default(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            custom_sections: Vec::new(),
            social_profiles: Vec::new(),
        }
    }

    /// Overwrites one field. List fields (`experience`, `skills`, `socialProfiles`, ...)
    /// are replaced as a whole; `null` clears optional scalars and empties lists.
    ///
    /// Only the JSON shape is checked. Required-field rules belong to the edit surface.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), DraftError> {
        match name {
            "resumeId" | "userId" | "updatedAt" => {
                return Err(DraftError::ReadOnlyField(name.to_string()))
            }
            "title" => self.title = parse::<Option<String>>(name, value)?.unwrap_or_default(),
            "firstName" => self.first_name = parse(name, value)?,
            "lastName" => self.last_name = parse(name, value)?,
            "jobTitle" => self.job_title = parse(name, value)?,
            "address" => self.address = parse(name, value)?,
            "phone" => self.phone = parse(name, value)?,
            "email" => self.email = parse(name, value)?,
            "summary" => self.summary = parse(name, value)?,
            "profilePhoto" => self.profile_photo = parse(name, value)?,
            "photoPosition" => {
                self.photo_position =
                    parse::<Option<PhotoPosition>>(name, value)?.unwrap_or_default()
            }
            "themeColor" => {
                let color = parse::<Option<String>>(name, value)?
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string());
                if !is_hex_color(&color) {
                    return Err(DraftError::InvalidValue {
                        field: name.to_string(),
                        message: "expected a #rgb or #rrggbb color".to_string(),
                    });
                }
                self.theme_color = color;
            }
            "experience" => self.experience = parse_list(name, value)?,
            "education" => self.education = parse_list(name, value)?,
            "skills" => self.skills = parse_list(name, value)?,
            "customSections" => self.custom_sections = parse_list(name, value)?,
            "socialProfiles" => self.social_profiles = parse_list(name, value)?,
            other => return Err(DraftError::UnknownField(other.to_string())),
        }

        Ok(())
    }

    /// Theme color, falling back to the default unless it is a hex color.
    pub fn accent(&self) -> &str {
        if is_hex_color(&self.theme_color) {
            &self.theme_color
        } else {
            DEFAULT_THEME_COLOR
        }
    }
}

impl From<&Resume> for ResumeDraft {
    fn from(resume: &Resume) -> Self {
        Self {
            resume_id: resume.resume_id.clone(),
            title: resume.title.clone(),
            first_name: resume.first_name.clone(),
            last_name: resume.last_name.clone(),
            job_title: resume.job_title.clone(),
            address: resume.address.clone(),
            phone: resume.phone.clone(),
            email: resume.email.clone(),
            summary: resume.summary.clone(),
            profile_photo: resume.profile_photo.clone(),
            photo_position: resume.photo_position,
            theme_color: resume.theme_color.clone(),
            experience: resume.experience.iter().cloned().map(Into::into).collect(),
            education: resume.education.iter().cloned().map(Into::into).collect(),
            skills: resume.skills.iter().cloned().map(Into::into).collect(),
            custom_sections: resume
                .custom_sections
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
            social_profiles: resume
                .social_profiles
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
        }
    }
}

fn parse<T: DeserializeOwned>(field: &str, value: Value) -> Result<T, DraftError> {
    serde_json::from_value(value).map_err(|e| DraftError::InvalidValue {
        field: field.to_string(),
        message: e.to_string(),
    })
}

fn parse_list<T: DeserializeOwned>(field: &str, value: Value) -> Result<Vec<T>, DraftError> {
    Ok(parse::<Option<Vec<T>>>(field, value)?.unwrap_or_default())
}
