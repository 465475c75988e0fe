use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Accent color used when a resume has none of its own.
pub const DEFAULT_THEME_COLOR: &str = "#ff6666";

/// `#rgb` or `#rrggbb`. Anything else never reaches a `style` attribute.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

//
// ──────────────────────────────────────────────────────────
// Scalar value types
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoPosition {
    Left,
    Center,
    #[default]
    Right,
}

impl PhotoPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoPosition::Left => "left",
            PhotoPosition::Center => "center",
            PhotoPosition::Right => "right",
        }
    }
}

impl FromStr for PhotoPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(PhotoPosition::Left),
            "center" => Ok(PhotoPosition::Center),
            "right" => Ok(PhotoPosition::Right),
            other => Err(format!("unknown photo position: {}", other)),
        }
    }
}

/// The five referenced sub-collections of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    CustomSections,
    SocialProfiles,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::CustomSections,
        SectionKind::SocialProfiles,
    ];

    /// Field name in resume JSON.
    pub fn field_name(self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::CustomSections => "customSections",
            SectionKind::SocialProfiles => "socialProfiles",
        }
    }

    /// Segment used in `/api/resumes/{resume_id}/{segment}`.
    pub fn path_segment(self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::CustomSections => "custom-sections",
            SectionKind::SocialProfiles => "social-profiles",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == segment)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

//
// ──────────────────────────────────────────────────────────
// Sub-entity records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub city: String,
    pub state: String,
    pub start_date: String,
    pub end_date: String,
    /// Rich text from the editor
    pub work_summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub university_name: String,
    pub degree: String,
    pub major: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// 0..=5 in the editor, unchecked here
    pub rating: Option<i32>,
}

/// Free-form titled section. `content` is pre-sanitized rich text and is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    /// github, linkedin, twitter, leetcode, codechef, hackerrank, portfolio, or anything else
    pub platform: String,
    pub url: String,
}

/// A persisted sub-entity together with its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(alias = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Stored<T> {
    pub fn new(id: Uuid, record: T) -> Self {
        Self { id, record }
    }
}

/// A sub-entity as submitted by a form: it may or may not carry an identity yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identified<T> {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Identified<T> {
    pub fn new(record: T) -> Self {
        Self { id: None, record }
    }

    pub fn with_id(id: Uuid, record: T) -> Self {
        Self {
            id: Some(id),
            record,
        }
    }
}

impl<T> From<Stored<T>> for Identified<T> {
    fn from(stored: Stored<T>) -> Self {
        Identified::with_id(stored.id, stored.record)
    }
}

//
// ──────────────────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────────────────
//

/// A resume with every sub-collection loaded, in reference order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub resume_id: String,
    pub user_id: UserId,
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
    pub experience: Vec<Stored<Experience>>,
    pub education: Vec<Stored<Education>>,
    pub skills: Vec<Stored<Skill>>,
    pub custom_sections: Vec<Stored<CustomSection>>,
    pub social_profiles: Vec<Stored<SocialProfile>>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    /// "First Last", or `None` when neither name is set.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
