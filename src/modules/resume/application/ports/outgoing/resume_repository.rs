// src/modules/resume/application/ports/outgoing/resume_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::domain::entities::{is_hex_color, PhotoPosition, SectionKind};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear (or reset to default for non-nullable fields)
// - Value(v): replace with v
//
// With #[serde(default)] on the containing struct an omitted field is Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateResumeData {
    /// Generated by the client, immutable afterwards
    pub resume_id: String,
    pub user_id: UserId,
    pub title: String,
}

/// Partial update of the scalar fields. `resumeId` and `userId` are not patchable,
/// and sub-collections are replaced through their own batch operation.
///
/// - title: Null is ignored (the title is required)
/// - photo_position / theme_color: Null resets to the default
/// - everything else: Null clears
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatchResumeData {
    pub title: PatchField<String>,
    pub first_name: PatchField<String>,
    pub last_name: PatchField<String>,
    pub job_title: PatchField<String>,
    pub address: PatchField<String>,
    pub phone: PatchField<String>,
    pub email: PatchField<String>,
    pub summary: PatchField<String>,
    pub profile_photo: PatchField<String>,
    pub photo_position: PatchField<PhotoPosition>,
    pub theme_color: PatchField<String>,
}

impl PatchResumeData {
    /// Field values the store must never hold. Nulls are always acceptable.
    pub fn validate(&self) -> Result<(), String> {
        if let PatchField::Value(color) = &self.theme_color {
            if !is_hex_color(color) {
                return Err("themeColor must be a #rgb or #rrggbb color".to_string());
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.first_name.is_unset()
            && self.last_name.is_unset()
            && self.job_title.is_unset()
            && self.address.is_unset()
            && self.phone.is_unset()
            && self.email.is_unset()
            && self.summary.is_unset()
            && self.profile_photo.is_unset()
            && self.photo_position.is_unset()
            && self.theme_color.is_unset()
    }
}

/// Stored resume row: scalar fields plus the ordered id lists of its sections.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeRecord {
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
    pub experience: Vec<Uuid>,
    pub education: Vec<Uuid>,
    pub skills: Vec<Uuid>,
    pub custom_sections: Vec<Uuid>,
    pub social_profiles: Vec<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub fn references(&self, kind: SectionKind) -> &[Uuid] {
        match kind {
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
            SectionKind::Skills => &self.skills,
            SectionKind::CustomSections => &self.custom_sections,
            SectionKind::SocialProfiles => &self.social_profiles,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Resume not found")]
    NotFound,

    /// `resume_id` already taken at INSERT time.
    #[error("Resume id already exists")]
    DuplicateKey,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (resumes table only, section records live behind SubEntityRepository)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn find_by_resume_id(&self, resume_id: &str)
        -> Result<ResumeRecord, ResumeRepositoryError>;

    /// Newest `updated_at` first. No rows is an empty list, not an error.
    async fn find_by_user(&self, user_id: &UserId)
        -> Result<Vec<ResumeRecord>, ResumeRepositoryError>;

    async fn insert(&self, data: CreateResumeData) -> Result<ResumeRecord, ResumeRepositoryError>;

    /// Applies the patch and bumps `updated_at`. An empty patch returns the row unchanged.
    async fn patch(
        &self,
        resume_id: &str,
        data: PatchResumeData,
    ) -> Result<ResumeRecord, ResumeRepositoryError>;

    /// Replaces one reference list wholesale and bumps `updated_at`.
    async fn set_references(
        &self,
        resume_id: &str,
        kind: SectionKind,
        ids: Vec<Uuid>,
    ) -> Result<ResumeRecord, ResumeRepositoryError>;

    async fn delete(&self, resume_id: &str) -> Result<(), ResumeRepositoryError>;

    async fn exists_for_owner(
        &self,
        resume_id: &str,
        user_id: &UserId,
    ) -> Result<bool, ResumeRepositoryError>;
}
