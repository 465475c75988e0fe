use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::modules::resume::domain::entities::{
    CustomSection, Education, Experience, Identified, Resume, SectionKind, Skill, SocialProfile,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceSubCollectionError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for ReplaceSubCollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceSubCollectionError::NotFound => write!(f, "Resume not found"),
            ReplaceSubCollectionError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

/// The full new contents of one section, as submitted by its form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBatch {
    Experience(Vec<Identified<Experience>>),
    Education(Vec<Identified<Education>>),
    Skills(Vec<Identified<Skill>>),
    CustomSections(Vec<Identified<CustomSection>>),
    SocialProfiles(Vec<Identified<SocialProfile>>),
}

impl SectionBatch {
    /// Parses a JSON array of records for `kind`.
    pub fn from_json(kind: SectionKind, value: Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SectionKind::Experience => SectionBatch::Experience(serde_json::from_value(value)?),
            SectionKind::Education => SectionBatch::Education(serde_json::from_value(value)?),
            SectionKind::Skills => SectionBatch::Skills(serde_json::from_value(value)?),
            SectionKind::CustomSections => {
                SectionBatch::CustomSections(serde_json::from_value(value)?)
            }
            SectionKind::SocialProfiles => {
                SectionBatch::SocialProfiles(serde_json::from_value(value)?)
            }
        })
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBatch::Experience(_) => SectionKind::Experience,
            SectionBatch::Education(_) => SectionKind::Education,
            SectionBatch::Skills(_) => SectionKind::Skills,
            SectionBatch::CustomSections(_) => SectionKind::CustomSections,
            SectionBatch::SocialProfiles(_) => SectionKind::SocialProfiles,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SectionBatch::Experience(items) => items.len(),
            SectionBatch::Education(items) => items.len(),
            SectionBatch::Skills(items) => items.len(),
            SectionBatch::CustomSections(items) => items.len(),
            SectionBatch::SocialProfiles(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Saves every record of the batch (update when its id resolves, insert otherwise),
/// then points the resume's reference list at exactly the saved ids.
///
/// Records that were referenced before but are missing from the batch stay in the
/// store, unreferenced.
#[async_trait]
pub trait ReplaceSubCollectionUseCase: Send + Sync {
    async fn execute(
        &self,
        resume_id: &str,
        batch: SectionBatch,
    ) -> Result<Resume, ReplaceSubCollectionError>;
}
