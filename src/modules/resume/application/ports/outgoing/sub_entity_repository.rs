use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resume::domain::entities::{
    CustomSection, Education, Experience, Skill, SocialProfile, Stored,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubEntityRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// One homogeneous collection of section records (experience, skills, ...).
#[async_trait]
pub trait SubEntityRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Records whose id is in `ids`, in no particular order. Unknown ids are skipped.
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Stored<T>>, SubEntityRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<T>>, SubEntityRepositoryError>;

    /// Inserts under a freshly generated id.
    async fn insert(&self, record: T) -> Result<Stored<T>, SubEntityRepositoryError>;

    async fn update(&self, id: Uuid, record: T) -> Result<Stored<T>, SubEntityRepositoryError>;

    /// Returns the number of rows removed.
    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, SubEntityRepositoryError>;
}

/// The five section collections, grouped so services can take them as one dependency.
#[derive(Clone)]
pub struct SectionRepositories {
    pub experience: Arc<dyn SubEntityRepository<Experience>>,
    pub education: Arc<dyn SubEntityRepository<Education>>,
    pub skills: Arc<dyn SubEntityRepository<Skill>>,
    pub custom_sections: Arc<dyn SubEntityRepository<CustomSection>>,
    pub social_profiles: Arc<dyn SubEntityRepository<SocialProfile>>,
}

impl SectionRepositories {
    /// Uses one adapter for all five collections.
    pub fn from_store<S>(store: S) -> Self
    where
        S: SubEntityRepository<Experience>
            + SubEntityRepository<Education>
            + SubEntityRepository<Skill>
            + SubEntityRepository<CustomSection>
            + SubEntityRepository<SocialProfile>
            + 'static,
    {
        let store = Arc::new(store);
        Self {
            experience: store.clone(),
            education: store.clone(),
            skills: store.clone(),
            custom_sections: store.clone(),
            social_profiles: store,
        }
    }
}
