use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::{error, warn};
use uuid::Uuid;

use super::ResumeAggregateLoader;
use crate::modules::resume::application::ports::incoming::use_cases::{
    ReplaceSubCollectionError, ReplaceSubCollectionUseCase, SectionBatch,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    ResumeRepository, ResumeRepositoryError,
};
use crate::modules::resume::application::ports::outgoing::sub_entity_repository::{
    SubEntityRepository, SubEntityRepositoryError,
};
use crate::modules::resume::domain::entities::{Identified, Resume};

fn map_repository_error(e: ResumeRepositoryError) -> ReplaceSubCollectionError {
    match e {
        ResumeRepositoryError::NotFound => ReplaceSubCollectionError::NotFound,
        ResumeRepositoryError::DatabaseError(msg)
        | ResumeRepositoryError::SerializationError(msg) => {
            ReplaceSubCollectionError::RepositoryError(msg)
        }
        ResumeRepositoryError::DuplicateKey => ReplaceSubCollectionError::RepositoryError(
            "unexpected duplicate key while replacing section".to_string(),
        ),
    }
}

/// Update when the submitted id is one of this resume's records and still
/// resolves, insert under a new id otherwise. Ids owned by another resume are
/// never touched.
async fn save_one<T>(
    repo: &dyn SubEntityRepository<T>,
    owned: &[Uuid],
    item: Identified<T>,
) -> Result<Uuid, SubEntityRepositoryError>
where
    T: Send + Sync + 'static,
{
    let existing = match item.id {
        Some(id) if owned.contains(&id) => repo.find_by_id(id).await?.map(|stored| stored.id),
        _ => None,
    };

    let saved = match existing {
        Some(id) => repo.update(id, item.record).await?,
        None => repo.insert(item.record).await?,
    };

    Ok(saved.id)
}

/// Saves all items concurrently. The returned ids follow the submitted order.
async fn save_all<T>(
    repo: &dyn SubEntityRepository<T>,
    owned: &[Uuid],
    items: Vec<Identified<T>>,
) -> Result<Vec<Uuid>, SubEntityRepositoryError>
where
    T: Send + Sync + 'static,
{
    try_join_all(items.into_iter().map(|item| save_one(repo, owned, item))).await
}

pub struct ReplaceSubCollectionService<R>
where
    R: ResumeRepository,
{
    resume_repository: R,
    loader: ResumeAggregateLoader,
}

impl<R> ReplaceSubCollectionService<R>
where
    R: ResumeRepository,
{
    pub fn new(resume_repository: R, loader: ResumeAggregateLoader) -> Self {
        Self {
            resume_repository,
            loader,
        }
    }
}

#[async_trait]
impl<R> ReplaceSubCollectionUseCase for ReplaceSubCollectionService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(
        &self,
        resume_id: &str,
        batch: SectionBatch,
    ) -> Result<Resume, ReplaceSubCollectionError> {
        let current = self
            .resume_repository
            .find_by_resume_id(resume_id)
            .await
            .map_err(map_repository_error)?;

        let kind = batch.kind();
        let sections = self.loader.sections();
        let owned = current.references(kind);

        let ids = match batch {
            SectionBatch::Experience(items) => {
                save_all(sections.experience.as_ref(), owned, items).await
            }
            SectionBatch::Education(items) => {
                save_all(sections.education.as_ref(), owned, items).await
            }
            SectionBatch::Skills(items) => save_all(sections.skills.as_ref(), owned, items).await,
            SectionBatch::CustomSections(items) => {
                save_all(sections.custom_sections.as_ref(), owned, items).await
            }
            SectionBatch::SocialProfiles(items) => {
                save_all(sections.social_profiles.as_ref(), owned, items).await
            }
        }
        .map_err(|e| {
            error!("Failed to save {} of resume {}: {}", kind, resume_id, e);
            ReplaceSubCollectionError::RepositoryError(e.to_string())
        })?;

        let orphaned: Vec<Uuid> = owned
            .iter()
            .filter(|id| !ids.contains(id))
            .copied()
            .collect();
        if !orphaned.is_empty() {
            warn!(
                "Resume {} no longer references {} {} record(s): {:?}",
                resume_id,
                orphaned.len(),
                kind,
                orphaned
            );
        }

        let updated = self
            .resume_repository
            .set_references(resume_id, kind, ids)
            .await
            .map_err(map_repository_error)?;

        self.loader
            .load(updated)
            .await
            .map_err(|e| ReplaceSubCollectionError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::resume::domain::entities::{Experience, SectionKind, Skill};
    use crate::tests::support::in_memory_store::InMemoryResumeStore;
    use crate::tests::support::resume_fixtures::{experience, record};

    fn service(store: &InMemoryResumeStore) -> ReplaceSubCollectionService<InMemoryResumeStore> {
        ReplaceSubCollectionService::new(store.clone(), ResumeAggregateLoader::new(store.sections()))
    }

    #[tokio::test]
    async fn test_execute_inserts_new_records_in_order() {
        let store = InMemoryResumeStore::default();
        store.seed_resume(record("r1", "u1", "Draft"));

        let batch = SectionBatch::Experience(vec![
            Identified::new(experience("Acme")),
            Identified::new(experience("Initech")),
        ]);
        let resume = service(&store).execute("r1", batch).await.unwrap();

        let companies: Vec<&str> = resume
            .experience
            .iter()
            .map(|e| e.record.company.as_str())
            .collect();
        assert_eq!(companies, vec!["Acme", "Initech"]);
        assert_eq!(store.section_count(SectionKind::Experience), 2);
    }

    #[tokio::test]
    async fn test_execute_updates_record_with_known_id() {
        let store = InMemoryResumeStore::default();
        let id = store.seed_experience(experience("Acme"));
        let mut row = record("r1", "u1", "Draft");
        row.experience = vec![id];
        store.seed_resume(row);

        let batch = SectionBatch::Experience(vec![Identified::with_id(
            id,
            Experience {
                company: "Acme Corp".to_string(),
                ..experience("Acme")
            },
        )]);
        let resume = service(&store).execute("r1", batch).await.unwrap();

        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].id, id);
        assert_eq!(resume.experience[0].record.company, "Acme Corp");
        assert_eq!(store.section_count(SectionKind::Experience), 1);
    }

    #[tokio::test]
    async fn test_execute_inserts_when_id_does_not_resolve() {
        let store = InMemoryResumeStore::default();
        store.seed_resume(record("r1", "u1", "Draft"));
        let stale = Uuid::new_v4();

        let batch = SectionBatch::Skills(vec![Identified::with_id(
            stale,
            Skill {
                name: "Rust".to_string(),
                rating: Some(5),
            },
        )]);
        let resume = service(&store).execute("r1", batch).await.unwrap();

        assert_eq!(resume.skills.len(), 1);
        assert_ne!(resume.skills[0].id, stale);
    }

    #[tokio::test]
    async fn test_execute_empty_batch_clears_references_but_keeps_records() {
        let store = InMemoryResumeStore::default();
        let id = store.seed_experience(experience("Acme"));
        let mut row = record("r1", "u1", "Draft");
        row.experience = vec![id];
        store.seed_resume(row);

        let resume = service(&store)
            .execute("r1", SectionBatch::Experience(Vec::new()))
            .await
            .unwrap();

        assert!(resume.experience.is_empty());
        assert_eq!(store.section_count(SectionKind::Experience), 1);
    }

    #[tokio::test]
    async fn test_execute_only_touches_requested_section() {
        let store = InMemoryResumeStore::default();
        let exp = store.seed_experience(experience("Acme"));
        let mut row = record("r1", "u1", "Draft");
        row.experience = vec![exp];
        store.seed_resume(row);

        let batch = SectionBatch::Skills(vec![Identified::new(Skill {
            name: "Rust".to_string(),
            rating: None,
        })]);
        let resume = service(&store).execute("r1", batch).await.unwrap();

        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.skills.len(), 1);
    }

    #[tokio::test]
    async fn test_execute_maps_not_found() {
        let store = InMemoryResumeStore::default();

        let result = service(&store)
            .execute("missing", SectionBatch::Skills(Vec::new()))
            .await;

        assert_eq!(result, Err(ReplaceSubCollectionError::NotFound));
    }

    #[tokio::test]
    async fn test_execute_never_adopts_records_of_another_resume() {
        let store = InMemoryResumeStore::default();
        let foreign = store.seed_experience(experience("Globex"));
        let mut other = record("r2", "u2", "Other");
        other.experience = vec![foreign];
        store.seed_resume(other);
        store.seed_resume(record("r1", "u1", "Draft"));

        let batch = SectionBatch::Experience(vec![Identified::with_id(
            foreign,
            Experience {
                company: "Overwritten".to_string(),
                ..experience("Globex")
            },
        )]);
        let resume = service(&store).execute("r1", batch).await.unwrap();

        assert_eq!(resume.experience.len(), 1);
        assert_ne!(resume.experience[0].id, foreign);
        assert_eq!(resume.experience[0].record.company, "Overwritten");
        assert_eq!(
            store.section::<Experience>(foreign).unwrap().company,
            "Globex"
        );
        assert_eq!(store.record("r2").unwrap().experience, vec![foreign]);
        assert_eq!(store.section_count(SectionKind::Experience), 2);
    }

    #[tokio::test]
    async fn test_failed_record_aborts_batch_before_references_change() {
        let store = InMemoryResumeStore::default();
        let id = store.seed_experience(experience("Acme"));
        let mut row = record("r1", "u1", "Draft");
        row.experience = vec![id];
        store.seed_resume(row);
        let before = store.record("r1").unwrap();
        store.fail_inserts(SectionKind::Experience);

        let batch = SectionBatch::Experience(vec![
            Identified::with_id(id, experience("Acme Corp")),
            Identified::new(experience("Initech")),
        ]);
        let result = service(&store).execute("r1", batch).await;

        assert!(matches!(
            result,
            Err(ReplaceSubCollectionError::RepositoryError(_))
        ));
        let after = store.record("r1").unwrap();
        assert_eq!(after.experience, vec![id]);
        assert_eq!(after.updated_at, before.updated_at);
    }
}
