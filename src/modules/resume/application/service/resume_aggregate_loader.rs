use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRecord;
use crate::modules::resume::application::ports::outgoing::sub_entity_repository::{
    SectionRepositories, SubEntityRepository, SubEntityRepositoryError,
};
use crate::modules::resume::domain::entities::{Resume, Stored};

/// Builds the `Resume` aggregate from its stored row.
///
/// Issues one query per non-empty section (the five run concurrently) and puts the
/// results back into reference order. Ids with no matching record are skipped.
#[derive(Clone)]
pub struct ResumeAggregateLoader {
    sections: SectionRepositories,
}

impl ResumeAggregateLoader {
    pub fn new(sections: SectionRepositories) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &SectionRepositories {
        &self.sections
    }

    pub async fn load(&self, record: ResumeRecord) -> Result<Resume, SubEntityRepositoryError> {
        let (experience, education, skills, custom_sections, social_profiles) = futures::try_join!(
            load_in_order(self.sections.experience.as_ref(), &record.experience),
            load_in_order(self.sections.education.as_ref(), &record.education),
            load_in_order(self.sections.skills.as_ref(), &record.skills),
            load_in_order(self.sections.custom_sections.as_ref(), &record.custom_sections),
            load_in_order(self.sections.social_profiles.as_ref(), &record.social_profiles),
        )?;

        Ok(Resume {
            resume_id: record.resume_id,
            user_id: record.user_id,
            title: record.title,
            first_name: record.first_name,
            last_name: record.last_name,
            job_title: record.job_title,
            address: record.address,
            phone: record.phone,
            email: record.email,
            summary: record.summary,
            profile_photo: record.profile_photo,
            photo_position: record.photo_position,
            theme_color: record.theme_color,
            experience,
            education,
            skills,
            custom_sections,
            social_profiles,
            updated_at: record.updated_at,
        })
    }
}

async fn load_in_order<T>(
    repo: &dyn SubEntityRepository<T>,
    ids: &[Uuid],
) -> Result<Vec<Stored<T>>, SubEntityRepositoryError>
where
    T: Send + Sync + 'static,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut found: HashMap<Uuid, Stored<T>> = repo
        .find_many(ids)
        .await?
        .into_iter()
        .map(|stored| (stored.id, stored))
        .collect();

    let ordered: Vec<Stored<T>> = ids.iter().filter_map(|id| found.remove(id)).collect();

    if ordered.len() < ids.len() {
        debug!(
            "Skipped {} dangling section reference(s)",
            ids.len() - ordered.len()
        );
    }

    Ok(ordered)
}
