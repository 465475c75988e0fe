use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::resume::application::ports::incoming::use_cases::{
    DeleteResumeError, DeleteResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    ResumeRepository, ResumeRepositoryError,
};
use crate::modules::resume::application::ports::outgoing::sub_entity_repository::SectionRepositories;

fn map_repository_error(e: ResumeRepositoryError) -> DeleteResumeError {
    match e {
        ResumeRepositoryError::NotFound => DeleteResumeError::NotFound,
        ResumeRepositoryError::DatabaseError(msg)
        | ResumeRepositoryError::SerializationError(msg) => DeleteResumeError::RepositoryError(msg),
        ResumeRepositoryError::DuplicateKey => DeleteResumeError::RepositoryError(
            "unexpected duplicate key while deleting resume".to_string(),
        ),
    }
}

/// Removes every referenced section record, then the resume row itself.
pub struct DeleteResumeService<R>
where
    R: ResumeRepository,
{
    resume_repository: R,
    sections: SectionRepositories,
}

impl<R> DeleteResumeService<R>
where
    R: ResumeRepository,
{
    pub fn new(resume_repository: R, sections: SectionRepositories) -> Self {
        Self {
            resume_repository,
            sections,
        }
    }
}

#[async_trait]
impl<R> DeleteResumeUseCase for DeleteResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self, resume_id: &str) -> Result<(), DeleteResumeError> {
        let record = self
            .resume_repository
            .find_by_resume_id(resume_id)
            .await
            .map_err(map_repository_error)?;

        let removed = futures::try_join!(
            self.sections.experience.delete_many(&record.experience),
            self.sections.education.delete_many(&record.education),
            self.sections.skills.delete_many(&record.skills),
            self.sections.custom_sections.delete_many(&record.custom_sections),
            self.sections.social_profiles.delete_many(&record.social_profiles),
        )
        .map_err(|e| {
            error!("Failed to delete sections of resume {}: {}", resume_id, e);
            DeleteResumeError::RepositoryError(e.to_string())
        })?;

        self.resume_repository
            .delete(resume_id)
            .await
            .map_err(map_repository_error)?;

        let (experience, education, skills, custom, social) = removed;
        info!(
            "Deleted resume {} with {} section record(s)",
            resume_id,
            experience + education + skills + custom + social
        );

        Ok(())
    }
}
