use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::adapter::outgoing::sea_orm_entity::resumes::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    CreateResumeData, PatchField, PatchResumeData, ResumeRecord, ResumeRepository,
    ResumeRepositoryError,
};
use crate::modules::resume::domain::entities::{PhotoPosition, SectionKind, DEFAULT_THEME_COLOR};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ResumeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_returning(
        &self,
        resume_id: &str,
        model: ActiveModel,
    ) -> Result<ResumeRecord, ResumeRepositoryError> {
        let results = Entity::update_many()
            .set(model)
            .filter(Column::ResumeId.eq(resume_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ResumeRepositoryError::NotFound)?;

        model_to_record(result)
    }
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryPostgres {
    async fn find_by_resume_id(
        &self,
        resume_id: &str,
    ) -> Result<ResumeRecord, ResumeRepositoryError> {
        let model = Entity::find_by_id(resume_id.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ResumeRepositoryError::NotFound)?;

        model_to_record(model)
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ResumeRecord>, ResumeRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id.as_str()))
            .order_by_desc(Column::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_record).collect()
    }

    async fn insert(&self, data: CreateResumeData) -> Result<ResumeRecord, ResumeRepositoryError> {
        let now = Utc::now().fixed_offset();
        let no_refs = serde_json::Value::Array(Vec::new());

        let model = ActiveModel {
            resume_id: Set(data.resume_id),
            user_id: Set(data.user_id.into_inner()),
            title: Set(data.title),
            first_name: Set(None),
            last_name: Set(None),
            job_title: Set(None),
            address: Set(None),
            phone: Set(None),
            email: Set(None),
            summary: Set(None),
            profile_photo: Set(None),
            photo_position: Set(PhotoPosition::default().as_str().to_string()),
            theme_color: Set(DEFAULT_THEME_COLOR.to_string()),
            experience: Set(no_refs.clone()),
            education: Set(no_refs.clone()),
            skills: Set(no_refs.clone()),
            custom_sections: Set(no_refs.clone()),
            social_profiles: Set(no_refs),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_insert_error)?;

        model_to_record(result)
    }

    async fn patch(
        &self,
        resume_id: &str,
        data: PatchResumeData,
    ) -> Result<ResumeRecord, ResumeRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        // The title is required, so an explicit null leaves it alone.
        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        set_optional(&mut model.first_name, data.first_name);
        set_optional(&mut model.last_name, data.last_name);
        set_optional(&mut model.job_title, data.job_title);
        set_optional(&mut model.address, data.address);
        set_optional(&mut model.phone, data.phone);
        set_optional(&mut model.email, data.email);
        set_optional(&mut model.summary, data.summary);
        set_optional(&mut model.profile_photo, data.profile_photo);

        match data.photo_position {
            PatchField::Unset => {}
            PatchField::Null => {
                model.photo_position = Set(PhotoPosition::default().as_str().to_string())
            }
            PatchField::Value(position) => model.photo_position = Set(position.as_str().to_string()),
        }

        match data.theme_color {
            PatchField::Unset => {}
            PatchField::Null => model.theme_color = Set(DEFAULT_THEME_COLOR.to_string()),
            PatchField::Value(color) => model.theme_color = Set(color),
        }

        let has_changes = model.title.is_set()
            || model.first_name.is_set()
            || model.last_name.is_set()
            || model.job_title.is_set()
            || model.address.is_set()
            || model.phone.is_set()
            || model.email.is_set()
            || model.summary.is_set()
            || model.profile_photo.is_set()
            || model.photo_position.is_set()
            || model.theme_color.is_set();

        if !has_changes {
            return self.find_by_resume_id(resume_id).await;
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        self.update_returning(resume_id, model).await
    }

    async fn set_references(
        &self,
        resume_id: &str,
        kind: SectionKind,
        ids: Vec<Uuid>,
    ) -> Result<ResumeRecord, ResumeRepositoryError> {
        let refs = to_json(&ids)?;
        let mut model = <ActiveModel as Default>::default();

        match kind {
            SectionKind::Experience => model.experience = Set(refs),
            SectionKind::Education => model.education = Set(refs),
            SectionKind::Skills => model.skills = Set(refs),
            SectionKind::CustomSections => model.custom_sections = Set(refs),
            SectionKind::SocialProfiles => model.social_profiles = Set(refs),
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        self.update_returning(resume_id, model).await
    }

    async fn delete(&self, resume_id: &str) -> Result<(), ResumeRepositoryError> {
        let result = Entity::delete_by_id(resume_id.to_string())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ResumeRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn exists_for_owner(
        &self,
        resume_id: &str,
        user_id: &UserId,
    ) -> Result<bool, ResumeRepositoryError> {
        let found = Entity::find()
            .filter(Column::ResumeId.eq(resume_id))
            .filter(Column::UserId.eq(user_id.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn set_optional(
    column: &mut sea_orm::ActiveValue<Option<String>>,
    field: PatchField<String>,
) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *column = Set(None),
        PatchField::Value(v) => *column = Set(Some(v)),
    }
}

fn model_to_record(model: resumes::Model) -> Result<ResumeRecord, ResumeRepositoryError> {
    let photo_position = model.photo_position.parse().unwrap_or_else(|e| {
        warn!("Resume {}: {}, using default", model.resume_id, e);
        PhotoPosition::default()
    });

    Ok(ResumeRecord {
        experience: from_json(&model.experience)?,
        education: from_json(&model.education)?,
        skills: from_json(&model.skills)?,
        custom_sections: from_json(&model.custom_sections)?,
        social_profiles: from_json(&model.social_profiles)?,
        resume_id: model.resume_id,
        user_id: UserId::from(model.user_id),
        title: model.title,
        first_name: model.first_name,
        last_name: model.last_name,
        job_title: model.job_title,
        address: model.address,
        phone: model.phone,
        email: model.email,
        summary: model.summary,
        profile_photo: model.profile_photo,
        photo_position,
        theme_color: model.theme_color,
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ResumeRepositoryError> {
    serde_json::to_value(data).map_err(|e| ResumeRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ResumeRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ResumeRepositoryError::SerializationError(e.to_string()))
}

fn map_insert_error(e: DbErr) -> ResumeRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        ResumeRepositoryError::DuplicateKey
    } else {
        ResumeRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
