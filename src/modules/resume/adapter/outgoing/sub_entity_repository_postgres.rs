use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resume::adapter::outgoing::sea_orm_entity::{
    custom_sections, educations, experiences, skills, social_profiles,
};
use crate::modules::resume::application::ports::outgoing::sub_entity_repository::{
    SubEntityRepository, SubEntityRepositoryError,
};
use crate::modules::resume::domain::entities::{
    CustomSection, Education, Experience, Skill, SocialProfile, Stored,
};

/// One adapter for all five section tables.
#[derive(Clone)]
pub struct SubEntityRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubEntityRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SubEntityRepositoryError {
    SubEntityRepositoryError::DatabaseError(e.to_string())
}

fn map_update_err(e: DbErr) -> SubEntityRepositoryError {
    match e {
        DbErr::RecordNotUpdated => SubEntityRepositoryError::NotFound,
        other => map_db_err(other),
    }
}

macro_rules! impl_sub_entity_repository {
    ($record:ty, $table:ident) => {
        #[async_trait]
        impl SubEntityRepository<$record> for SubEntityRepositoryPostgres {
            async fn find_many(
                &self,
                ids: &[Uuid],
            ) -> Result<Vec<Stored<$record>>, SubEntityRepositoryError> {
                if ids.is_empty() {
                    return Ok(Vec::new());
                }

                let models = $table::Entity::find()
                    .filter($table::Column::Id.is_in(ids.iter().copied()))
                    .all(&*self.db)
                    .await
                    .map_err(map_db_err)?;

                Ok(models.into_iter().map($table::Model::into_stored).collect())
            }

            async fn find_by_id(
                &self,
                id: Uuid,
            ) -> Result<Option<Stored<$record>>, SubEntityRepositoryError> {
                let model = $table::Entity::find_by_id(id)
                    .one(&*self.db)
                    .await
                    .map_err(map_db_err)?;

                Ok(model.map($table::Model::into_stored))
            }

            async fn insert(
                &self,
                record: $record,
            ) -> Result<Stored<$record>, SubEntityRepositoryError> {
                let model = $table::active_model(Uuid::new_v4(), record)
                    .insert(&*self.db)
                    .await
                    .map_err(map_db_err)?;

                Ok(model.into_stored())
            }

            async fn update(
                &self,
                id: Uuid,
                record: $record,
            ) -> Result<Stored<$record>, SubEntityRepositoryError> {
                let model = $table::active_model(id, record)
                    .update(&*self.db)
                    .await
                    .map_err(map_update_err)?;

                Ok(model.into_stored())
            }

            async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, SubEntityRepositoryError> {
                if ids.is_empty() {
                    return Ok(0);
                }

                let result = $table::Entity::delete_many()
                    .filter($table::Column::Id.is_in(ids.iter().copied()))
                    .exec(&*self.db)
                    .await
                    .map_err(map_db_err)?;

                Ok(result.rows_affected)
            }
        }
    };
}

impl_sub_entity_repository!(Experience, experiences);
impl_sub_entity_repository!(Education, educations);
impl_sub_entity_repository!(Skill, skills);
impl_sub_entity_repository!(CustomSection, custom_sections);
impl_sub_entity_repository!(SocialProfile, social_profiles);
