use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::{SocialProfile, Stored};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "social_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub platform: String,

    #[sea_orm(column_type = "Text")]
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_stored(self) -> Stored<SocialProfile> {
        Stored::new(
            self.id,
            SocialProfile {
                platform: self.platform,
                url: self.url,
            },
        )
    }
}

pub fn active_model(id: Uuid, record: SocialProfile) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        platform: Set(record.platform),
        url: Set(record.url),
    }
}
