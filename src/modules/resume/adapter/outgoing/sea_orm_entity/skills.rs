use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::{Skill, Stored};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(nullable)]
    pub rating: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_stored(self) -> Stored<Skill> {
        Stored::new(
            self.id,
            Skill {
                name: self.name,
                rating: self.rating,
            },
        )
    }
}

pub fn active_model(id: Uuid, record: Skill) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        name: Set(record.name),
        rating: Set(record.rating),
    }
}
