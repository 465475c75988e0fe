use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::{CustomSection, Stored};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    /// Rich text, rendered verbatim
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_stored(self) -> Stored<CustomSection> {
        Stored::new(
            self.id,
            CustomSection {
                title: self.title,
                content: self.content,
            },
        )
    }
}

pub fn active_model(id: Uuid, record: CustomSection) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        title: Set(record.title),
        content: Set(record.content),
    }
}
