use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::{Education, Stored};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub university_name: String,

    #[sea_orm(column_type = "Text")]
    pub degree: String,

    #[sea_orm(column_type = "Text")]
    pub major: String,

    #[sea_orm(column_type = "Text")]
    pub start_date: String,

    #[sea_orm(column_type = "Text")]
    pub end_date: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_stored(self) -> Stored<Education> {
        Stored::new(
            self.id,
            Education {
                university_name: self.university_name,
                degree: self.degree,
                major: self.major,
                start_date: self.start_date,
                end_date: self.end_date,
                description: self.description,
            },
        )
    }
}

pub fn active_model(id: Uuid, record: Education) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        university_name: Set(record.university_name),
        degree: Set(record.degree),
        major: Set(record.major),
        start_date: Set(record.start_date),
        end_date: Set(record.end_date),
        description: Set(record.description),
    }
}
