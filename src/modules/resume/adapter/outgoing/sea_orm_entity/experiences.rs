use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::{Experience, Stored};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub company: String,

    #[sea_orm(column_type = "Text")]
    pub city: String,

    #[sea_orm(column_type = "Text")]
    pub state: String,

    #[sea_orm(column_type = "Text")]
    pub start_date: String,

    #[sea_orm(column_type = "Text")]
    pub end_date: String,

    #[sea_orm(column_type = "Text")]
    pub work_summary: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_stored(self) -> Stored<Experience> {
        Stored::new(
            self.id,
            Experience {
                title: self.title,
                company: self.company,
                city: self.city,
                state: self.state,
                start_date: self.start_date,
                end_date: self.end_date,
                work_summary: self.work_summary,
            },
        )
    }
}

pub fn active_model(id: Uuid, record: Experience) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        title: Set(record.title),
        company: Set(record.company),
        city: Set(record.city),
        state: Set(record.state),
        start_date: Set(record.start_date),
        end_date: Set(record.end_date),
        work_summary: Set(record.work_summary),
    }
}
