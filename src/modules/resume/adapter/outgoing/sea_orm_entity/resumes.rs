use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resumes")]
pub struct Model {
    /// Client-generated, immutable
    #[sea_orm(primary_key, auto_increment = false)]
    pub resume_id: String,

    pub user_id: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub first_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub last_name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub job_title: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub email: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,

    /// Data URL or http(s) URL
    #[sea_orm(column_type = "Text", nullable)]
    pub profile_photo: Option<String>,

    pub photo_position: String,

    pub theme_color: String,

    // Ordered id lists of the section records, stored as JSONB arrays
    #[sea_orm(column_type = "JsonBinary")]
    pub experience: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub education: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub custom_sections: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub social_profiles: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
