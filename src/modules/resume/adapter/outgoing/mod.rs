pub mod resume_repository_postgres;
pub mod sea_orm_entity;
pub mod sub_entity_repository_postgres;

pub use resume_repository_postgres::ResumeRepositoryPostgres;
pub use sub_entity_repository_postgres::SubEntityRepositoryPostgres;
