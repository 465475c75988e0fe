use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create resumes table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Resumes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resumes::ResumeId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resumes::UserId).string_len(128).not_null())
                    .col(ColumnDef::new(Resumes::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Resumes::FirstName).text())
                    .col(ColumnDef::new(Resumes::LastName).text())
                    .col(ColumnDef::new(Resumes::JobTitle).text())
                    .col(ColumnDef::new(Resumes::Address).text())
                    .col(ColumnDef::new(Resumes::Phone).text())
                    .col(ColumnDef::new(Resumes::Email).text())
                    .col(ColumnDef::new(Resumes::Summary).text())
                    // Data URL, already compressed by the client
                    .col(ColumnDef::new(Resumes::ProfilePhoto).text())
                    .col(
                        ColumnDef::new(Resumes::PhotoPosition)
                            .string_len(10)
                            .not_null()
                            .default("right"),
                    )
                    .col(
                        ColumnDef::new(Resumes::ThemeColor)
                            .string_len(32)
                            .not_null()
                            .default("#ff6666"),
                    )
                    .col(
                        ColumnDef::new(Resumes::Experience)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Resumes::Education)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Resumes::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Resumes::CustomSections)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Resumes::SocialProfiles)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Resumes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Resumes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Ownership checks match on (resume_id, user_id); the primary key covers resume_id.
        // Listing a user's resumes is ordered newest first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_resumes_user_id_updated_at
                ON resumes (user_id, updated_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_resumes_user_id_updated_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Resumes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resumes {
    Table,
    ResumeId,
    UserId,
    Title,
    FirstName,
    LastName,
    JobTitle,
    Address,
    Phone,
    Email,
    Summary,
    ProfilePhoto,
    PhotoPosition,
    ThemeColor,
    Experience,
    Education,
    Skills,
    CustomSections,
    SocialProfiles,
    CreatedAt,
    UpdatedAt,
}
