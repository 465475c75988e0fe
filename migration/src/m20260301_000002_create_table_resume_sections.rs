use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_column<T: IntoIden>(iden: T) -> ColumnDef {
    ColumnDef::new(iden)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}

fn text_column<T: IntoIden>(iden: T) -> ColumnDef {
    ColumnDef::new(iden)
        .text()
        .not_null()
        .default("")
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Section records are referenced by id from the JSONB lists on `resumes`,
        // so there are no foreign keys here. Deletion cascades from the service.

        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(id_column(Experiences::Id))
                    .col(text_column(Experiences::Title))
                    .col(text_column(Experiences::Company))
                    .col(text_column(Experiences::City))
                    .col(text_column(Experiences::State))
                    .col(text_column(Experiences::StartDate))
                    .col(text_column(Experiences::EndDate))
                    .col(text_column(Experiences::WorkSummary))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(id_column(Educations::Id))
                    .col(text_column(Educations::UniversityName))
                    .col(text_column(Educations::Degree))
                    .col(text_column(Educations::Major))
                    .col(text_column(Educations::StartDate))
                    .col(text_column(Educations::EndDate))
                    .col(text_column(Educations::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(id_column(Skills::Id))
                    .col(text_column(Skills::Name))
                    .col(ColumnDef::new(Skills::Rating).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomSections::Table)
                    .if_not_exists()
                    .col(id_column(CustomSections::Id))
                    .col(ColumnDef::new(CustomSections::Title).text().not_null())
                    .col(ColumnDef::new(CustomSections::Content).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SocialProfiles::Table)
                    .if_not_exists()
                    .col(id_column(SocialProfiles::Id))
                    .col(
                        ColumnDef::new(SocialProfiles::Platform)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocialProfiles::Url).text().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CustomSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    City,
    State,
    StartDate,
    EndDate,
    WorkSummary,
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    UniversityName,
    Degree,
    Major,
    StartDate,
    EndDate,
    Description,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Rating,
}

#[derive(DeriveIden)]
enum CustomSections {
    Table,
    Id,
    Title,
    Content,
}

#[derive(DeriveIden)]
enum SocialProfiles {
    Table,
    Id,
    Platform,
    Url,
}
