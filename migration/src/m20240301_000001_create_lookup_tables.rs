use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    Email,
}

#[derive(DeriveIden)]
pub enum TournamentLevel {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Venue {
    Table,
    Id,
    VenueName,
    Address,
    City,
    Latitude,
    Longitude,
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
    Alias,
    Gender,
    IsTeam,
    AgeMin,
    AgeMax,
    GradeMin,
    GradeMax,
}

const LEVELS: [(i32, &str); 8] = [
    (1, "No level"),
    (2, "Local"),
    (3, "Districtal"),
    (4, "Municipal"),
    (5, "Estate"),
    (6, "Regional"),
    (7, "National"),
    (8, "International"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TournamentLevel::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TournamentLevel::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(TournamentLevel::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(TournamentLevel::Table)
            .columns([TournamentLevel::Id, TournamentLevel::Name]);
        for (id, name) in LEVELS {
            insert.values_panic([id.into(), name.into()]);
        }
        manager.exec_stmt(insert).await?;

        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Venue::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Venue::VenueName).string().not_null())
                    .col(ColumnDef::new(Venue::Address).string().null())
                    .col(ColumnDef::new(Venue::City).string().null())
                    .col(ColumnDef::new(Venue::Latitude).double().null())
                    .col(ColumnDef::new(Venue::Longitude).double().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Category::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Category::Name).string().null())
                    .col(ColumnDef::new(Category::Alias).string().null())
                    .col(ColumnDef::new(Category::Gender).string_len(1).not_null())
                    .col(ColumnDef::new(Category::IsTeam).boolean().not_null().default(false))
                    .col(ColumnDef::new(Category::AgeMin).integer().null())
                    .col(ColumnDef::new(Category::AgeMax).integer().null())
                    .col(ColumnDef::new(Category::GradeMin).integer().null())
                    .col(ColumnDef::new(Category::GradeMax).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Category::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Venue::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TournamentLevel::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}
