use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_lookup_tables::{Category, TournamentLevel, Users, Venue};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub enum Tournament {
    Table,
    Id,
    UserId,
    Slug,
    Name,
    DateIni,
    DateFin,
    RegisterDateLimit,
    Sport,
    Promoter,
    HostOrganization,
    TechnicalAssistance,
    Category,
    RuleId,
    Type,
    VenueId,
    LevelId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum Championship {
    Table,
    Id,
    TournamentId,
    CategoryId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum ChampionshipSettings {
    Table,
    Id,
    ChampionshipId,
    Alias,
    TreeType,
    FightingAreas,
    LimitByEntity,
    HasPreliminary,
    PreliminaryGroupSize,
    PreliminaryWinner,
    FightDuration,
    HasEncho,
    EnchoQty,
    EnchoDuration,
    HasHantei,
    Cost,
    TeamSize,
    TeamReserve,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
    ChampionshipId,
    Name,
}

#[derive(DeriveIden)]
enum Competitor {
    Table,
    Id,
    ChampionshipId,
    UserId,
    ShortId,
    Confirmed,
}

#[derive(DeriveIden)]
enum Tree {
    Table,
    Id,
    ChampionshipId,
    Area,
    Round,
    Position,
}

fn championship_child_fk(name: &str, table: impl Iden + 'static, column: impl Iden + 'static) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from_tbl(table)
        .from_col(column)
        .to_tbl(Championship::Table)
        .to_col(Championship::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tournament::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Tournament::UserId).integer().not_null())
                    .col(ColumnDef::new(Tournament::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Tournament::Name).string().not_null())
                    .col(ColumnDef::new(Tournament::DateIni).date().not_null())
                    .col(ColumnDef::new(Tournament::DateFin).date().not_null())
                    .col(ColumnDef::new(Tournament::RegisterDateLimit).date().null())
                    .col(ColumnDef::new(Tournament::Sport).string().not_null().default("Kendo"))
                    .col(ColumnDef::new(Tournament::Promoter).string().null())
                    .col(ColumnDef::new(Tournament::HostOrganization).string().null())
                    .col(ColumnDef::new(Tournament::TechnicalAssistance).string().null())
                    .col(ColumnDef::new(Tournament::Category).string().null())
                    .col(ColumnDef::new(Tournament::RuleId).integer().not_null().default(0))
                    .col(ColumnDef::new(Tournament::Type).integer().not_null().default(1).check(Expr::col(Tournament::Type).is_in([0, 1])))
                    .col(ColumnDef::new(Tournament::VenueId).integer().null())
                    .col(ColumnDef::new(Tournament::LevelId).integer().not_null().default(1))
                    .col(ColumnDef::new(Tournament::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Tournament::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Tournament::DeletedAt).timestamp().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tournament-user")
                            .from(Tournament::Table, Tournament::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tournament-level")
                            .from(Tournament::Table, Tournament::LevelId)
                            .to(TournamentLevel::Table, TournamentLevel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tournament-venue")
                            .from(Tournament::Table, Tournament::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Championship::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Championship::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Championship::TournamentId).integer().not_null())
                    .col(ColumnDef::new(Championship::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Championship::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Championship::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Championship::DeletedAt).timestamp().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-championship-tournament")
                            .from(Championship::Table, Championship::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-championship-category")
                            .from(Championship::Table, Championship::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-championship-tournament-category")
                    .table(Championship::Table)
                    .col(Championship::TournamentId)
                    .col(Championship::CategoryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChampionshipSettings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ChampionshipSettings::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(ChampionshipSettings::ChampionshipId).integer().not_null())
                    .col(ColumnDef::new(ChampionshipSettings::Alias).string().null())
                    .col(ColumnDef::new(ChampionshipSettings::TreeType).integer().not_null().default(1))
                    .col(ColumnDef::new(ChampionshipSettings::FightingAreas).integer().not_null().default(1))
                    .col(ColumnDef::new(ChampionshipSettings::LimitByEntity).integer().null())
                    .col(ColumnDef::new(ChampionshipSettings::HasPreliminary).boolean().not_null().default(true))
                    .col(ColumnDef::new(ChampionshipSettings::PreliminaryGroupSize).integer().not_null().default(3))
                    .col(ColumnDef::new(ChampionshipSettings::PreliminaryWinner).integer().not_null().default(1))
                    .col(ColumnDef::new(ChampionshipSettings::FightDuration).string().null())
                    .col(ColumnDef::new(ChampionshipSettings::HasEncho).boolean().not_null().default(true))
                    .col(ColumnDef::new(ChampionshipSettings::EnchoQty).integer().not_null().default(0))
                    .col(ColumnDef::new(ChampionshipSettings::EnchoDuration).string().null())
                    .col(ColumnDef::new(ChampionshipSettings::HasHantei).boolean().not_null().default(false))
                    .col(ColumnDef::new(ChampionshipSettings::Cost).integer().null())
                    .col(ColumnDef::new(ChampionshipSettings::TeamSize).integer().null())
                    .col(ColumnDef::new(ChampionshipSettings::TeamReserve).integer().null())
                    .col(ColumnDef::new(ChampionshipSettings::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(ChampionshipSettings::UpdatedAt).timestamp().not_null())
                    .foreign_key(&mut championship_child_fk(
                        "fk-championship_settings-championship",
                        ChampionshipSettings::Table,
                        ChampionshipSettings::ChampionshipId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Team::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Team::ChampionshipId).integer().not_null())
                    .col(ColumnDef::new(Team::Name).string().not_null())
                    .foreign_key(&mut championship_child_fk("fk-team-championship", Team::Table, Team::ChampionshipId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Competitor::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Competitor::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Competitor::ChampionshipId).integer().not_null())
                    .col(ColumnDef::new(Competitor::UserId).integer().not_null())
                    .col(ColumnDef::new(Competitor::ShortId).integer().null())
                    .col(ColumnDef::new(Competitor::Confirmed).boolean().not_null().default(false))
                    .foreign_key(&mut championship_child_fk(
                        "fk-competitor-championship",
                        Competitor::Table,
                        Competitor::ChampionshipId,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-competitor-user")
                            .from(Competitor::Table, Competitor::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tree::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tree::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Tree::ChampionshipId).integer().not_null())
                    .col(ColumnDef::new(Tree::Area).integer().not_null())
                    .col(ColumnDef::new(Tree::Round).integer().not_null())
                    .col(ColumnDef::new(Tree::Position).integer().not_null())
                    .foreign_key(&mut championship_child_fk("fk-tree-championship", Tree::Table, Tree::ChampionshipId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-championship_settings-championship_id")
                    .table(ChampionshipSettings::Table)
                    .col(ChampionshipSettings::ChampionshipId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(Index::create().name("idx-team-championship_id").table(Team::Table).col(Team::ChampionshipId).to_owned())
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-competitor-championship_id")
                    .table(Competitor::Table)
                    .col(Competitor::ChampionshipId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(Index::create().name("idx-tree-championship_id").table(Tree::Table).col(Tree::ChampionshipId).to_owned())
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tree::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Competitor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Team::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ChampionshipSettings::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Championship::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Tournament::Table).to_owned()).await
    }
}
