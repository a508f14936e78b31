use sea_orm_migration::prelude::*;

use crate::m20240301_000002_add_tournament::Tournament;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum TournamentAudit {
    Table,
    Id,
    TournamentId,
    SequenceIdx,
    Event,
    Snapshot,
    Timestamp,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentAudit::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TournamentAudit::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(TournamentAudit::TournamentId).integer().not_null())
                    .col(ColumnDef::new(TournamentAudit::SequenceIdx).integer().not_null())
                    .col(ColumnDef::new(TournamentAudit::Event).string().not_null())
                    .col(ColumnDef::new(TournamentAudit::Snapshot).text().not_null())
                    .col(ColumnDef::new(TournamentAudit::Timestamp).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tournament_audit-tournament")
                            .from(TournamentAudit::Table, TournamentAudit::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tournament_audit-tournament-sequence")
                    .table(TournamentAudit::Table)
                    .col(TournamentAudit::TournamentId)
                    .col(TournamentAudit::SequenceIdx)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TournamentAudit::Table).to_owned()).await
    }
}
