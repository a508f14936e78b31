use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Invite {
    Table,
    Id,
    Code,
    Email,
    ObjectType,
    ObjectId,
    Expiration,
    Active,
    Used,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Invites point at several kinds of objects, so object_id has no foreign key
        manager
            .create_table(
                Table::create()
                    .table(Invite::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Invite::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Invite::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Invite::Email).string().not_null())
                    .col(ColumnDef::new(Invite::ObjectType).string().not_null())
                    .col(ColumnDef::new(Invite::ObjectId).integer().not_null())
                    .col(ColumnDef::new(Invite::Expiration).date().null())
                    .col(ColumnDef::new(Invite::Active).boolean().not_null().default(true))
                    .col(ColumnDef::new(Invite::Used).boolean().not_null().default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-invite-object")
                    .table(Invite::Table)
                    .col(Invite::ObjectType)
                    .col(Invite::ObjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Invite::Table).to_owned()).await
    }
}
