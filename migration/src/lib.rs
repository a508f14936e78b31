use sea_orm_migration::prelude::*;
pub use sea_orm_migration::prelude::{MigrationTrait, MigratorTrait};

mod m20240301_000001_create_lookup_tables;
mod m20240301_000002_add_tournament;
mod m20240315_000003_add_invites;
mod m20240402_000004_add_tournament_audit;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_lookup_tables::Migration),
            Box::new(m20240301_000002_add_tournament::Migration),
            Box::new(m20240315_000003_add_invites::Migration),
            Box::new(m20240402_000004_add_tournament_audit::Migration),
        ]
    }
}
