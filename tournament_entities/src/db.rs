use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};

use crate::config::Config;


/// Connects to `Config::db_url`.
///
/// The cascades in the schema need sqlite foreign key enforcement. sqlx
/// already turns it on for every connection it opens into the pool, the
/// PRAGMA below only repeats that on the one connection that runs it.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.db_url.as_str()).await?;

    if db.get_database_backend() == DbBackend::Sqlite {
        db.execute(Statement::from_string(
            DbBackend::Sqlite,
            "PRAGMA foreign_keys = ON;",
        )).await?;
    }
    tracing::debug!(backend = ?db.get_database_backend(), "Connected to database");

    Ok(db)
}
