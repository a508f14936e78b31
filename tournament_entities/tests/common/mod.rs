#![allow(dead_code)]

use migration::MigratorTrait;
use sea_orm::{prelude::*, ActiveValue, Database, Statement};
use tournament_entities::domain::category::{Category, NewCategory};
use tournament_entities::domain::tournament::{NewTournament, Tournament};
use tournament_entities::mock::{self, MockTournament};
use tournament_entities::schema;

pub async fn set_up_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    let _r = db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON;",
        vec![])
    ).await?;
    Ok(db)
}

pub async fn set_up_mock_db() -> Result<(DatabaseConnection, MockTournament), anyhow::Error> {
    let db = set_up_db().await?;
    let mock = mock::make_mock_tournament(&db).await?;
    Ok((db, mock))
}

pub async fn insert_user(db: &DatabaseConnection, email: &str) -> Result<schema::users::Model, DbErr> {
    schema::users::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set("Organizer".into()),
        email: ActiveValue::Set(email.into()),
    }.insert(db).await
}

pub fn date(y: i32, m: u32, d: u32) -> Date {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn create_tournament(db: &DatabaseConnection, user_id: i32, name: &str) -> Result<Tournament, anyhow::Error> {
    Ok(Tournament::create(db, NewTournament::new(user_id, name, date(2024, 9, 14), date(2024, 9, 15))).await?)
}

/// Creates `n` single male categories, ids `1..=n` on a fresh database.
pub async fn create_categories(db: &DatabaseConnection, n: usize) -> Result<Vec<Category>, DbErr> {
    let mut categories = vec![];
    for _ in 0..n {
        categories.push(Category::create(db, NewCategory { gender: "M".into(), ..Default::default() }).await?);
    }
    Ok(categories)
}
