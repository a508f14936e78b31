use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::schema;

use super::category::Category;
use super::championship_settings::ChampionshipSettings;


/// A category as run inside one tournament. Also the pivot row between
/// tournaments and categories.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Championship {
    pub id: i32,
    pub tournament_id: i32,
    pub category_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

impl Championship {
    pub fn from_model(model: schema::championship::Model) -> Self {
        Championship {
            id: model.id,
            tournament_id: model.tournament_id,
            category_id: model.category_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: i32) -> Result<Vec<Championship>, DbErr> where C: ConnectionTrait {
        let rows = schema::championship::Entity::find()
            .filter(schema::championship::Column::TournamentId.eq(tournament_id))
            .filter(schema::championship::Column::DeletedAt.is_null())
            .order_by_asc(schema::championship::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect())
    }

    pub async fn get_all_in_tournament_with_trashed<C>(db: &C, tournament_id: i32) -> Result<Vec<Championship>, DbErr> where C: ConnectionTrait {
        let rows = schema::championship::Entity::find()
            .filter(schema::championship::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::championship::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect())
    }

    /// Soft delete. Settings, teams, competitors and trees stay in place.
    pub async fn delete<C>(&mut self, db: &C) -> Result<(), DbErr> where C: ConnectionTrait {
        let now = chrono::Utc::now().naive_utc();
        schema::championship::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            deleted_at: ActiveValue::Set(Some(now)),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }.update(db).await?;

        self.deleted_at = Some(now);
        self.updated_at = now;
        debug!(championship_id = self.id, "Soft deleted championship");
        Ok(())
    }

    pub async fn restore<C>(&mut self, db: &C) -> Result<(), DbErr> where C: ConnectionTrait {
        if !self.is_deleted() {
            return Ok(());
        }

        let now = chrono::Utc::now().naive_utc();
        schema::championship::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            deleted_at: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }.update(db).await?;

        self.deleted_at = None;
        self.updated_at = now;
        debug!(championship_id = self.id, "Restored championship");
        Ok(())
    }

    pub async fn load_category<C>(&self, db: &C) -> Result<Option<Category>, DbErr> where C: ConnectionTrait {
        let category = schema::category::Entity::find_by_id(self.category_id).one(db).await?;
        Ok(category.map(Category::from_model))
    }

    pub async fn load_settings<C>(&self, db: &C) -> Result<Vec<ChampionshipSettings>, DbErr> where C: ConnectionTrait {
        ChampionshipSettings::get_all_for_championship(db, self.id).await
    }
}
