use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::schema;


/// Rule parameters of a championship, as they appear in rule presets.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ChampionshipSettingsAttributes {
    pub alias: Option<String>,
    pub tree_type: i32,
    pub fighting_areas: i32,
    pub limit_by_entity: Option<i32>,
    pub has_preliminary: bool,
    pub preliminary_group_size: i32,
    pub preliminary_winner: i32,
    pub fight_duration: Option<String>,
    pub has_encho: bool,
    pub encho_qty: i32,
    pub encho_duration: Option<String>,
    pub has_hantei: bool,
    pub cost: Option<i32>,
    pub team_size: Option<i32>,
    pub team_reserve: Option<i32>,
}

impl Default for ChampionshipSettingsAttributes {
    fn default() -> Self {
        ChampionshipSettingsAttributes {
            alias: None,
            tree_type: 1,
            fighting_areas: 1,
            limit_by_entity: None,
            has_preliminary: true,
            preliminary_group_size: 3,
            preliminary_winner: 1,
            fight_duration: None,
            has_encho: true,
            encho_qty: 0,
            encho_duration: None,
            has_hantei: false,
            cost: None,
            team_size: None,
            team_reserve: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct ChampionshipSettings {
    pub id: i32,
    pub championship_id: i32,
    #[serde(flatten)]
    pub attributes: ChampionshipSettingsAttributes,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ChampionshipSettings {
    pub fn from_model(model: schema::championship_settings::Model) -> Self {
        ChampionshipSettings {
            id: model.id,
            championship_id: model.championship_id,
            attributes: ChampionshipSettingsAttributes {
                alias: model.alias,
                tree_type: model.tree_type,
                fighting_areas: model.fighting_areas,
                limit_by_entity: model.limit_by_entity,
                has_preliminary: model.has_preliminary,
                preliminary_group_size: model.preliminary_group_size,
                preliminary_winner: model.preliminary_winner,
                fight_duration: model.fight_duration,
                has_encho: model.has_encho,
                encho_qty: model.encho_qty,
                encho_duration: model.encho_duration,
                has_hantei: model.has_hantei,
                cost: model.cost,
                team_size: model.team_size,
                team_reserve: model.team_reserve,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    /// Inserts a new settings row. Existing rows of the championship are left alone.
    pub async fn create<C>(db: &C, championship_id: i32, attributes: ChampionshipSettingsAttributes) -> Result<ChampionshipSettings, DbErr> where C: ConnectionTrait {
        let now = chrono::Utc::now().naive_utc();
        let model = schema::championship_settings::ActiveModel {
            id: ActiveValue::NotSet,
            championship_id: ActiveValue::Set(championship_id),
            alias: ActiveValue::Set(attributes.alias),
            tree_type: ActiveValue::Set(attributes.tree_type),
            fighting_areas: ActiveValue::Set(attributes.fighting_areas),
            limit_by_entity: ActiveValue::Set(attributes.limit_by_entity),
            has_preliminary: ActiveValue::Set(attributes.has_preliminary),
            preliminary_group_size: ActiveValue::Set(attributes.preliminary_group_size),
            preliminary_winner: ActiveValue::Set(attributes.preliminary_winner),
            fight_duration: ActiveValue::Set(attributes.fight_duration),
            has_encho: ActiveValue::Set(attributes.has_encho),
            encho_qty: ActiveValue::Set(attributes.encho_qty),
            encho_duration: ActiveValue::Set(attributes.encho_duration),
            has_hantei: ActiveValue::Set(attributes.has_hantei),
            cost: ActiveValue::Set(attributes.cost),
            team_size: ActiveValue::Set(attributes.team_size),
            team_reserve: ActiveValue::Set(attributes.team_reserve),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }.insert(db).await?;

        Ok(Self::from_model(model))
    }

    pub async fn get_all_for_championship<C>(db: &C, championship_id: i32) -> Result<Vec<ChampionshipSettings>, DbErr> where C: ConnectionTrait {
        let rows = schema::championship_settings::Entity::find()
            .filter(schema::championship_settings::Column::ChampionshipId.eq(championship_id))
            .order_by_asc(schema::championship_settings::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect())
    }
}
