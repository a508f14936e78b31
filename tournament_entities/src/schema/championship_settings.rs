use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "championship_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub championship_id: i32,
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
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::championship::Entity",
        from = "Column::ChampionshipId",
        to = "super::championship::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Championship,
}

impl Related<super::championship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Championship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
