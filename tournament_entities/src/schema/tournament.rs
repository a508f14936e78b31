use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tournament")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub date_ini: Date,
    pub date_fin: Date,
    pub register_date_limit: Option<Date>,
    pub sport: String,
    pub promoter: Option<String>,
    pub host_organization: Option<String>,
    pub technical_assistance: Option<String>,
    pub category: Option<String>,
    pub rule_id: i32,
    #[sea_orm(column_name = "type")]
    pub tournament_type: i32,
    pub venue_id: Option<i32>,
    pub level_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::tournament_level::Entity",
        from = "Column::LevelId",
        to = "super::tournament_level::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Level,
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Venue,
    #[sea_orm(has_many = "super::championship::Entity")]
    Championship,
    #[sea_orm(has_many = "super::tournament_audit::Entity")]
    TournamentAudit,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::tournament_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Level.def()
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::championship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Championship.def()
    }
}

impl Related<super::tournament_audit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentAudit.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::championship::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::championship::Relation::Tournament.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
