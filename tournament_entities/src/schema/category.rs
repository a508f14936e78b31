use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub alias: Option<String>,
    pub gender: String,
    pub is_team: bool,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub grade_min: Option<i32>,
    pub grade_max: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::championship::Entity")]
    Championship,
}

impl Related<super::championship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Championship.def()
    }
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        super::championship::Relation::Tournament.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::championship::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
