use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Polymorphic: `object_type` names the invitable kind, `object_id` its row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub email: String,
    pub object_type: String,
    pub object_id: i32,
    pub expiration: Option<Date>,
    pub active: bool,
    pub used: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
