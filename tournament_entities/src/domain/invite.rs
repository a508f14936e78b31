use std::str::FromStr;

use rand::{distributions::Alphanumeric, Rng};
use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::schema;


/// The kinds of objects an invite can point at.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
pub enum InvitableKind {
    Tournament,
    Championship,
}

#[derive(Debug, Error)]
pub enum InviteError {
    #[error("Unknown invite object type {0}")]
    UnknownObjectType(String),
    #[error(transparent)]
    DbErr(#[from] DbErr),
}

impl InvitableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitableKind::Tournament => "Tournament",
            InvitableKind::Championship => "Championship",
        }
    }
}

impl FromStr for InvitableKind {
    type Err = InviteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tournament" => Ok(InvitableKind::Tournament),
            "Championship" => Ok(InvitableKind::Championship),
            _ => Err(InviteError::UnknownObjectType(s.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
pub struct InviteTarget {
    pub kind: InvitableKind,
    pub id: i32,
}

impl InviteTarget {
    pub fn tournament(id: i32) -> Self {
        InviteTarget { kind: InvitableKind::Tournament, id }
    }

    pub fn championship(id: i32) -> Self {
        InviteTarget { kind: InvitableKind::Championship, id }
    }

    fn condition(&self) -> sea_orm::Condition {
        sea_orm::Condition::all()
            .add(schema::invite::Column::ObjectType.eq(self.kind.as_str()))
            .add(schema::invite::Column::ObjectId.eq(self.id))
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Invite {
    pub id: i32,
    pub code: String,
    pub email: String,
    pub target: InviteTarget,
    pub expiration: Option<Date>,
    pub active: bool,
    pub used: bool,
}

fn generate_invite_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(20)
        .map(char::from)
        .collect()
}

impl Invite {
    pub fn from_model(model: schema::invite::Model) -> Result<Self, InviteError> {
        Ok(Invite {
            id: model.id,
            code: model.code,
            email: model.email,
            target: InviteTarget {
                kind: model.object_type.parse()?,
                id: model.object_id,
            },
            expiration: model.expiration,
            active: model.active,
            used: model.used,
        })
    }

    pub async fn create<C>(db: &C, target: InviteTarget, email: String, expiration: Option<Date>) -> Result<Invite, InviteError> where C: ConnectionTrait {
        let model = schema::invite::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(generate_invite_code()),
            email: ActiveValue::Set(email),
            object_type: ActiveValue::Set(target.kind.as_str().to_string()),
            object_id: ActiveValue::Set(target.id),
            expiration: ActiveValue::Set(expiration),
            active: ActiveValue::Set(true),
            used: ActiveValue::Set(false),
        }.insert(db).await?;

        Self::from_model(model)
    }

    pub async fn get_all_for_target<C>(db: &C, target: InviteTarget) -> Result<Vec<Invite>, InviteError> where C: ConnectionTrait {
        let rows = schema::invite::Entity::find()
            .filter(target.condition())
            .order_by_asc(schema::invite::Column::Id)
            .all(db).await?;
        rows.into_iter().map(Self::from_model).collect()
    }

    /// Removes the rows outright. Invites have no soft delete.
    pub async fn delete_all_for_target<C>(db: &C, target: InviteTarget) -> Result<u64, DbErr> where C: ConnectionTrait {
        let result = schema::invite::Entity::delete_many()
            .filter(target.condition())
            .exec(db).await?;
        Ok(result.rows_affected)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_object_type_roundtrips_through_string() {
        for kind in [InvitableKind::Tournament, InvitableKind::Championship] {
            assert_eq!(kind.as_str().parse::<InvitableKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_object_type_is_rejected() {
        assert!(matches!("Venue".parse::<InvitableKind>(), Err(InviteError::UnknownObjectType(t)) if t == "Venue"));
    }

    #[test]
    fn test_generated_codes_are_alphanumeric() {
        let code = generate_invite_code();
        assert_eq!(code.len(), 20);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
