use std::str::FromStr;

use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::domain::tournament::{Tournament, TournamentError};
use crate::schema;


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum AuditEvent {
    Created,
    Updated,
    SlugRegenerated,
    Deleted,
    Restored,
    CategoriesConfigured,
}

impl AuditEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEvent::Created => "Created",
            AuditEvent::Updated => "Updated",
            AuditEvent::SlugRegenerated => "SlugRegenerated",
            AuditEvent::Deleted => "Deleted",
            AuditEvent::Restored => "Restored",
            AuditEvent::CategoriesConfigured => "CategoriesConfigured",
        }
    }
}

impl FromStr for AuditEvent {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(AuditEvent::Created),
            "Updated" => Ok(AuditEvent::Updated),
            "SlugRegenerated" => Ok(AuditEvent::SlugRegenerated),
            "Deleted" => Ok(AuditEvent::Deleted),
            "Restored" => Ok(AuditEvent::Restored),
            "CategoriesConfigured" => Ok(AuditEvent::CategoriesConfigured),
            _ => Err(TournamentError::UnknownAuditEvent(s.to_string())),
        }
    }
}

/// One recorded mutation, with the state of the tournament right after it.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AuditEntry {
    pub sequence_idx: i32,
    pub event: AuditEvent,
    pub snapshot: Tournament,
    pub timestamp: DateTime,
}

pub async fn record<C>(db: &C, tournament: &Tournament, event: AuditEvent) -> Result<(), TournamentError> where C: ConnectionTrait {
    let last_entry = schema::tournament_audit::Entity::find()
        .filter(schema::tournament_audit::Column::TournamentId.eq(tournament.id))
        .order_by_desc(schema::tournament_audit::Column::SequenceIdx)
        .one(db).await?;
    let sequence_idx = last_entry.map(|e| e.sequence_idx + 1).unwrap_or(0);

    schema::tournament_audit::ActiveModel {
        id: ActiveValue::NotSet,
        tournament_id: ActiveValue::Set(tournament.id),
        sequence_idx: ActiveValue::Set(sequence_idx),
        event: ActiveValue::Set(event.as_str().to_string()),
        snapshot: ActiveValue::Set(serde_json::to_string(tournament)?),
        timestamp: ActiveValue::Set(chrono::Utc::now().naive_utc()),
    }.insert(db).await?;

    Ok(())
}

pub async fn get_audit_log<C>(db: &C, tournament_id: i32) -> Result<Vec<AuditEntry>, TournamentError> where C: ConnectionTrait {
    let rows = schema::tournament_audit::Entity::find()
        .filter(schema::tournament_audit::Column::TournamentId.eq(tournament_id))
        .order_by_asc(schema::tournament_audit::Column::SequenceIdx)
        .all(db).await?;

    rows.into_iter().map(|row| -> Result<AuditEntry, TournamentError> {
        Ok(AuditEntry {
            sequence_idx: row.sequence_idx,
            event: row.event.parse()?,
            snapshot: serde_json::from_str(&row.snapshot)?,
            timestamp: row.timestamp,
        })
    }).collect()
}
