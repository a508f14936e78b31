use std::collections::{BTreeMap, BTreeSet};

use sea_orm::{prelude::*, ActiveValue, PaginatorTrait, QueryOrder};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::audit::{self, AuditEvent};
use crate::rules::{RuleOptions, RuleOptionsProvider, RulePreset};
use crate::schema;
use crate::slug::unique_slug;

use super::category::Category;
use super::championship::Championship;
use super::championship_settings::ChampionshipSettings;
use super::invite::{Invite, InviteError, InviteTarget};


#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("SeaORM Error: {0}")]
    Db(#[from] DbErr),
    #[error("Tournament {0} not found")]
    NotFound(i32),
    #[error("Rule preset has no settings for category {category_id} of championship {championship_id}")]
    MissingPresetEntry { championship_id: i32, category_id: i32 },
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unknown audit event {0}")]
    UnknownAuditEvent(String),
    #[error(transparent)]
    Invite(#[from] InviteError),
    #[error("Invalid tournament type {0}")]
    InvalidTournamentType(i32),
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum TournamentType {
    InvitationOnly,
    Open,
}

impl TournamentType {
    pub fn from_code(code: i32) -> Option<TournamentType> {
        match code {
            0 => Some(TournamentType::InvitationOnly),
            1 => Some(TournamentType::Open),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            TournamentType::InvitationOnly => 0,
            TournamentType::Open => 1,
        }
    }
}

/// Reach of a tournament, stored as `level_id`.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, PartialOrd, Ord)]
pub enum LevelKind {
    NoLevel,
    Local,
    Districtal,
    Municipal,
    Estate,
    Regional,
    National,
    International,
}

impl LevelKind {
    pub fn from_code(code: i32) -> Option<LevelKind> {
        match code {
            1 => Some(LevelKind::NoLevel),
            2 => Some(LevelKind::Local),
            3 => Some(LevelKind::Districtal),
            4 => Some(LevelKind::Municipal),
            5 => Some(LevelKind::Estate),
            6 => Some(LevelKind::Regional),
            7 => Some(LevelKind::National),
            8 => Some(LevelKind::International),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            LevelKind::NoLevel => 1,
            LevelKind::Local => 2,
            LevelKind::Districtal => 3,
            LevelKind::Municipal => 4,
            LevelKind::Estate => 5,
            LevelKind::Regional => 6,
            LevelKind::National => 7,
            LevelKind::International => 8,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Tournament {
    pub id: i32,
    pub user_id: i32,
    pub slug: String,
    pub name: String,
    pub date_ini: Date,
    pub date_fin: Date,
    pub register_date_limit: Option<Date>,
    pub sport: String,
    pub promoter: Option<String>,
    pub host_organization: Option<String>,
    pub technical_assistance: Option<String>,
    /// Legacy free text column, not read anywhere.
    pub category: Option<String>,
    pub rule_id: i32,
    #[serde(rename = "type")]
    pub tournament_type: i32,
    pub venue_id: Option<i32>,
    pub level_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct NewTournament {
    pub user_id: i32,
    pub name: String,
    pub date_ini: Date,
    pub date_fin: Date,
    pub register_date_limit: Option<Date>,
    pub sport: String,
    pub promoter: Option<String>,
    pub host_organization: Option<String>,
    pub technical_assistance: Option<String>,
    pub rule_id: i32,
    #[serde(rename = "type")]
    pub tournament_type: i32,
    pub venue_id: Option<i32>,
    pub level_id: i32,
}

impl NewTournament {
    pub fn new(user_id: i32, name: impl Into<String>, date_ini: Date, date_fin: Date) -> Self {
        NewTournament {
            user_id,
            name: name.into(),
            date_ini,
            date_fin,
            register_date_limit: None,
            sport: "Kendo".into(),
            promoter: None,
            host_organization: None,
            technical_assistance: None,
            rule_id: 0,
            tournament_type: TournamentType::Open.code(),
            venue_id: None,
            level_id: LevelKind::NoLevel.code(),
        }
    }
}

/// The championship row that links a category to a tournament.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct ChampionshipPivot {
    pub championship_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct AttachedCategory {
    pub category: Category,
    pub pivot: ChampionshipPivot,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct CategorySync {
    pub attached: Vec<i32>,
    pub detached: Vec<i32>,
}

/// Ids of already loaded categories, in load order.
pub fn get_category_list(categories: &[AttachedCategory]) -> Vec<i32> {
    categories.iter().map(|c| c.category.id).collect()
}

fn check_tournament_type(code: i32) -> Result<(), TournamentError> {
    match TournamentType::from_code(code) {
        Some(_) => Ok(()),
        None => Err(TournamentError::InvalidTournamentType(code)),
    }
}

fn new_pivot_row(tournament_id: i32, category_id: i32, now: DateTime) -> schema::championship::ActiveModel {
    schema::championship::ActiveModel {
        id: ActiveValue::NotSet,
        tournament_id: ActiveValue::Set(tournament_id),
        category_id: ActiveValue::Set(category_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
}

impl Tournament {
    pub fn from_model(model: schema::tournament::Model) -> Self {
        Tournament {
            id: model.id,
            user_id: model.user_id,
            slug: model.slug,
            name: model.name,
            date_ini: model.date_ini,
            date_fin: model.date_fin,
            register_date_limit: model.register_date_limit,
            sport: model.sport,
            promoter: model.promoter,
            host_organization: model.host_organization,
            technical_assistance: model.technical_assistance,
            category: model.category,
            rule_id: model.rule_id,
            tournament_type: model.tournament_type,
            venue_id: model.venue_id,
            level_id: model.level_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }

    pub fn is_open(&self) -> bool {
        self.tournament_type == 1
    }

    pub fn needs_invitation(&self) -> bool {
        self.tournament_type == 0
    }

    pub fn is_international(&self) -> bool {
        self.level_id == 8
    }

    pub fn is_national(&self) -> bool {
        self.level_id == 7
    }

    pub fn is_regional(&self) -> bool {
        self.level_id == 6
    }

    pub fn is_estate(&self) -> bool {
        self.level_id == 5
    }

    pub fn is_municipal(&self) -> bool {
        self.level_id == 4
    }

    pub fn is_districtal(&self) -> bool {
        self.level_id == 3
    }

    pub fn is_local(&self) -> bool {
        self.level_id == 2
    }

    pub fn has_no_level(&self) -> bool {
        self.level_id == 1
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn level_kind(&self) -> Option<LevelKind> {
        LevelKind::from_code(self.level_id)
    }

    pub fn tournament_type(&self) -> Option<TournamentType> {
        TournamentType::from_code(self.tournament_type)
    }

    pub fn invite_target(&self) -> InviteTarget {
        InviteTarget::tournament(self.id)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> Result<Option<Tournament>, DbErr> where C: ConnectionTrait {
        let model = schema::tournament::Entity::find_by_id(id)
            .filter(schema::tournament::Column::DeletedAt.is_null())
            .one(db).await?;
        Ok(model.map(Self::from_model))
    }

    pub async fn find_by_id_with_trashed<C>(db: &C, id: i32) -> Result<Option<Tournament>, DbErr> where C: ConnectionTrait {
        let model = schema::tournament::Entity::find_by_id(id).one(db).await?;
        Ok(model.map(Self::from_model))
    }

    /// Route lookup. Trashed tournaments are not found.
    pub async fn find_by_slug<C>(db: &C, slug: &str) -> Result<Option<Tournament>, DbErr> where C: ConnectionTrait {
        let model = schema::tournament::Entity::find()
            .filter(schema::tournament::Column::Slug.eq(slug))
            .filter(schema::tournament::Column::DeletedAt.is_null())
            .one(db).await?;
        Ok(model.map(Self::from_model))
    }

    pub async fn get_all<C>(db: &C) -> Result<Vec<Tournament>, DbErr> where C: ConnectionTrait {
        let rows = schema::tournament::Entity::find()
            .filter(schema::tournament::Column::DeletedAt.is_null())
            .order_by_asc(schema::tournament::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect())
    }

    pub async fn get_all_with_trashed<C>(db: &C) -> Result<Vec<Tournament>, DbErr> where C: ConnectionTrait {
        let rows = schema::tournament::Entity::find()
            .order_by_asc(schema::tournament::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect())
    }

    pub async fn get_only_trashed<C>(db: &C) -> Result<Vec<Tournament>, DbErr> where C: ConnectionTrait {
        let rows = schema::tournament::Entity::find()
            .filter(schema::tournament::Column::DeletedAt.is_not_null())
            .order_by_asc(schema::tournament::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect())
    }

    pub async fn create<C>(db: &C, tournament: NewTournament) -> Result<Tournament, TournamentError> where C: ConnectionTrait {
        check_tournament_type(tournament.tournament_type)?;
        let slug = unique_slug(db, &tournament.name, None).await?;
        let now = chrono::Utc::now().naive_utc();

        let model = schema::tournament::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(tournament.user_id),
            slug: ActiveValue::Set(slug),
            name: ActiveValue::Set(tournament.name),
            date_ini: ActiveValue::Set(tournament.date_ini),
            date_fin: ActiveValue::Set(tournament.date_fin),
            register_date_limit: ActiveValue::Set(tournament.register_date_limit),
            sport: ActiveValue::Set(tournament.sport),
            promoter: ActiveValue::Set(tournament.promoter),
            host_organization: ActiveValue::Set(tournament.host_organization),
            technical_assistance: ActiveValue::Set(tournament.technical_assistance),
            category: ActiveValue::Set(None),
            rule_id: ActiveValue::Set(tournament.rule_id),
            tournament_type: ActiveValue::Set(tournament.tournament_type),
            venue_id: ActiveValue::Set(tournament.venue_id),
            level_id: ActiveValue::Set(tournament.level_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }.insert(db).await?;

        let tournament = Self::from_model(model);
        audit::record(db, &tournament, AuditEvent::Created).await?;
        tracing::info!(tournament_id = tournament.id, slug = %tournament.slug, "Created tournament");

        Ok(tournament)
    }

    /// Writes the mutable attributes back. The slug is left as it is,
    /// use `regenerate_slug` after a rename to change it.
    pub async fn save<C>(&mut self, db: &C) -> Result<(), TournamentError> where C: ConnectionTrait {
        check_tournament_type(self.tournament_type)?;
        let now = chrono::Utc::now().naive_utc();

        schema::tournament::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name.clone()),
            date_ini: ActiveValue::Set(self.date_ini),
            date_fin: ActiveValue::Set(self.date_fin),
            register_date_limit: ActiveValue::Set(self.register_date_limit),
            sport: ActiveValue::Set(self.sport.clone()),
            promoter: ActiveValue::Set(self.promoter.clone()),
            host_organization: ActiveValue::Set(self.host_organization.clone()),
            technical_assistance: ActiveValue::Set(self.technical_assistance.clone()),
            category: ActiveValue::Set(self.category.clone()),
            rule_id: ActiveValue::Set(self.rule_id),
            tournament_type: ActiveValue::Set(self.tournament_type),
            venue_id: ActiveValue::Set(self.venue_id),
            level_id: ActiveValue::Set(self.level_id),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }.update(db).await?;

        self.updated_at = now;
        audit::record(db, self, AuditEvent::Updated).await?;

        Ok(())
    }

    pub async fn regenerate_slug<C>(&mut self, db: &C) -> Result<(), TournamentError> where C: ConnectionTrait {
        let slug = unique_slug(db, &self.name, Some(self.id)).await?;
        let now = chrono::Utc::now().naive_utc();

        schema::tournament::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            slug: ActiveValue::Set(slug.clone()),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }.update(db).await?;

        tracing::debug!(tournament_id = self.id, old = %self.slug, new = %slug, "Regenerated slug");
        self.slug = slug;
        self.updated_at = now;
        audit::record(db, self, AuditEvent::SlugRegenerated).await?;

        Ok(())
    }

    /// Soft deletes the tournament.
    ///
    /// Its championships are soft deleted with it, its invites are removed
    /// for good. Nothing is wrapped in a transaction here, pass one in if
    /// the cascade has to be atomic.
    pub async fn delete<C>(&mut self, db: &C) -> Result<(), TournamentError> where C: ConnectionTrait {
        if self.is_deleted() {
            return Ok(());
        }

        let mut championships = Championship::get_all_in_tournament(db, self.id).await?;
        for championship in championships.iter_mut() {
            championship.delete(db).await?;
        }

        let removed_invites = Invite::delete_all_for_target(db, self.invite_target()).await?;

        let now = chrono::Utc::now().naive_utc();
        schema::tournament::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            deleted_at: ActiveValue::Set(Some(now)),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }.update(db).await?;

        self.deleted_at = Some(now);
        self.updated_at = now;
        audit::record(db, self, AuditEvent::Deleted).await?;
        tracing::info!(
            tournament_id = self.id,
            championships = championships.len(),
            invites = removed_invites,
            "Deleted tournament"
        );

        Ok(())
    }

    /// Restores the tournament and every one of its championships, also
    /// those that had been trashed on their own before.
    pub async fn restore<C>(&mut self, db: &C) -> Result<(), TournamentError> where C: ConnectionTrait {
        let mut championships = Championship::get_all_in_tournament_with_trashed(db, self.id).await?;
        for championship in championships.iter_mut() {
            championship.restore(db).await?;
        }

        let now = chrono::Utc::now().naive_utc();
        schema::tournament::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            deleted_at: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }.update(db).await?;

        self.deleted_at = None;
        self.updated_at = now;
        audit::record(db, self, AuditEvent::Restored).await?;
        tracing::info!(tournament_id = self.id, championships = championships.len(), "Restored tournament");

        Ok(())
    }

    pub async fn load_owner<C>(&self, db: &C) -> Result<Option<schema::users::Model>, DbErr> where C: ConnectionTrait {
        schema::users::Entity::find_by_id(self.user_id).one(db).await
    }

    pub async fn load_level<C>(&self, db: &C) -> Result<Option<schema::tournament_level::Model>, DbErr> where C: ConnectionTrait {
        schema::tournament_level::Entity::find_by_id(self.level_id).one(db).await
    }

    pub async fn load_venue<C>(&self, db: &C) -> Result<Option<schema::venue::Model>, DbErr> where C: ConnectionTrait {
        match self.venue_id {
            Some(venue_id) => schema::venue::Entity::find_by_id(venue_id).one(db).await,
            None => Ok(None),
        }
    }

    /// Categories through the championship pivot, in pivot order.
    /// Trashed championships still count as attached.
    pub async fn load_categories<C>(&self, db: &C) -> Result<Vec<AttachedCategory>, DbErr> where C: ConnectionTrait {
        let rows = schema::championship::Entity::find()
            .filter(schema::championship::Column::TournamentId.eq(self.id))
            .find_also_related(schema::category::Entity)
            .order_by_asc(schema::championship::Column::Id)
            .all(db).await?;

        Ok(rows.into_iter().filter_map(|(championship, category)| {
            category.map(|category| AttachedCategory {
                category: Category::from_model(category),
                pivot: ChampionshipPivot {
                    championship_id: championship.id,
                    created_at: championship.created_at,
                    updated_at: championship.updated_at,
                },
            })
        }).collect())
    }

    pub async fn load_championships<C>(&self, db: &C) -> Result<Vec<Championship>, DbErr> where C: ConnectionTrait {
        Championship::get_all_in_tournament(db, self.id).await
    }

    pub async fn load_championships_with_trashed<C>(&self, db: &C) -> Result<Vec<Championship>, DbErr> where C: ConnectionTrait {
        Championship::get_all_in_tournament_with_trashed(db, self.id).await
    }

    pub async fn load_championship_settings<C>(&self, db: &C) -> Result<Vec<ChampionshipSettings>, DbErr> where C: ConnectionTrait {
        let rows = schema::championship_settings::Entity::find()
            .inner_join(schema::championship::Entity)
            .filter(schema::championship::Column::TournamentId.eq(self.id))
            .filter(schema::championship::Column::DeletedAt.is_null())
            .order_by_asc(schema::championship_settings::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(ChampionshipSettings::from_model).collect())
    }

    pub async fn load_teams<C>(&self, db: &C) -> Result<Vec<schema::team::Model>, DbErr> where C: ConnectionTrait {
        schema::team::Entity::find()
            .inner_join(schema::championship::Entity)
            .filter(schema::championship::Column::TournamentId.eq(self.id))
            .filter(schema::championship::Column::DeletedAt.is_null())
            .order_by_asc(schema::team::Column::Id)
            .all(db).await
    }

    pub async fn load_competitors<C>(&self, db: &C) -> Result<Vec<schema::competitor::Model>, DbErr> where C: ConnectionTrait {
        schema::competitor::Entity::find()
            .inner_join(schema::championship::Entity)
            .filter(schema::championship::Column::TournamentId.eq(self.id))
            .filter(schema::championship::Column::DeletedAt.is_null())
            .order_by_asc(schema::competitor::Column::Id)
            .all(db).await
    }

    pub async fn load_trees<C>(&self, db: &C) -> Result<Vec<schema::tree::Model>, DbErr> where C: ConnectionTrait {
        schema::tree::Entity::find()
            .inner_join(schema::championship::Entity)
            .filter(schema::championship::Column::TournamentId.eq(self.id))
            .filter(schema::championship::Column::DeletedAt.is_null())
            .order_by_asc(schema::tree::Column::Id)
            .all(db).await
    }

    pub async fn load_invites<C>(&self, db: &C) -> Result<Vec<Invite>, TournamentError> where C: ConnectionTrait {
        Ok(Invite::get_all_for_target(db, self.invite_target()).await?)
    }

    async fn attached_category_ids<C>(&self, db: &C) -> Result<BTreeSet<i32>, DbErr> where C: ConnectionTrait {
        let rows = schema::championship::Entity::find()
            .filter(schema::championship::Column::TournamentId.eq(self.id))
            .all(db).await?;
        Ok(rows.into_iter().map(|r| r.category_id).collect())
    }

    async fn insert_pivot_rows<C>(&self, db: &C, category_ids: &[i32]) -> Result<(), DbErr> where C: ConnectionTrait {
        if category_ids.is_empty() {
            return Ok(());
        }

        let now = chrono::Utc::now().naive_utc();
        schema::championship::Entity::insert_many(
            category_ids.iter().map(|category_id| new_pivot_row(self.id, *category_id, now))
        ).exec(db).await?;
        Ok(())
    }

    /// Makes the attached categories exactly `category_ids`.
    ///
    /// Championships of categories not in the list are removed for good,
    /// along with their settings, teams, competitors and trees.
    pub async fn sync_categories<C>(&self, db: &C, category_ids: &[i32]) -> Result<CategorySync, DbErr> where C: ConnectionTrait {
        let existing = self.attached_category_ids(db).await?;
        let wanted: BTreeSet<i32> = category_ids.iter().copied().collect();

        let detached: Vec<i32> = existing.difference(&wanted).copied().collect();
        let attached: Vec<i32> = wanted.difference(&existing).copied().collect();

        if !detached.is_empty() {
            schema::championship::Entity::delete_many()
                .filter(schema::championship::Column::TournamentId.eq(self.id))
                .filter(schema::championship::Column::CategoryId.is_in(detached.clone()))
                .exec(db).await?;
        }
        self.insert_pivot_rows(db, &attached).await?;

        tracing::debug!(tournament_id = self.id, ?attached, ?detached, "Synced categories");
        Ok(CategorySync { attached, detached })
    }

    /// Attaches the categories that are not attached yet. Returns the newly attached ids.
    pub async fn attach_categories<C>(&self, db: &C, category_ids: &[i32]) -> Result<Vec<i32>, DbErr> where C: ConnectionTrait {
        let existing = self.attached_category_ids(db).await?;
        let attached: Vec<i32> = category_ids.iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .difference(&existing)
            .copied()
            .collect();

        self.insert_pivot_rows(db, &attached).await?;
        Ok(attached)
    }

    /// Creates a settings row for every live championship from `options`,
    /// keyed by category id. Stops at the first championship without an entry.
    pub async fn apply_rule_options<C>(&self, db: &C, options: &RuleOptions) -> Result<Vec<ChampionshipSettings>, TournamentError> where C: ConnectionTrait {
        let championships = Championship::get_all_in_tournament(db, self.id).await?;

        let mut created = Vec::with_capacity(championships.len());
        for championship in championships {
            let attributes = options.get(&championship.category_id).ok_or(
                TournamentError::MissingPresetEntry {
                    championship_id: championship.id,
                    category_id: championship.category_id,
                }
            )?;
            created.push(ChampionshipSettings::create(db, championship.id, attributes.clone()).await?);
        }

        Ok(created)
    }

    /// Replaces the categories of the tournament with those of a rule preset
    /// and seeds their settings.
    ///
    /// Rule id `0`, unknown ids and presets the provider does not have
    /// leave the tournament untouched.
    pub async fn set_and_configure_categories<C, P>(&self, db: &C, rule_id: i32, provider: &P) -> Result<Vec<ChampionshipSettings>, TournamentError> where C: ConnectionTrait, P: RuleOptionsProvider + ?Sized {
        let Some(preset) = RulePreset::from_rule_id(rule_id) else {
            tracing::debug!(tournament_id = self.id, rule_id, "No rule preset for rule id");
            return Ok(vec![]);
        };
        let Some(options) = provider.preset_options(preset) else {
            tracing::warn!(tournament_id = self.id, preset = preset.config_key(), "Rule preset is not configured");
            return Ok(vec![]);
        };

        let category_ids: Vec<i32> = options.keys().copied().collect();
        self.sync_categories(db, &category_ids).await?;
        let created = self.apply_rule_options(db, options).await?;

        audit::record(db, self, AuditEvent::CategoriesConfigured).await?;
        tracing::info!(tournament_id = self.id, preset = preset.config_key(), settings = created.len(), "Configured categories");

        Ok(created)
    }

    /// Team championships of the tournament, by championship id, labelled
    /// with the category alias or else the category display name.
    pub async fn build_category_list<C>(&self, db: &C) -> Result<BTreeMap<i32, String>, DbErr> where C: ConnectionTrait {
        let rows = schema::championship::Entity::find()
            .filter(schema::championship::Column::TournamentId.eq(self.id))
            .filter(schema::championship::Column::DeletedAt.is_null())
            .find_also_related(schema::category::Entity)
            .filter(schema::category::Column::IsTeam.eq(true))
            .order_by_asc(schema::championship::Column::Id)
            .all(db).await?;

        Ok(rows.into_iter().filter_map(|(championship, category)| {
            let category = Category::from_model(category?);
            let label = match category.alias.as_deref().filter(|a| !a.is_empty()) {
                Some(alias) => alias.to_string(),
                None => category.build_name().trim().to_string(),
            };
            Some((championship.id, label))
        }).collect())
    }

    pub async fn has_team_category<C>(&self, db: &C) -> Result<u64, DbErr> where C: ConnectionTrait {
        schema::category::Entity::find()
            .inner_join(schema::championship::Entity)
            .filter(schema::championship::Column::TournamentId.eq(self.id))
            .filter(schema::category::Column::IsTeam.eq(true))
            .count(db).await
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn tournament(level_id: i32, tournament_type: i32) -> Tournament {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();
        let time = date.and_hms_opt(12, 0, 0).unwrap();
        Tournament {
            id: 1,
            user_id: 1,
            slug: "cup".into(),
            name: "Cup".into(),
            date_ini: date,
            date_fin: date,
            register_date_limit: None,
            sport: "Kendo".into(),
            promoter: None,
            host_organization: None,
            technical_assistance: None,
            category: None,
            rule_id: 0,
            tournament_type,
            venue_id: None,
            level_id,
            created_at: time,
            updated_at: time,
            deleted_at: None,
        }
    }

    fn level_predicates(t: &Tournament) -> [bool; 8] {
        [
            t.has_no_level(),
            t.is_local(),
            t.is_districtal(),
            t.is_municipal(),
            t.is_estate(),
            t.is_regional(),
            t.is_national(),
            t.is_international(),
        ]
    }

    #[test]
    fn test_each_level_matches_exactly_one_predicate() {
        for level_id in 1..=8 {
            let predicates = level_predicates(&tournament(level_id, 1));
            assert_eq!(predicates.iter().filter(|p| **p).count(), 1, "level {}", level_id);
            assert!(predicates[(level_id - 1) as usize]);
        }
    }

    #[test]
    fn test_out_of_range_level_matches_nothing() {
        for level_id in [0, 9, -1] {
            let t = tournament(level_id, 1);
            assert!(level_predicates(&t).iter().all(|p| !p));
            assert_eq!(t.level_kind(), None);
        }
    }

    #[test]
    fn test_level_kind_codes() {
        assert_eq!(tournament(7, 1).level_kind(), Some(LevelKind::National));
        for level_id in 1..=8 {
            assert_eq!(LevelKind::from_code(level_id).map(|l| l.code()), Some(level_id));
        }
    }

    #[test]
    fn test_open_and_invitation_are_exclusive() {
        let open = tournament(1, 1);
        assert!(open.is_open());
        assert!(!open.needs_invitation());
        assert_eq!(open.tournament_type(), Some(TournamentType::Open));

        let closed = tournament(1, 0);
        assert!(!closed.is_open());
        assert!(closed.needs_invitation());
        assert_eq!(closed.tournament_type(), Some(TournamentType::InvitationOnly));

    }

    #[test]
    fn test_only_two_type_codes_are_valid() {
        assert!(check_tournament_type(0).is_ok());
        assert!(check_tournament_type(1).is_ok());
        assert!(matches!(check_tournament_type(2), Err(TournamentError::InvalidTournamentType(2))));
        assert!(matches!(check_tournament_type(-1), Err(TournamentError::InvalidTournamentType(-1))));
    }

    #[test]
    fn test_is_deleted_follows_deleted_at() {
        let mut t = tournament(1, 1);
        assert!(!t.is_deleted());
        t.deleted_at = Some(t.updated_at);
        assert!(t.is_deleted());
    }

    #[test]
    fn test_category_list_of_nothing_is_empty() {
        assert_eq!(get_category_list(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_snapshot_uses_type_key() {
        let json = serde_json::to_value(tournament(2, 0)).unwrap();
        assert_eq!(json["type"], 0);
        assert!(json.get("tournament_type").is_none());
    }
}
