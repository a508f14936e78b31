pub use crate::domain::category::{Category, NewCategory};
pub use crate::domain::championship::Championship;
pub use crate::domain::championship_settings::{ChampionshipSettings, ChampionshipSettingsAttributes};
pub use crate::domain::invite::{InvitableKind, Invite, InviteTarget};
pub use crate::domain::tournament::{AttachedCategory, LevelKind, NewTournament, Tournament, TournamentError, TournamentType};
pub use crate::rules::{RuleOptions, RuleOptionsProvider, RulePreset, RulePresets};
