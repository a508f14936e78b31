pub use super::category::Entity as Category;
pub use super::championship::Entity as Championship;
pub use super::championship_settings::Entity as ChampionshipSettings;
pub use super::competitor::Entity as Competitor;
pub use super::invite::Entity as Invite;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_audit::Entity as TournamentAudit;
pub use super::tournament_level::Entity as TournamentLevel;
pub use super::tree::Entity as Tree;
pub use super::users::Entity as Users;
pub use super::venue::Entity as Venue;
