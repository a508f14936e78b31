pub mod prelude;

pub mod category;
pub mod championship;
pub mod championship_settings;
pub mod competitor;
pub mod invite;
pub mod team;
pub mod tournament;
pub mod tournament_audit;
pub mod tournament_level;
pub mod tree;
pub mod users;
pub mod venue;
