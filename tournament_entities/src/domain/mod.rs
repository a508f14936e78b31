pub mod category;
pub mod championship;
pub mod championship_settings;
pub mod invite;
pub mod tournament;
