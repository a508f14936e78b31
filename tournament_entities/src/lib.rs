pub mod schema;
pub mod domain;
pub mod prelude;
pub mod audit;
pub mod config;
pub mod db;
pub mod logging;
pub mod mock;
pub mod rules;
pub mod slug;

pub use domain::tournament::TournamentError;
