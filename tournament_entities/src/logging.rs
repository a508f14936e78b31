use tracing_subscriber::EnvFilter;

use crate::config::Config;


/// Installs a global fmt subscriber filtered by `Config::logging_config`.
///
/// Returns `false` if a subscriber was already installed, which is what
/// happens when more than one caller in the same process sets up logging.
pub fn init_logging(config: &Config) -> bool {
    let filter = EnvFilter::try_new(&config.logging_config).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid logging config {:?}: {}", config.logging_config, e);
        EnvFilter::new("info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
