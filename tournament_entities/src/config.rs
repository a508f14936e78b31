use crate::rules::RulePresets;


#[derive(Debug, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub db_url: String,
    pub logging_config: String,
    pub rule_presets: RulePresets,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_url: "sqlite://./tournaments.sqlite3?mode=rwc".into(),
            logging_config: "info,sqlx::query=error".into(),
            rule_presets: RulePresets::default(),
        }
    }
}

pub const CONFIG_PATH_VAR: &str = "TOURNAMENT_ENTITIES_CONFIG";

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Config, serde_yaml::Error> {
        serde_yaml::from_str::<Config>(yaml)
    }
}

pub(crate) fn read_config_inner() -> Result<Config, anyhow::Error> {
    let config_path = std::env::var(CONFIG_PATH_VAR)?;
    let config = std::fs::read_to_string(config_path)?;
    let config = Config::from_yaml_str(&config)?;
    Ok(config)
}

pub fn read_config() -> Config {
    match read_config_inner() {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up in the config
            eprintln!("Warning: Failed to read config: {}", e);
            Config::default()
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::rules::RuleOptionsProvider;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = Config::from_yaml_str("db_url: \"sqlite::memory:\"\n").unwrap();
        assert_eq!(config.db_url, "sqlite::memory:");
        assert_eq!(config.logging_config, Config::default().logging_config);
        assert_eq!(config.rule_presets, RulePresets::default());
    }

    #[test]
    fn test_rule_presets_are_read() {
        let config = Config::from_yaml_str(r#"
rule_presets:
  ekf_settings:
    12:
      team_size: 5
      team_reserve: 2
"#).unwrap();
        let ekf = config.rule_presets.load_rule_options(2).unwrap();
        assert_eq!(ekf[&12].team_size, Some(5));
        assert!(config.rule_presets.load_rule_options(1).is_none());
    }

    #[test]
    fn test_read_config_from_env_path() {
        let path = std::env::temp_dir().join(format!("tournament_entities_config_{}.yaml", std::process::id()));
        std::fs::write(&path, "logging_config: debug\n").unwrap();

        std::env::set_var(CONFIG_PATH_VAR, &path);
        let config = read_config();
        assert_eq!(config.logging_config, "debug");
        assert_eq!(config.db_url, Config::default().db_url);

        std::env::set_var(CONFIG_PATH_VAR, path.with_extension("missing"));
        assert_eq!(read_config(), Config::default());

        std::fs::remove_file(&path).unwrap();
    }
}
