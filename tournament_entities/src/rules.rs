use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use crate::domain::championship_settings::ChampionshipSettingsAttributes;

/// Settings per category id.
pub type RuleOptions = BTreeMap<i32, ChampionshipSettingsAttributes>;

/// The rule sets a tournament can be configured from, keyed by the
/// tournament's `rule_id`. `0` and unknown ids select no preset.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
pub enum RulePreset {
    Ikf,
    Ekf,
    Lakf,
}

impl RulePreset {
    pub fn from_rule_id(rule_id: i32) -> Option<RulePreset> {
        match rule_id {
            1 => Some(RulePreset::Ikf),
            2 => Some(RulePreset::Ekf),
            3 => Some(RulePreset::Lakf),
            _ => None,
        }
    }

    pub fn rule_id(&self) -> i32 {
        match self {
            RulePreset::Ikf => 1,
            RulePreset::Ekf => 2,
            RulePreset::Lakf => 3,
        }
    }

    pub fn config_key(&self) -> &'static str {
        match self {
            RulePreset::Ikf => "ikf_settings",
            RulePreset::Ekf => "ekf_settings",
            RulePreset::Lakf => "lakf_settings",
        }
    }
}

pub trait RuleOptionsProvider {
    fn preset_options(&self, preset: RulePreset) -> Option<&RuleOptions>;

    fn load_rule_options(&self, rule_id: i32) -> Option<&RuleOptions> {
        RulePreset::from_rule_id(rule_id).and_then(|preset| self.preset_options(preset))
    }
}

/// Presets as read from the configuration file.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RulePresets {
    pub ikf_settings: RuleOptions,
    pub ekf_settings: RuleOptions,
    pub lakf_settings: RuleOptions,
}

impl RulePresets {
    pub fn from_yaml_str(yaml: &str) -> Result<RulePresets, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn set(&mut self, preset: RulePreset, options: RuleOptions) {
        match preset {
            RulePreset::Ikf => self.ikf_settings = options,
            RulePreset::Ekf => self.ekf_settings = options,
            RulePreset::Lakf => self.lakf_settings = options,
        }
    }
}

impl RuleOptionsProvider for RulePresets {
    // An empty preset counts as unconfigured, so applying it cannot wipe
    // the categories of a tournament.
    fn preset_options(&self, preset: RulePreset) -> Option<&RuleOptions> {
        let options = match preset {
            RulePreset::Ikf => &self.ikf_settings,
            RulePreset::Ekf => &self.ekf_settings,
            RulePreset::Lakf => &self.lakf_settings,
        };
        if options.is_empty() {
            None
        }
        else {
            Some(options)
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rule_ids_without_preset() {
        assert_eq!(RulePreset::from_rule_id(0), None);
        assert_eq!(RulePreset::from_rule_id(4), None);
        assert_eq!(RulePreset::from_rule_id(-1), None);
    }

    #[test]
    fn test_rule_id_mapping_is_consistent() {
        for preset in [RulePreset::Ikf, RulePreset::Ekf, RulePreset::Lakf] {
            assert_eq!(RulePreset::from_rule_id(preset.rule_id()), Some(preset));
        }
    }

    #[test]
    fn test_parse_presets_from_yaml() {
        let presets = RulePresets::from_yaml_str(r#"
ikf_settings:
  5:
    fighting_areas: 2
    fight_duration: "03:00"
  7:
    has_encho: false
lakf_settings:
  3: {}
"#).unwrap();

        let ikf = presets.load_rule_options(1).unwrap();
        assert_eq!(ikf.keys().copied().collect::<Vec<_>>(), vec![5, 7]);
        assert_eq!(ikf[&5].fighting_areas, 2);
        assert_eq!(ikf[&5].fight_duration.as_deref(), Some("03:00"));
        assert_eq!(ikf[&5].preliminary_group_size, 3);
        assert!(!ikf[&7].has_encho);

        assert!(presets.load_rule_options(2).is_none());
        assert_eq!(presets.load_rule_options(3).map(|o| o.len()), Some(1));
        assert!(presets.load_rule_options(0).is_none());
    }
}
