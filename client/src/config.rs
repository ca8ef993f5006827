use std::{fs, path::Path};

use anyhow::Context;
use liblife::Rule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub rows: u32,
    pub columns: u32,
    pub rule: Rule,

    /// Delay between generations while playing. 0 plays as fast as possible.
    pub tick_millis: u64,

    /// Seed for the random source. Seeded from the OS when absent.
    pub seed: Option<u64>,

    /// Generations played when not running interactively.
    pub max_generations: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            columns: 64,
            rule: Rule::CONWAY,
            tick_millis: 100,
            seed: None,
            max_generations: 1000,
        }
    }
}

impl ClientConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Couldn't serialize config")
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "rows": 12, "rule": "B36/S23" }"#).unwrap();

        assert_eq!(config.rows, 12);
        assert_eq!(config.columns, 64);
        assert_eq!(config.rule, Rule::new(&[3, 6], &[2, 3]));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn bad_rule_is_rejected() {
        let result = serde_json::from_str::<ClientConfig>(r#"{ "rule": "B9/S23" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_what_to_json_wrote() {
        let config = ClientConfig {
            rows: 20,
            columns: 30,
            seed: Some(42),
            tick_millis: 0,
            ..ClientConfig::default()
        };

        let path = env::temp_dir().join(format!("life-client-config-{}.json", process::id()));
        fs::write(&path, config.to_json().unwrap()).unwrap();
        let loaded = ClientConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
        assert!(config.to_json().unwrap().contains(r#""rule": "B3/S23""#));
    }

    #[test]
    fn load_reports_missing_file() {
        let error = ClientConfig::load("/nonexistent/life-client.json").unwrap_err();
        assert!(error.to_string().contains("Couldn't read config"));
    }
}
