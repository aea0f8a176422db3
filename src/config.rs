use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub stats: StatsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StatsConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub clear_screen: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            path: "stats.json".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let config_path = "Config.toml";
        let mut config = if Path::new(config_path).exists() {
            match fs::read_to_string(config_path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(config) => config,
                    Err(e) => {
                        warn!("failed to parse {}: {}, using defaults", config_path, e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!("failed to read {}: {}, using defaults", config_path, e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.merge_env();

        info!(
            "config: stats path {:?}, clear_screen {}",
            config.stats.path, config.ui.clear_screen
        );
        config
    }

    /// Environment variables win over Config.toml. Unparseable values are
    /// ignored.
    fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("NOUGHTS_STATS_PATH") {
            if !val.is_empty() {
                self.stats.path = val;
            }
        }
        if let Ok(val) = std::env::var("NOUGHTS_CLEAR_SCREEN") {
            if let Ok(parsed) = val.parse() {
                self.ui.clear_screen = parsed;
            }
        }
    }
}
