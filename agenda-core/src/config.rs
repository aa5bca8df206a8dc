//! Global configuration.
//!
//! Lives at `~/.config/agenda/config.toml`. Everything has a default, so a
//! missing file just means a stock setup.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

static DEFAULT_DATA_PATH: &str = "~/.local/share/agenda";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_user_name() -> String {
    "Maman".to_string()
}

fn default_city() -> String {
    "Paris".to_string()
}

/// Global configuration at ~/.config/agenda/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Where the data file lives. `~` is expanded on use.
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,

    /// Name shown in greetings.
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// City reported by the weather simulation.
    #[serde(default = "default_city")]
    pub city: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            data_dir: default_data_path(),
            user_name: default_user_name(),
            city: default_city(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is missing.
    pub fn load() -> AgendaResult<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Write the config back to its standard location.
    pub fn save(&self) -> AgendaResult<()> {
        let path = Self::config_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.user_name, "Maman");
        assert_eq!(config.city, "Paris");
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: GlobalConfig = toml::from_str(r#"city = "Lyon""#).unwrap();
        assert_eq!(config.city, "Lyon");
        assert_eq!(config.user_name, "Maman");
    }

    #[test]
    fn data_path_expands_tilde() {
        if dirs::home_dir().is_none() {
            return;
        }
        let config = GlobalConfig::default();
        let path = config.data_path();
        assert!(!path.to_string_lossy().starts_with('~'));
    }
}
