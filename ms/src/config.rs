//! Demo server configuration types and loading

use eyre::{Context, Result};
use promptcatalog::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt catalog used by the prompt demo
    pub prompts: CatalogConfig,

    /// Settings document served by the resource demo
    pub settings: AppSettings,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .mcpdemos.yml
        let local_config = PathBuf::from(".mcpdemos.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/mcpdemos/mcpdemos.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("mcpdemos").join("mcpdemos.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Application settings exposed as `config://app/settings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: String,
    pub version: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            version: "1.2.3".to_string(),
        }
    }
}

impl AppSettings {
    /// Compact JSON text, the form both the resource and `get-config` return
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.prompts.dir, PathBuf::from("prompts"));
        assert_eq!(config.settings.theme, "dark");
        assert_eq!(config.settings.version, "1.2.3");
    }

    #[test]
    fn test_settings_json() {
        let json = AppSettings::default().to_json().unwrap();
        assert_eq!(json, r#"{"theme":"dark","version":"1.2.3"}"#);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
prompts:
  dir: ./my-prompts

settings:
  theme: light
  version: "2.0.0"
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.prompts.dir, PathBuf::from("./my-prompts"));
        assert_eq!(config.settings.theme, "light");
        assert_eq!(config.settings.version, "2.0.0");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
settings:
  theme: solarized
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.settings.theme, "solarized");

        // Defaults for unspecified
        assert_eq!(config.settings.version, "1.2.3");
        assert_eq!(config.prompts.dir, PathBuf::from("prompts"));
    }
}
