//! Configuration for promptcatalog

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the catalog reads prompt files from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory scanned for `*.txt` prompt files (relative to the working directory)
    pub dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(crate::DEFAULT_PROMPTS_DIR),
        }
    }
}

/// Configuration for the `pc` binary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompts: CatalogConfig,
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .with_context(|| format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            Some(PathBuf::from(".promptcatalog.yml")),
            dirs::config_dir().map(|p| p.join("promptcatalog").join("promptcatalog.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to load config from {}: {}", path.display(), e),
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dir() {
        let config = Config::default();
        assert_eq!(config.prompts.dir, PathBuf::from("prompts"));
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
prompts:
  dir: /srv/prompts
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.prompts.dir, PathBuf::from("/srv/prompts"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.prompts, CatalogConfig::default());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_explicit_path_loads() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("pc.yml");
        fs::write(&path, "prompts:\n  dir: custom\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.prompts.dir, PathBuf::from("custom"));
    }
}
