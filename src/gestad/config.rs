use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_CURRENCY: &str = "€";

/// User configuration stored as JSON in the platform config directory.
/// Every field has a default, so a missing or partial file never blocks
/// startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestadConfig {
    /// Data file to open when none is given on the command line.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Currency symbol appended to displayed salaries.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for GestadConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            currency: default_currency(),
        }
    }
}

impl GestadConfig {
    /// Read the config from `config_dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write the config to `config_dir`, creating the directory if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let dir = config_dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_use_the_euro_symbol_and_no_data_file() {
        let config = GestadConfig::default();
        assert_eq!(config.currency, "€");
        assert!(config.data_file.is_none());
    }

    #[test]
    fn loading_a_missing_file_yields_the_defaults() {
        let dir = TempDir::new().unwrap();
        let config = GestadConfig::load(dir.path()).unwrap();
        assert_eq!(config, GestadConfig::default());
    }

    #[test]
    fn saves_and_reloads_the_same_values() {
        let dir = TempDir::new().unwrap();
        let config = GestadConfig {
            data_file: Some(PathBuf::from("/tmp/essai.json")),
            currency: "CHF".to_string(),
        };

        config.save(dir.path()).unwrap();
        let reloaded = GestadConfig::load(dir.path()).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn partial_files_fall_back_to_field_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let config = GestadConfig::load(dir.path()).unwrap();
        assert_eq!(config.currency, "€");
        assert!(config.data_file.is_none());
    }

    #[test]
    fn save_creates_the_config_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("profond").join("config");

        GestadConfig::default().save(&nested).unwrap();
        assert!(nested.join(CONFIG_FILENAME).exists());
    }
}
