use crate::error::{NotzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "notes.json";

/// Configuration for the notz CLI, stored as config.json next to the data.
///
/// The library never reads this; it only matters to clients deciding where
/// the collection lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotzConfig {
    /// File name of the note collection inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for NotzConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl NotzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotzError::Io)?;
        let config: NotzConfig = serde_json::from_str(&content).map_err(NotzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotzError::Serialization)?;
        fs::write(config_path, content).map_err(NotzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NotzConfig::default();
        assert_eq!(config.data_file, "notes.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = NotzConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, NotzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let config = NotzConfig {
            data_file: "scratch.json".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = NotzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "scratch.json");
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let parsed: NotzConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.data_file, "notes.json");
    }
}
