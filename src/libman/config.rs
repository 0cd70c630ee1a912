use crate::error::{LibraryError, Result, StorageError};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_DATA_FILE: &str = "data-file";

/// Configuration for libman, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibmanConfig {
    /// Where the library document lives. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for LibmanConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl LibmanConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| StorageError::io(&config_path, e))?;
        let config: LibmanConfig =
            serde_json::from_str(&content).map_err(|e| StorageError::corrupt(&config_path, e))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| StorageError::io(config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StorageError::corrupt(&config_path, e))?;
        fs::write(&config_path, content).map_err(|e| StorageError::io(&config_path, e))?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_FILE => Some(self.data_file.display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATA_FILE => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(LibraryError::Config("data-file cannot be empty".into()));
                }
                self.data_file = PathBuf::from(value);
                Ok(())
            }
            other => Err(LibraryError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![(KEY_DATA_FILE, self.data_file.display().to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibmanConfig::default();
        assert_eq!(config.data_file, PathBuf::from("data/library.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = LibmanConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, LibmanConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("libman");

        let mut config = LibmanConfig::default();
        config.set(KEY_DATA_FILE, "/srv/library.json").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = LibmanConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("/srv/library.json"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let config = LibmanConfig::load(dir.path()).unwrap();
        assert_eq!(config, LibmanConfig::default());
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "data-file = 1").unwrap();

        assert!(matches!(
            LibmanConfig::load(dir.path()),
            Err(LibraryError::Storage(StorageError::Corrupt { .. }))
        ));
    }

    #[test]
    fn test_unknown_key() {
        let mut config = LibmanConfig::default();
        assert!(config.get("colour").is_none());
        assert!(matches!(
            config.set("colour", "blue"),
            Err(LibraryError::Config(_))
        ));
    }

    #[test]
    fn test_blank_data_file_rejected() {
        let mut config = LibmanConfig::default();
        assert!(config.set(KEY_DATA_FILE, "   ").is_err());
        assert_eq!(config, LibmanConfig::default());
    }
}
