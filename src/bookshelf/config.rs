use crate::error::{Result, ShelfError};
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "books.json";

/// When the catalog is written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePolicy {
    /// Save after every change.
    #[default]
    EveryMutation,
    /// Save once, at shutdown.
    OnExit,
}

/// Configuration for bookshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Data file; relative paths resolve against the data dir
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Books per page in list screens
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub save_policy: SavePolicy,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
            save_policy: SavePolicy::default(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig = serde_json::from_str(&content)
            .map_err(|e| ShelfError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ShelfError::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Absolute location of the data file for the given data dir.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            data_dir.join(&self.data_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.data_file, PathBuf::from("books.json"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.save_policy, SavePolicy::EveryMutation);
    }

    #[test]
    fn load_missing_config() {
        let dir = tempdir().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let config = ShelfConfig {
            page_size: 4,
            save_policy: SavePolicy::OnExit,
            ..ShelfConfig::default()
        };
        config.save(dir.path()).unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"save_policy": "on_exit"}"#).unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.save_policy, SavePolicy::OnExit);
        assert_eq!(loaded.page_size, 10);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 0}"#).unwrap();
        assert!(matches!(
            ShelfConfig::load(dir.path()),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn data_path_resolution() {
        let config = ShelfConfig::default();
        let dir = Path::new("/data/shelf");
        assert_eq!(config.data_path(dir), PathBuf::from("/data/shelf/books.json"));

        let absolute = ShelfConfig {
            data_file: PathBuf::from("/elsewhere/mine.json"),
            ..ShelfConfig::default()
        };
        assert_eq!(absolute.data_path(dir), PathBuf::from("/elsewhere/mine.json"));
    }
}
