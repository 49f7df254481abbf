//! Configuration management

use crate::domain::SortMode;
use crate::error::{BlogError, Result};
use crate::infrastructure::store::STORE_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the export artifact
pub const DEFAULT_EXPORT_FILE: &str = "mini-blog-export.json";

/// Default listing clamp threshold, in characters
pub const DEFAULT_PREVIEW_CHARS: usize = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Order used by `list` when no --sort is given
    pub default_sort: SortMode,
    /// File written by `export` when no --output is given
    pub export_file: String,
    /// Listing previews are clamped above this many characters
    pub preview_chars: usize,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_sort: SortMode::Newest,
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config::default()
    }

    /// Load config from .miniblog/config.toml in the given directory.
    ///
    /// A store without a config file uses defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STORE_DIR).join("config.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if path.join(STORE_DIR).is_dir() {
                    return Ok(Config::default());
                }
                return Err(BlogError::NotInitialized(path.to_path_buf()));
            }
            Err(e) => return Err(BlogError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| BlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .miniblog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let store_dir = path.join(STORE_DIR);
        let config_path = store_dir.join("config.toml");

        if !store_dir.exists() {
            fs::create_dir(&store_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.default_sort, SortMode::Newest);
        assert_eq!(config.export_file, "mini-blog-export.json");
        assert_eq!(config.preview_chars, 600);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.default_sort = SortMode::TitleAsc;

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".miniblog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);

        let raw = fs::read_to_string(temp.path().join(".miniblog/config.toml")).unwrap();
        assert!(raw.contains("default_sort = \"title-asc\""));
    }

    #[test]
    fn test_missing_config_in_store_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".miniblog")).unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.default_sort, SortMode::Newest);
        assert_eq!(loaded.export_file, DEFAULT_EXPORT_FILE);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".miniblog")).unwrap();
        fs::write(
            temp.path().join(".miniblog/config.toml"),
            "default_sort = \"oldest\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.default_sort, SortMode::Oldest);
        assert_eq!(loaded.preview_chars, DEFAULT_PREVIEW_CHARS);
    }

    #[test]
    fn test_load_without_store_dir() {
        let temp = TempDir::new().unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            BlogError::NotInitialized(_) => {}
            other => panic!("Expected NotInitialized error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".miniblog")).unwrap();
        fs::write(
            temp.path().join(".miniblog/config.toml"),
            "default_sort = \"sideways\"\n",
        )
        .unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            BlogError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
