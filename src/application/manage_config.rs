//! Config management use case

use crate::domain::SortMode;
use crate::error::{BlogError, Result};
use crate::infrastructure::{Config, FileSystemStore};
use std::str::FromStr;

const VALID_KEYS: &str = "default_sort, export_file, preview_chars, created";

/// Service for managing blog configuration
pub struct ConfigService {
    store: FileSystemStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileSystemStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "default_sort" => Ok(config.default_sort.to_string()),
            "export_file" => Ok(config.export_file.clone()),
            "preview_chars" => Ok(config.preview_chars.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(BlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "default_sort" => {
                config.default_sort = SortMode::from_str(value).map_err(BlogError::Config)?;
            }
            "export_file" => {
                if value.trim().is_empty() {
                    return Err(BlogError::Config(
                        "export_file cannot be empty".to_string(),
                    ));
                }
                config.export_file = value.to_string();
            }
            "preview_chars" => {
                config.preview_chars = value.parse().map_err(|_| {
                    BlogError::Config(format!(
                        "Invalid preview_chars: '{}'. Expected a whole number",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(BlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(BlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_sort, export_file, preview_chars",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
