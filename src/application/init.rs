//! Initialize blog use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStore};
use std::fs;
use std::path::Path;

/// Initialize a new blog store at the specified path.
pub fn init(path: &Path) -> Result<FileSystemStore> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::new(path.to_path_buf());
    store.initialize()?;
    store.save_config(&Config::new())?;

    tracing::debug!(root = %path.display(), "initialized blog");
    Ok(store)
}
