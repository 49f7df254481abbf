//! Key-value storage backing the blog

use crate::error::{BlogError, Result};
use crate::infrastructure::Config;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the per-blog storage directory
pub const STORE_DIR: &str = ".miniblog";

/// Abstract string store addressed by fixed keys
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Erase `key`; erasing a missing key is not an error
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// File system store: one `<key>.json` file per key inside `.miniblog/`
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a store for the blog rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover the blog root by walking up from the current directory.
    /// MINIBLOG_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MINIBLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_store_dir(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(BlogError::Config(format!(
                    "MINIBLOG_ROOT is set to '{}' but no {} directory found. \
                    Run 'miniblog init' in that directory or unset MINIBLOG_ROOT.",
                    path.display(),
                    STORE_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the blog root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_store_dir(&current) {
                return Ok(FileSystemStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(BlogError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_store_dir(path: &Path) -> bool {
        path.join(STORE_DIR).is_dir()
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join(STORE_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_store_dir(&self.root)
    }

    /// Create the `.miniblog` directory. Fails if it already exists.
    pub fn initialize(&self) -> Result<()> {
        let dir = self.store_dir();

        if dir.exists() {
            return Err(BlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&dir)?;
        Ok(())
    }

    /// Load `.miniblog/config.toml`, falling back to defaults if absent
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.store_dir().join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileSystemStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination
    /// is removed first.
    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.path_for(key);
        fs::create_dir_all(self.store_dir())?;

        let tmp_path = path.with_file_name(format!(
            "{}.json.tmp-{}",
            key,
            std::process::id()
        ));
        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store, used where no blog directory is wanted
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Store seeded with a single value
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = MemoryStore::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
