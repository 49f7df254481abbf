//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{PostRepository, LEGACY_POSTS_KEY, POSTS_KEY};
pub use store::{FileSystemStore, KeyValueStore, MemoryStore};
