//! Post collection persistence

use crate::domain::Post;
use crate::error::{Result, StoreReadError};
use crate::infrastructure::store::KeyValueStore;
use serde_json::Value;

/// Key holding the current collection
pub const POSTS_KEY: &str = "mini_blog_posts_v2";

/// Key holding the collection in its legacy shape
pub const LEGACY_POSTS_KEY: &str = "mini_blog_posts_v1";

/// Owns reading and writing the whole post collection as one serialized value
#[derive(Debug)]
pub struct PostRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PostRepository<S> {
    pub fn new(store: S) -> Self {
        PostRepository { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the collection, reporting why it could not be read
    pub fn try_load(&self) -> std::result::Result<Vec<Post>, StoreReadError> {
        let Some(raw) = self.store.get(POSTS_KEY)? else {
            return Ok(Vec::new());
        };

        let value: Value = serde_json::from_str(&raw)?;
        if !value.is_array() {
            return Err(StoreReadError::NotASequence);
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Read the collection; missing or corrupt data reads as empty
    pub fn load(&self) -> Vec<Post> {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load posts; treating store as empty");
            Vec::new()
        })
    }

    /// Replace the stored collection
    pub fn save(&self, posts: &[Post]) -> Result<()> {
        let raw = serde_json::to_string(posts)?;
        self.store.set(POSTS_KEY, &raw)?;
        tracing::debug!(count = posts.len(), "saved posts");
        Ok(())
    }

    /// Raw value under the legacy key, if one is still present
    pub fn legacy_raw(&self) -> std::io::Result<Option<String>> {
        self.store.get(LEGACY_POSTS_KEY)
    }

    pub fn remove_legacy(&self) -> std::io::Result<()> {
        self.store.remove(LEGACY_POSTS_KEY)
    }

    /// Look up a single post by id
    pub fn find(&self, id: i64) -> Option<Post> {
        self.load().into_iter().find(|p| p.id == id)
    }
}
