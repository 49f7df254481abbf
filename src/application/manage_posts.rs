//! Create, edit and delete posts

use crate::domain::{Post, PostDraft};
use crate::error::Result;
use crate::infrastructure::{KeyValueStore, PostRepository};
use chrono::{DateTime, Utc};

/// What an edit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No post has the requested id
    NotFound,
    /// Title or content was blank after trimming
    Rejected,
}

/// Service for mutating the post collection.
///
/// Every mutation is one load, one in-memory change and one save.
pub struct PostService<S: KeyValueStore> {
    pub(crate) repository: PostRepository<S>,
}

impl<S: KeyValueStore> PostService<S> {
    pub fn new(repository: PostRepository<S>) -> Self {
        PostService { repository }
    }

    pub fn repository(&self) -> &PostRepository<S> {
        &self.repository
    }

    /// Add a post at the front of the collection.
    ///
    /// Returns `None` without touching the store when the draft is blank.
    pub fn create(&self, draft: &PostDraft, now: DateTime<Utc>) -> Result<Option<Post>> {
        let Some((title, content, category)) = draft.validate() else {
            return Ok(None);
        };

        let post = Post::new(now.timestamp_millis(), title, content, category);
        let mut posts = self.repository.load();
        posts.insert(0, post.clone());
        self.repository.save(&posts)?;

        tracing::debug!(id = post.id, "created post");
        Ok(Some(post))
    }

    /// Overwrite title, content and category of an existing post in place.
    ///
    /// A draft without a category keeps the post's current one, normalized.
    pub fn update(&self, id: i64, draft: &PostDraft) -> Result<UpdateOutcome> {
        let Some((title, content, _)) = draft.validate() else {
            return Ok(UpdateOutcome::Rejected);
        };

        let mut posts = self.repository.load();
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(UpdateOutcome::NotFound);
        };

        let current = post
            .category_label()
            .map(|label| label.normalized())
            .unwrap_or_default();
        let category = draft.category_or(current);

        post.title = title;
        post.content = content;
        post.category = Some(category.to_string());
        self.repository.save(&posts)?;

        tracing::debug!(id, "updated post");
        Ok(UpdateOutcome::Updated)
    }

    /// Remove a post. Returns false, without writing, if no post has `id`.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let mut posts = self.repository.load();
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Ok(false);
        }

        self.repository.save(&posts)?;
        tracing::debug!(id, "deleted post");
        Ok(true)
    }

    /// Empty the collection. Returns how many posts were removed.
    pub fn clear_all(&self) -> Result<usize> {
        let removed = self.repository.load().len();
        self.repository.save(&[])?;
        tracing::debug!(removed, "cleared all posts");
        Ok(removed)
    }

    pub fn find(&self, id: i64) -> Option<Post> {
        self.repository.find(id)
    }
}
