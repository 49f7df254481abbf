//! Post entity

use crate::domain::category::{Category, CategoryLabel};
use chrono::{DateTime, Local, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Content with more lines than this is clamped in listings
pub const PREVIEW_MAX_LINES: usize = 12;

/// A single post as stored.
///
/// Field names serialize in camelCase (`createdAt`) so existing stores stay readable.
/// Fields this type does not know about are kept in `extra` and written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Create a post stamped with `now_ms` as both id and creation time
    pub fn new(now_ms: i64, title: String, content: String, category: Category) -> Self {
        Post {
            id: now_ms,
            title,
            content,
            category: Some(category.to_string()),
            created_at: now_ms,
            extra: Map::new(),
        }
    }

    /// Stored category for display, if any.
    ///
    /// An empty string (left behind by legacy migration) counts as no category.
    pub fn category_label(&self) -> Option<CategoryLabel> {
        self.category
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(CategoryLabel::from_raw)
    }

    /// Creation time in the local timezone
    pub fn created_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.created_at).single()
    }

    /// Whether the content is too long to show in full in a listing
    pub fn is_long(&self, preview_chars: usize) -> bool {
        self.content.chars().count() > preview_chars
            || self.content.split('\n').count() > PREVIEW_MAX_LINES
    }
}

/// User input for creating or editing a post
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
}

impl PostDraft {
    pub fn new(title: &str, content: &str, category: Option<&str>) -> Self {
        PostDraft {
            title: title.to_string(),
            content: content.to_string(),
            category: category.map(str::to_string),
        }
    }

    /// Trim title and content and normalize the category.
    ///
    /// Returns `None` when the trimmed title or content is empty.
    pub fn validate(&self) -> Option<(String, String, Category)> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return None;
        }

        Some((
            title.to_string(),
            content.to_string(),
            self.category_or(Category::Other),
        ))
    }

    /// Normalized category, or `fallback` when none was given
    pub fn category_or(&self, fallback: Category) -> Category {
        self.category
            .as_deref()
            .map(Category::normalize)
            .unwrap_or(fallback)
    }
}

/// Sorted unique non-empty categories present in the collection
pub fn categories_in_use(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .filter_map(|p| p.category.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn id_param_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?:^|[?&])id=([^&#]*)").unwrap())
}

/// Resolve a post reference to an id.
///
/// Accepts a bare id (`1700000000000`) or an address carrying an `id` query
/// parameter (`post.html?id=1700000000000`, `id=1700000000000`).
pub fn parse_post_ref(reference: &str) -> Option<i64> {
    let reference = reference.trim();
    if let Ok(id) = reference.parse::<i64>() {
        return Some(id);
    }

    id_param_regex()
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().trim().parse::<i64>().ok())
}
