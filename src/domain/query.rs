//! Listing query: text search, category filter and sort
//!
//! # Examples
//!
//! ```
//! use miniblog::domain::{Category, Post, PostQuery, SortMode};
//!
//! let posts = vec![
//!     Post::new(100, "A".to_string(), "x".to_string(), Category::News),
//!     Post::new(200, "B".to_string(), "y".to_string(), Category::Tips),
//! ];
//! let query = PostQuery::new("", "", SortMode::Oldest);
//! let ids: Vec<i64> = query.apply(&posts).iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![100, 200]);
//! ```

use crate::domain::post::Post;
use feruca::{Collator, Tailoring};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Most recently created first
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
    /// Keep collection order
    Unordered,
}

impl SortMode {
    /// Parse a mode the way the listing does: empty means `newest`, anything
    /// unrecognized keeps collection order.
    pub fn parse_lenient(s: &str) -> Self {
        if s.is_empty() {
            return SortMode::Newest;
        }
        SortMode::from_str(s).unwrap_or(SortMode::Unordered)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
            SortMode::Unordered => "unordered",
        }
    }

    fn compare(&self, collator: &mut Collator, a: &Post, b: &Post) -> Ordering {
        match self {
            SortMode::Newest => b.created_at.cmp(&a.created_at),
            SortMode::Oldest => a.created_at.cmp(&b.created_at),
            SortMode::TitleAsc => locale_cmp(collator, &a.title, &b.title),
            SortMode::TitleDesc => locale_cmp(collator, &b.title, &a.title),
            SortMode::Unordered => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            "title-asc" => Ok(SortMode::TitleAsc),
            "title-desc" => Ok(SortMode::TitleDesc),
            "unordered" => Ok(SortMode::Unordered),
            _ => Err(format!(
                "Invalid sort mode: '{}'. Valid modes are: newest, oldest, title-asc, title-desc",
                s
            )),
        }
    }
}

/// Collator for title order: CLDR root collation, punctuation ignored at the
/// first levels.
fn title_collator() -> Collator {
    Collator::new(Tailoring::default(), true, false)
}

/// Locale-aware string ordering. Accents and case only break ties, and
/// strings that still compare equal put lowercase before uppercase.
fn locale_cmp(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| b.cmp(a))
}

/// Filters and order applied to the collection for display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostQuery {
    /// Case-insensitive substring of title, content or category
    pub text: String,
    /// Exact stored category; empty matches everything
    pub category: String,
    pub sort: SortMode,
}

impl PostQuery {
    pub fn new(text: &str, category: &str, sort: SortMode) -> Self {
        PostQuery {
            text: text.to_string(),
            category: category.to_string(),
            sort,
        }
    }

    /// Whether a post passes both filters
    pub fn matches(&self, post: &Post) -> bool {
        self.matches_text(post) && self.matches_category(post)
    }

    fn matches_text(&self, post: &Post) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();

        post.title.to_lowercase().contains(&needle)
            || post.content.to_lowercase().contains(&needle)
            || post
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, post: &Post) -> bool {
        self.category.is_empty() || post.category.as_deref() == Some(self.category.as_str())
    }

    /// Produce the visible subset in display order.
    ///
    /// The sort is stable: posts with equal keys keep their collection order.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        let mut visible: Vec<&Post> = posts.iter().filter(|p| self.matches(p)).collect();
        if self.sort != SortMode::Unordered {
            let mut collator = title_collator();
            visible.sort_by(|a, b| self.sort.compare(&mut collator, a, b));
        }
        visible
    }
}
