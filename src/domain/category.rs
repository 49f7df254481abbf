//! Post categories and normalization

use std::fmt;
use std::str::FromStr;

/// The closed set of categories a post may be written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    News,
    Tips,
    Tutorial,
    Opinion,
    Announcement,
    /// Catch-all for anything outside the set
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::News,
        Category::Tips,
        Category::Tutorial,
        Category::Opinion,
        Category::Announcement,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Tips => "Tips",
            Category::Tutorial => "Tutorial",
            Category::Opinion => "Opinion",
            Category::Announcement => "Announcement",
            Category::Other => "Other",
        }
    }

    /// Map any input to an allowed category, defaulting to `Other`.
    ///
    /// Matching is exact: `"news"` is not `News`.
    pub fn normalize(value: &str) -> Category {
        Category::from_str(value).unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: '{}'", s))
    }
}

/// A stored category string as seen by display code.
///
/// Imported and legacy data may carry values outside [`Category`]; those are
/// shown as-is rather than rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLabel {
    Known(Category),
    Unrecognized(String),
}

impl CategoryLabel {
    pub fn from_raw(raw: &str) -> Self {
        match Category::from_str(raw) {
            Ok(category) => CategoryLabel::Known(category),
            Err(_) => CategoryLabel::Unrecognized(raw.to_string()),
        }
    }

    /// The category a write path would store for this label
    pub fn normalized(&self) -> Category {
        match self {
            CategoryLabel::Known(category) => *category,
            CategoryLabel::Unrecognized(_) => Category::Other,
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryLabel::Known(category) => write!(f, "{}", category),
            CategoryLabel::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
