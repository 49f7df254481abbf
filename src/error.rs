//! Error types for miniblog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for miniblog application
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Not a miniblog directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Import failed: {0}")]
    ImportFormat(#[from] ImportFormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Why the stored collection could not be read.
///
/// Never surfaced to the user: the repository degrades to an empty collection.
#[derive(Debug, Error)]
pub enum StoreReadError {
    #[error("failed to read store: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored posts are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("stored value is not a list of posts")]
    NotASequence,
}

/// Rejected import payload. The existing collection is left untouched.
#[derive(Debug, Error)]
pub enum ImportFormatError {
    #[error("file is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("expected a JSON array of posts")]
    NotASequence,

    #[error("record {index} is not a post: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Legacy data that could not be migrated. Migration is skipped when this occurs.
#[derive(Debug, Error)]
pub enum MigrationParseError {
    #[error("failed to read legacy posts: {0}")]
    Io(#[from] std::io::Error),

    #[error("legacy posts are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("legacy value is not a list of posts")]
    NotASequence,

    #[error("legacy record {index} is not a post: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

impl BlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::NotInitialized(_) => 2,
            BlogError::PostNotFound(_) => 3,
            BlogError::ImportFormat(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogError::NotInitialized(path) => {
                format!(
                    "Not a miniblog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'miniblog init' in this directory to create a new blog\n\
                    • Navigate to an existing miniblog directory\n\
                    • Set MINIBLOG_ROOT environment variable to your blog path",
                    path.display()
                )
            }
            BlogError::PostNotFound(reference) => {
                format!(
                    "Post not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'miniblog list' to see post ids\n\
                    • Post references look like 1700000000000 or post.html?id=1700000000000",
                    reference
                )
            }
            BlogError::ImportFormat(err) => {
                format!(
                    "Import failed: {}\n\n\
                    Your existing posts were not changed.\n\
                    Please select a valid JSON export (e.g. one written by 'miniblog export').",
                    err
                )
            }
            BlogError::Config(msg) => {
                if msg.contains("Invalid sort") {
                    format!(
                        "{}\n\n\
                        Valid sort modes: newest, oldest, title-asc, title-desc\n\
                        Example: miniblog config default_sort oldest",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;
