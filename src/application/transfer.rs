//! Export and import of the whole collection

use crate::application::PostService;
use crate::domain::Post;
use crate::error::{ImportFormatError, Result};
use crate::infrastructure::KeyValueStore;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse an import payload into posts without normalizing them
pub fn parse_import(text: &str) -> std::result::Result<Vec<Post>, ImportFormatError> {
    let value: Value = serde_json::from_str(text).map_err(ImportFormatError::Parse)?;
    let Value::Array(records) = value else {
        return Err(ImportFormatError::NotASequence);
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .map_err(|source| ImportFormatError::InvalidRecord { index, source })
        })
        .collect()
}

impl<S: KeyValueStore> PostService<S> {
    /// Pretty-printed JSON of the current collection
    pub fn export_json(&self) -> Result<String> {
        let posts = self.repository.load();
        Ok(serde_json::to_string_pretty(&posts)?)
    }

    /// Write the export artifact to `path`. Returns how many posts were written.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let posts = self.repository.load();
        fs::write(path, serde_json::to_string_pretty(&posts)?)?;
        tracing::debug!(count = posts.len(), path = %path.display(), "exported posts");
        Ok(posts.len())
    }

    /// Replace the whole collection with `text`.
    ///
    /// Records are stored as given, categories included. On error nothing is written.
    pub fn import_json(&self, text: &str) -> Result<usize> {
        let posts = parse_import(text)?;
        self.repository.save(&posts)?;
        tracing::debug!(count = posts.len(), "imported posts");
        Ok(posts.len())
    }

    /// Import the full text content of the file at `path`
    pub fn import_from(&self, path: &Path) -> Result<usize> {
        let text = fs::read_to_string(path)?;
        self.import_json(&text)
    }
}
