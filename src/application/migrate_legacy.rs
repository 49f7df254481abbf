//! One-shot upgrade of the legacy post store
//!
//! Legacy records may lack `createdAt` and `category`, or carry them in the wrong
//! shape. Migration coerces the creation time to epoch milliseconds (falling back
//! to the migration time), turns the category into a string (empty when missing),
//! writes the result under the current key and erases the legacy key. Once the
//! legacy key is gone every later run is a no-op.

use crate::domain::Post;
use crate::error::{MigrationParseError, Result};
use crate::infrastructure::{KeyValueStore, PostRepository};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

/// Result of the startup migration step
#[derive(Debug)]
pub enum MigrationOutcome {
    /// Legacy posts were written under the current key
    Migrated { posts: usize },
    /// No legacy data present
    NotNeeded,
    /// Legacy data could not be parsed; nothing was changed
    Failed(MigrationParseError),
}

/// Run the legacy migration if legacy data exists.
///
/// Parse failures are reported as [`MigrationOutcome::Failed`] and leave both keys
/// untouched. Only write failures are returned as errors.
pub fn migrate_legacy<S: KeyValueStore>(
    repository: &PostRepository<S>,
    now: DateTime<Utc>,
) -> Result<MigrationOutcome> {
    let raw = match repository.legacy_raw() {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return Ok(MigrationOutcome::NotNeeded),
        Err(e) => return Ok(failed(MigrationParseError::Io(e))),
    };

    let posts = match upgrade(&raw, now.timestamp_millis()) {
        Ok(posts) => posts,
        Err(e) => return Ok(failed(e)),
    };

    repository.save(&posts)?;
    repository.remove_legacy()?;

    tracing::info!(count = posts.len(), "migrated legacy posts");
    Ok(MigrationOutcome::Migrated { posts: posts.len() })
}

fn failed(error: MigrationParseError) -> MigrationOutcome {
    tracing::warn!(error = %error, "skipping legacy post migration");
    MigrationOutcome::Failed(error)
}

fn upgrade(raw: &str, now_ms: i64) -> std::result::Result<Vec<Post>, MigrationParseError> {
    let records = match serde_json::from_str::<Value>(raw)? {
        Value::Null => Vec::new(),
        Value::Array(records) => records,
        _ => return Err(MigrationParseError::NotASequence),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let Value::Object(mut fields) = record else {
                return Err(MigrationParseError::InvalidRecord {
                    index,
                    reason: "expected an object".to_string(),
                });
            };
            upgrade_record(&mut fields, now_ms);
            serde_json::from_value::<Post>(Value::Object(fields)).map_err(|e| {
                MigrationParseError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

fn upgrade_record(fields: &mut Map<String, Value>, now_ms: i64) {
    let created_at = fields
        .get("createdAt")
        .and_then(created_at_millis)
        .filter(|ms| *ms != 0)
        .unwrap_or(now_ms);
    fields.insert("createdAt".to_string(), Value::from(created_at));

    let category = match fields.get("category") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    fields.insert("category".to_string(), Value::from(category));
}

/// Epoch milliseconds from a legacy `createdAt`.
///
/// Integers are taken as is and floats are truncated. Strings may hold a number,
/// an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
fn created_at_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => parse_timestamp(s.trim()),
        _ => None,
    }
}

fn parse_timestamp(s: &str) -> Option<i64> {
    if let Ok(ms) = s.parse::<i64>() {
        return Some(ms);
    }
    if let Some(ms) = s.parse::<f64>().ok().and_then(truncate) {
        return Some(ms);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

fn truncate(ms: f64) -> Option<i64> {
    ms.is_finite().then(|| ms.trunc() as i64)
}
