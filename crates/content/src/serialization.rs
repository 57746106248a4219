//! Serialization of the content envelope
//!
//! The same JSON document is used for the persisted store, for the
//! `admin-backup-<date>.json` backups and as the import format:
//!
//! ```json
//! { "version": 1, "exportedAt": "...", "products": [], "articles": [], "projects": [] }
//! ```
//!
//! `version` and `exportedAt` are optional on input, so hand-written files
//! containing only the three collections are accepted. The typed parse is
//! as lenient as the validator: a collection the validator skips (`null`,
//! `false`, `0`, `""`) reads as empty, and numeric ids and slugs (the
//! site's own `projects.ts` uses numeric ids) read as their text.

use crate::validation::js_display;
use crate::{ContentData, SCHEMA_VERSION};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use solar_core::{AdminError, AdminResult};

// ============================================================================
// Constants
// ============================================================================

/// Prefix of backup file names
pub const BACKUP_PREFIX: &str = "admin-backup-";

/// File extension of backups and imports
pub const BACKUP_EXTENSION: &str = "json";

// ============================================================================
// ContentFile
// ============================================================================

/// Content collections plus envelope metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFile {
    /// Schema version for migration purposes
    #[serde(default = "default_version")]
    pub version: u32,

    /// When the document was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub data: ContentData,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

impl ContentFile {
    /// Wrap collections, stamping the current time
    pub fn new(data: ContentData) -> Self {
        Self {
            version: SCHEMA_VERSION,
            exported_at: Some(Utc::now()),
            data,
        }
    }
}

// ============================================================================
// Lenient Fields
// ============================================================================

/// A collection: a list, or a falsy placeholder read as empty
pub(crate) fn collection<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        items @ Value::Array(_) => serde_json::from_value(items).map_err(de::Error::custom),
        Value::Null | Value::Bool(false) => Ok(Vec::new()),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(Vec::new()),
        other => Err(de::Error::custom(format!(
            "expected a list, found {}",
            js_display(&other)
        ))),
    }
}

/// An id or slug given as text or as a number
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        number @ Value::Number(_) => Ok(js_display(&number)),
        other => Err(de::Error::custom(format!(
            "expected text or a number, found {}",
            js_display(&other)
        ))),
    }
}

// ============================================================================
// String Round Trip
// ============================================================================

/// Render collections as the pretty-printed envelope
pub fn content_to_string(data: &ContentData) -> AdminResult<String> {
    let file = ContentFile::new(data.clone());
    serde_json::to_string_pretty(&file).map_err(Into::into)
}

/// Parse an envelope (or bare collections) from JSON text
pub fn content_from_str(json: &str) -> AdminResult<ContentData> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    content_from_value(value)
}

/// Typed parse of an already-parsed JSON value
pub fn content_from_value(value: serde_json::Value) -> AdminResult<ContentData> {
    if !value.is_object() {
        return Err(AdminError::InvalidContentFormat(
            "top-level value must be an object".to_string(),
        ));
    }
    let file: ContentFile = serde_json::from_value(value)?;
    Ok(file.data)
}

// ============================================================================
// Backups
// ============================================================================

/// Backup file name for a given day: `admin-backup-YYYY-MM-DD.json`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!(
        "{}{}.{}",
        BACKUP_PREFIX,
        date.format("%Y-%m-%d"),
        BACKUP_EXTENSION
    )
}

/// Backup file name for today (UTC)
pub fn todays_backup_file_name() -> String {
    backup_file_name(Utc::now().date_naive())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Article, Product};
    use pretty_assertions::assert_eq;
    use solar_core::ProductCategory;

    fn sample() -> ContentData {
        ContentData::new(
            vec![Product::new("p1", "a", ProductCategory::Panels, "X", "لوح", "Panel")],
            vec![Article::pillar("guide", "دليل", "Guide")],
            Vec::new(),
        )
    }

    #[test]
    fn test_string_round_trip() {
        let data = sample();
        let json = content_to_string(&data).unwrap();
        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"version\": 1"));

        let loaded = content_from_str(&json).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_bare_collections_accepted() {
        let loaded = content_from_str(r#"{"products": [], "articles": []}"#).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(content_from_str("[1, 2]").is_err());
        let err = content_from_value(serde_json::json!(42)).unwrap_err();
        assert!(matches!(err, AdminError::InvalidContentFormat(_)));
    }

    #[test]
    fn test_falsy_collections_read_as_empty() {
        let loaded =
            content_from_str(r#"{"products": null, "articles": false, "projects": ""}"#).unwrap();
        assert!(loaded.is_empty());

        let err = content_from_str(r#"{"products": "oops"}"#).unwrap_err();
        assert!(err.to_string().contains("expected a list, found oops"));
    }

    #[test]
    fn test_numeric_ids_read_as_text() {
        let loaded = content_from_str(
            r#"{"projects": [{"id": 7, "slug": "villa", "type": "residential"}],
                "products": [{"id": 12.0, "slug": 3, "category": "panels"}]}"#,
        )
        .unwrap();
        assert_eq!(loaded.projects[0].id, "7");
        assert_eq!(loaded.products[0].id, "12");
        assert_eq!(loaded.products[0].slug, "3");

        assert!(content_from_str(r#"{"projects": [{"id": [1]}]}"#).is_err());
    }

    #[test]
    fn test_backup_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(backup_file_name(date), "admin-backup-2024-03-07.json");
        assert!(todays_backup_file_name().starts_with(BACKUP_PREFIX));
    }
}
