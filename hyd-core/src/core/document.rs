//! Persisted units: archived documents and drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An exported or saved markdown document.
///
/// All semantic fields live inside `content`'s front-matter block; they are
/// not modelled individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub filename: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl Document {
    pub fn new(filename: String, date: DateTime<Utc>, content: String) -> Self {
        Self { id: Uuid::new_v4(), filename, date, content }
    }
}

/// An unfinished entry kept with its individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "bodyText")]
    pub body: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub citation: String,
    pub date: DateTime<Utc>,
}

impl Draft {
    /// Title shown in lists; blank titles read as "Untitled".
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Common identity of items kept in a [`History`](crate::History).
pub trait HistoryItem {
    fn id(&self) -> Uuid;
}

impl HistoryItem for Document {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HistoryItem for Draft {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_json_shape() {
        let doc = Document {
            id: Uuid::nil(),
            filename: "2025-05-10-test-export.md".to_string(),
            date: Utc.with_ymd_and_hms(2025, 5, 10, 8, 30, 0).unwrap(),
            content: "# Exported File".to_string(),
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"filename\":\"2025-05-10-test-export.md\""));
        assert!(json.contains("\"date\":\"2025-05-10T08:30:00Z\""));

        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_draft_body_serializes_as_body_text() {
        let draft = Draft {
            id: Uuid::new_v4(),
            title: "Test Draft".to_string(),
            body: "# Hello World".to_string(),
            link: String::new(),
            citation: String::new(),
            date: Utc::now(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"bodyText\":\"# Hello World\""));
    }

    #[test]
    fn test_draft_missing_optional_fields_default() {
        let json = format!(
            r#"{{"id":"{}","title":"t","bodyText":"b","date":"2025-05-10T00:00:00Z"}}"#,
            Uuid::nil()
        );
        let draft: Draft = serde_json::from_str(&json).unwrap();
        assert!(draft.link.is_empty());
        assert!(draft.citation.is_empty());
    }

    #[test]
    fn test_untitled_draft_display() {
        let draft = Draft {
            id: Uuid::nil(),
            title: "  ".to_string(),
            body: String::new(),
            link: String::new(),
            citation: String::new(),
            date: Utc::now(),
        };
        assert_eq!(draft.display_title(), "Untitled");
    }
}
