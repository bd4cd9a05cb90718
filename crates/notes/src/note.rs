//! A single note

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to notes saved without one
pub const UNTITLED: &str = "Untitled Note";

/// A titled plain-text note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: &str, content: &str) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: normalize_title(title),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content and bump the update time
    pub fn edit(&mut self, title: &str, content: &str) {
        self.title = normalize_title(title);
        self.content = content.to_string();
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// Case-insensitive substring match on title or content.
    /// `query` must already be lower-cased.
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.content.to_lowercase().contains(query)
    }

    /// First line of the content, for list views
    pub fn preview(&self) -> &str {
        self.content.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim()
    }
}

fn new_id() -> String {
    format!("note_{}", uuid::Uuid::new_v4().simple())
}

fn normalize_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title.to_string()
    }
}
