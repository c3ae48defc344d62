//! Daily journal entry

use chrono::NaiveDate;
use uuid::Uuid;

/// Storage format of entry dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's text and photos within a journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    /// Placeholder, never shown
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub journal_id: String,
    /// Opaque picker references, kept in the order they were attached
    pub image_uris: Vec<String>,
}

impl Entry {
    /// Create a new entry with a freshly generated id
    pub fn new(
        journal_id: impl Into<String>,
        date: NaiveDate,
        content: impl Into<String>,
        image_uris: Vec<String>,
    ) -> Self {
        Entry {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            content: content.into(),
            date,
            journal_id: journal_id.into(),
            image_uris,
        }
    }

    /// Copy of this entry with new content and images; id, date and journal stay
    pub fn with_content(&self, content: impl Into<String>, image_uris: Vec<String>) -> Self {
        Entry {
            content: content.into(),
            image_uris,
            ..self.clone()
        }
    }

    /// Date in storage format (YYYY-MM-DD)
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }
}

/// Format a date the way entries are keyed in storage
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Pending edits worth persisting: anything but blank text without photos
pub fn has_content(content: &str, image_uris: &[String]) -> bool {
    !content.trim().is_empty() || !image_uris.is_empty()
}
