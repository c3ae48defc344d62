//! Journal aggregate root

use crate::domain::JournalColor;
use uuid::Uuid;

/// A named, color-tagged journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    pub id: String,
    pub title: String,
    pub color: JournalColor,
}

impl Journal {
    /// Create a journal with a freshly generated id
    pub fn new(title: impl Into<String>, color: JournalColor) -> Self {
        Journal {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            color,
        }
    }

    /// Check whether a user-supplied reference names this journal
    pub fn matches_title(&self, reference: &str) -> bool {
        self.title.trim().eq_ignore_ascii_case(reference.trim())
    }
}
