//! Error types for daybook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daybook
#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("Not a daybook directory: {0}")]
    NotDaybookDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Journal not found: {0}")]
    JournalNotFound(String),

    #[error("Ambiguous journal reference '{0}' matches {1} journals")]
    AmbiguousJournal(String, usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No entry for {0}")]
    EntryNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaybookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaybookError::NotDaybookDirectory(_) => 2,
            DaybookError::InvalidTimeReference(_) => 3,
            DaybookError::JournalNotFound(_) | DaybookError::AmbiguousJournal(_, _) => 4,
            DaybookError::EntryNotFound(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaybookError::NotDaybookDirectory(path) => {
                format!(
                    "Not a daybook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' in this directory to create a new daybook\n\
                    • Navigate to an existing daybook directory\n\
                    • Set DAYBOOK_ROOT environment variable to your daybook path",
                    path.display()
                )
            }
            DaybookError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    daybook show travel today\n\
                    daybook show travel 2025-01-15",
                    ref_str
                )
            }
            DaybookError::InvalidColor(value) => {
                format!(
                    "Invalid color: '{}'\n\n\
                    Use #RRGGBB, #AARRGGBB or one of: {}",
                    value,
                    crate::domain::color::PALETTE
                        .iter()
                        .map(|(name, _)| *name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            DaybookError::JournalNotFound(reference) => {
                format!(
                    "Journal not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'daybook journal list' to see available journals\n\
                    • Journal titles are matched case-insensitively\n\
                    • Create it with: daybook journal add '{}'",
                    reference, reference
                )
            }
            DaybookError::AmbiguousJournal(reference, count) => {
                format!(
                    "'{}' matches {} journals\n\n\
                    Refer to the journal by its id instead (see 'daybook journal list')",
                    reference, count
                )
            }
            DaybookError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: daybook config editor 'vim'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaybookError
pub type Result<T> = std::result::Result<T, DaybookError>;
