//! One-shot entry use cases: write, show, remove, list dates

use crate::application::journals::JournalService;
use crate::application::view_model::SelectionViewModel;
use crate::domain::{Entry, Journal};
use crate::error::{DaybookError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;

/// How new text combines with an existing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Replace,
    Append,
}

pub struct EntryService<'a> {
    view_model: &'a SelectionViewModel,
    journals: JournalService<'a>,
}

impl<'a> EntryService<'a> {
    pub fn new(view_model: &'a SelectionViewModel, config: &'a Config) -> Self {
        EntryService {
            view_model,
            journals: JournalService::new(view_model, config),
        }
    }

    /// Save text (and optionally images) for a journal's day.
    ///
    /// Without new images the entry keeps the ones it has. Returns the stored
    /// entry, or `None` when there was nothing to save.
    pub fn write(
        &self,
        journal_ref: &str,
        date: NaiveDate,
        content: &str,
        image_uris: &[String],
        mode: WriteMode,
    ) -> Result<Option<Entry>> {
        let journal = self.journals.resolve(journal_ref)?;
        self.view_model.select_journal_and_date(&journal.id, date);

        let existing = self.view_model.current_entry_value()?;
        let content = match (&existing, mode) {
            (Some(entry), WriteMode::Append) if !entry.content.is_empty() => {
                format!("{}\n{}", entry.content, content)
            }
            _ => content.to_string(),
        };

        if image_uris.is_empty() {
            self.view_model.save_content(&content)?;
        } else {
            let mut all_images = existing
                .map(|entry| entry.image_uris)
                .unwrap_or_default();
            all_images.extend(image_uris.iter().cloned());
            self.view_model.save_entry(&content, &all_images)?;
        }

        self.view_model.current_entry_value()
    }

    /// The journal and its entry for a day
    pub fn show(&self, journal_ref: &str, date: NaiveDate) -> Result<(Journal, Entry)> {
        let journal = self.journals.resolve(journal_ref)?;
        self.view_model.select_journal_and_date(&journal.id, date);
        let entry = self
            .view_model
            .current_entry_value()?
            .ok_or_else(|| not_found(&journal, date))?;
        Ok((journal, entry))
    }

    /// Delete a day's entry, returning what was removed
    pub fn remove(&self, journal_ref: &str, date: NaiveDate) -> Result<Entry> {
        let (journal, entry) = self.show(journal_ref, date)?;
        self.view_model.delete_entry()?;
        tracing::debug!(journal = %journal.title, %date, "entry removed");
        Ok(entry)
    }

    /// Days with entries in a journal, oldest first
    pub fn dates(&self, journal_ref: &str) -> Result<(Journal, Vec<NaiveDate>)> {
        let journal = self.journals.resolve(journal_ref)?;
        let dates = self.view_model.dates_with_entries(&journal.id).get()?.clone();
        Ok((journal, dates))
    }
}

fn not_found(journal: &Journal, date: NaiveDate) -> DaybookError {
    DaybookError::EntryNotFound(format!("'{}' on {}", journal.title, date))
}
