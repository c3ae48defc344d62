//! Journal/day selection and the entry it points at
//!
//! [`SelectionViewModel`] tracks which journal and which day the user is on.
//! The entry for that selection is derived: [`SelectionViewModel::current_entry`]
//! returns a [`CurrentEntry`] stream that re-evaluates whenever the selection or
//! the entry table changes. Navigation saves the pending text for the day being
//! left before moving.

use crate::domain::entry::has_content;
use crate::domain::time_ref::shift;
use crate::domain::{Entry, Journal, JournalColor};
use crate::error::{DaybookError, Result};
use crate::infrastructure::database::{Database, Table};
use crate::infrastructure::entry_dao::select_by_date;
use crate::infrastructure::{EntryDao, JournalDao, LiveQuery};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Where the user currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub journal_id: Option<String>,
    pub date: Option<NaiveDate>,
}

/// The entry for the current selection, or `None` when nothing is there
pub type CurrentEntry = LiveQuery<Option<Entry>, Selection>;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct SelectionViewModel {
    db: Arc<Database>,
    journals: JournalDao,
    entries: EntryDao,
    selection: watch::Sender<Selection>,
    today: fn() -> NaiveDate,
}

impl SelectionViewModel {
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_clock(db, local_today)
    }

    /// Build with a custom notion of "today"
    pub fn with_clock(db: Arc<Database>, today: fn() -> NaiveDate) -> Self {
        let (selection, _) = watch::channel(Selection::default());
        SelectionViewModel {
            journals: JournalDao::new(db.clone()),
            entries: EntryDao::new(db.clone()),
            db,
            selection,
            today,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection.borrow().clone()
    }

    pub fn selected_journal_id(&self) -> Option<String> {
        self.selection.borrow().journal_id.clone()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.borrow().date
    }

    /// Observe selection changes
    pub fn subscribe_selection(&self) -> watch::Receiver<Selection> {
        self.selection.subscribe()
    }

    /// Stream of the entry at the current selection
    pub fn current_entry(&self) -> CurrentEntry {
        LiveQuery::keyed(
            self.db.clone(),
            Table::Entry,
            self.selection.subscribe(),
            |db, selection: &Selection| match (&selection.journal_id, selection.date) {
                (Some(journal_id), Some(date)) => select_by_date(db, journal_id, date),
                _ => Ok(None),
            },
        )
    }

    /// The entry at the current selection right now
    pub fn current_entry_value(&self) -> Result<Option<Entry>> {
        let selection = self.selection();
        match (selection.journal_id, selection.date) {
            (Some(journal_id), Some(date)) => self.entries.get_by_date(&journal_id, date),
            _ => Ok(None),
        }
    }

    pub fn journals(&self) -> LiveQuery<Vec<Journal>> {
        self.journals.live_all()
    }

    pub fn entries_for_journal(&self, journal_id: &str) -> LiveQuery<Vec<Entry>> {
        self.entries.live_entries_for_journal(journal_id)
    }

    pub fn dates_with_entries(&self, journal_id: &str) -> LiveQuery<Vec<NaiveDate>> {
        self.entries.live_dates_with_entries(journal_id)
    }

    /// Select a journal and jump to today
    pub fn select_journal(&self, journal_id: &str) {
        let today = (self.today)();
        self.selection.send_replace(Selection {
            journal_id: Some(journal_id.to_string()),
            date: Some(today),
        });
    }

    pub fn select_journal_and_date(&self, journal_id: &str, date: NaiveDate) {
        self.selection.send_replace(Selection {
            journal_id: Some(journal_id.to_string()),
            date: Some(date),
        });
    }

    /// Save pending edits for the current day, then move to `date`.
    ///
    /// The date moves even if the save fails; the save error is still returned.
    pub fn change_date(&self, date: NaiveDate, content: &str, image_uris: &[String]) -> Result<()> {
        let saved = self.save_entry(content, image_uris);
        self.selection
            .send_modify(|selection| selection.date = Some(date));
        saved
    }

    pub fn next_day(&self, content: &str, image_uris: &[String]) -> Result<()> {
        self.shift_day(1, content, image_uris)
    }

    pub fn previous_day(&self, content: &str, image_uris: &[String]) -> Result<()> {
        self.shift_day(-1, content, image_uris)
    }

    /// Save, then move the selected date by `days`. A move past the supported
    /// date range leaves the date where it is.
    fn shift_day(&self, days: i64, content: &str, image_uris: &[String]) -> Result<()> {
        let saved = self.save_entry(content, image_uris);
        if let Some(date) = self.selected_date() {
            let Some(next) = shift(date, days) else {
                saved?;
                return Err(DaybookError::InvalidInput(format!(
                    "no day {:+} from {}",
                    days, date
                )));
            };
            self.selection
                .send_modify(|selection| selection.date = Some(next));
        }
        saved
    }

    /// Upsert the entry at the current selection.
    ///
    /// Nothing is written without a full selection, or for blank content with no images.
    pub fn save_entry(&self, content: &str, image_uris: &[String]) -> Result<()> {
        let Selection {
            journal_id: Some(journal_id),
            date: Some(date),
        } = self.selection()
        else {
            return Ok(());
        };
        if !has_content(content, image_uris) {
            return Ok(());
        }

        let result = match self.entries.get_by_date(&journal_id, date)? {
            Some(existing) => self
                .entries
                .update(&existing.with_content(content, image_uris.to_vec())),
            None => self.entries.insert(&Entry::new(
                journal_id.as_str(),
                date,
                content,
                image_uris.to_vec(),
            )),
        };
        if let Err(e) = &result {
            warn!(journal_id = %journal_id, %date, error = %e, "saving entry failed");
        }
        result
    }

    /// Save new text, keeping the images already attached to the entry
    pub fn save_content(&self, content: &str) -> Result<()> {
        let image_uris = self
            .current_entry_value()?
            .map(|entry| entry.image_uris)
            .unwrap_or_default();
        self.save_entry(content, &image_uris)
    }

    /// Delete the entry at the current selection, if there is one
    pub fn delete_entry(&self) -> Result<()> {
        match self.current_entry_value()? {
            Some(entry) => self.entries.delete(&entry).inspect_err(|e| {
                warn!(id = %entry.id, error = %e, "deleting entry failed");
            }),
            None => {
                debug!("no entry to delete at current selection");
                Ok(())
            }
        }
    }

    pub fn add_journal(&self, title: &str, color: JournalColor) -> Result<Journal> {
        let journal = Journal::new(title, color);
        self.journals.insert(&journal).inspect_err(|e| {
            warn!(title = %journal.title, error = %e, "adding journal failed");
        })?;
        Ok(journal)
    }

    pub fn update_journal(&self, journal: &Journal) -> Result<()> {
        self.journals.update(journal).inspect_err(|e| {
            warn!(id = %journal.id, error = %e, "updating journal failed");
        })
    }

    /// Delete a journal and its entries; returns the number of entries removed
    pub fn delete_journal(&self, journal: &Journal) -> Result<usize> {
        self.journals.delete(journal).inspect_err(|e| {
            warn!(id = %journal.id, error = %e, "deleting journal failed");
        })
    }
}
