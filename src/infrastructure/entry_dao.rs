//! Entry table access

use crate::domain::entry::{date_key, DATE_FORMAT};
use crate::domain::{image_list, Entry};
use crate::error::Result;
use crate::infrastructure::database::{Database, Table};
use crate::infrastructure::live::LiveQuery;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;
use tracing::debug;

const COLUMNS: &str = "id, title, content, date, journal_id, image_uris";

/// Queries and writes over the `journal_entry` table
#[derive(Clone)]
pub struct EntryDao {
    db: Arc<Database>,
}

impl EntryDao {
    pub fn new(db: Arc<Database>) -> Self {
        EntryDao { db }
    }

    pub fn all(&self) -> Result<Vec<Entry>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM journal_entry ORDER BY rowid",
                COLUMNS
            ))?;
            let entries = stmt
                .query_map([], entry_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Entry>> {
        self.db.with_connection(|conn| {
            conn.query_row(
                &format!("SELECT {} FROM journal_entry WHERE id = ?1", COLUMNS),
                [id],
                entry_from_row,
            )
            .optional()
        })
    }

    /// The entry a journal has for a day, if any
    pub fn get_by_date(&self, journal_id: &str, date: NaiveDate) -> Result<Option<Entry>> {
        select_by_date(&self.db, journal_id, date)
    }

    /// The entry for a day, kept current as the table changes
    pub fn live_by_date(&self, journal_id: &str, date: NaiveDate) -> LiveQuery<Option<Entry>> {
        let journal_id = journal_id.to_string();
        LiveQuery::new(self.db.clone(), Table::Entry, move |db| {
            select_by_date(db, &journal_id, date)
        })
    }

    /// Days on which a journal has an entry, oldest first
    pub fn dates_with_entries(&self, journal_id: &str) -> Result<Vec<NaiveDate>> {
        select_dates(&self.db, journal_id)
    }

    pub fn live_dates_with_entries(&self, journal_id: &str) -> LiveQuery<Vec<NaiveDate>> {
        let journal_id = journal_id.to_string();
        LiveQuery::new(self.db.clone(), Table::Entry, move |db| {
            select_dates(db, &journal_id)
        })
    }

    /// A journal's entries, newest first
    pub fn entries_for_journal(&self, journal_id: &str) -> Result<Vec<Entry>> {
        select_for_journal(&self.db, journal_id)
    }

    pub fn live_entries_for_journal(&self, journal_id: &str) -> LiveQuery<Vec<Entry>> {
        let journal_id = journal_id.to_string();
        LiveQuery::new(self.db.clone(), Table::Entry, move |db| {
            select_for_journal(db, &journal_id)
        })
    }

    /// Insert an entry, replacing any row with the same id or the same (journal, day)
    pub fn insert(&self, entry: &Entry) -> Result<()> {
        self.db.with_connection(|conn| {
            conn.execute(
                &format!(
                    "INSERT OR REPLACE INTO journal_entry ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    COLUMNS
                ),
                params![
                    entry.id,
                    entry.title,
                    entry.content,
                    entry.date_key(),
                    entry.journal_id,
                    image_list::encode(&entry.image_uris),
                ],
            )
        })?;
        debug!(id = %entry.id, date = %entry.date, "entry inserted");
        self.db.notify(Table::Entry);
        Ok(())
    }

    /// Update an existing entry by id; unknown ids are ignored
    pub fn update(&self, entry: &Entry) -> Result<()> {
        let updated = self.db.with_connection(|conn| {
            conn.execute(
                "UPDATE journal_entry
                 SET title = ?2, content = ?3, date = ?4, journal_id = ?5, image_uris = ?6
                 WHERE id = ?1",
                params![
                    entry.id,
                    entry.title,
                    entry.content,
                    entry.date_key(),
                    entry.journal_id,
                    image_list::encode(&entry.image_uris),
                ],
            )
        })?;
        debug!(id = %entry.id, updated, "entry updated");
        self.db.notify(Table::Entry);
        Ok(())
    }

    pub fn delete(&self, entry: &Entry) -> Result<()> {
        let deleted = self.db.with_connection(|conn| {
            conn.execute("DELETE FROM journal_entry WHERE id = ?1", [&entry.id])
        })?;
        debug!(id = %entry.id, deleted, "entry deleted");
        self.db.notify(Table::Entry);
        Ok(())
    }
}

/// Point lookup shared by the DAO and the selection stream
pub(crate) fn select_by_date(
    db: &Database,
    journal_id: &str,
    date: NaiveDate,
) -> Result<Option<Entry>> {
    db.with_connection(|conn| {
        conn.query_row(
            &format!(
                "SELECT {} FROM journal_entry WHERE journal_id = ?1 AND date = ?2 LIMIT 1",
                COLUMNS
            ),
            params![journal_id, date_key(date)],
            entry_from_row,
        )
        .optional()
    })
}

fn select_dates(db: &Database, journal_id: &str) -> Result<Vec<NaiveDate>> {
    db.with_connection(|conn| {
        let mut stmt =
            conn.prepare("SELECT date FROM journal_entry WHERE journal_id = ?1 ORDER BY date")?;
        let dates = stmt
            .query_map([journal_id], |row| date_from_row(row, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(dates)
    })
}

fn select_for_journal(db: &Database, journal_id: &str) -> Result<Vec<Entry>> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM journal_entry WHERE journal_id = ?1 ORDER BY date DESC",
            COLUMNS
        ))?;
        let entries = stmt
            .query_map([journal_id], entry_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    })
}

fn date_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let image_uris: String = row.get(5)?;
    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        date: date_from_row(row, 3)?,
        journal_id: row.get(4)?,
        image_uris: image_list::decode(&image_uris),
    })
}
