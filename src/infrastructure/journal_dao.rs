//! Journal table access

use crate::domain::{Journal, JournalColor};
use crate::error::Result;
use crate::infrastructure::database::{Database, Table};
use crate::infrastructure::live::LiveQuery;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;
use tracing::debug;

/// Queries and writes over the `journal` table
#[derive(Clone)]
pub struct JournalDao {
    db: Arc<Database>,
}

impl JournalDao {
    pub fn new(db: Arc<Database>) -> Self {
        JournalDao { db }
    }

    /// All journals in creation order
    pub fn all(&self) -> Result<Vec<Journal>> {
        select_all(&self.db)
    }

    /// All journals, kept current as the table changes
    pub fn live_all(&self) -> LiveQuery<Vec<Journal>> {
        LiveQuery::new(self.db.clone(), Table::Journal, select_all)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Journal>> {
        self.db.with_connection(|conn| {
            conn.query_row(
                "SELECT id, title, color FROM journal WHERE id = ?1",
                [id],
                journal_from_row,
            )
            .optional()
        })
    }

    /// Insert a new journal; fails if the id is taken
    pub fn insert(&self, journal: &Journal) -> Result<()> {
        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO journal (id, title, color) VALUES (?1, ?2, ?3)",
                params![journal.id, journal.title, journal.color.argb()],
            )
        })?;
        debug!(id = %journal.id, "journal inserted");
        self.db.notify(Table::Journal);
        Ok(())
    }

    /// Update title and color of an existing journal; unknown ids are ignored
    pub fn update(&self, journal: &Journal) -> Result<()> {
        let updated = self.db.with_connection(|conn| {
            conn.execute(
                "UPDATE journal SET title = ?2, color = ?3 WHERE id = ?1",
                params![journal.id, journal.title, journal.color.argb()],
            )
        })?;
        debug!(id = %journal.id, updated, "journal updated");
        self.db.notify(Table::Journal);
        Ok(())
    }

    /// Delete a journal together with its entries, returning how many entries went with it
    pub fn delete(&self, journal: &Journal) -> Result<usize> {
        let removed_entries = self.db.with_transaction(|tx| {
            let removed = tx.execute(
                "DELETE FROM journal_entry WHERE journal_id = ?1",
                [&journal.id],
            )?;
            tx.execute("DELETE FROM journal WHERE id = ?1", [&journal.id])?;
            Ok(removed)
        })?;
        debug!(id = %journal.id, removed_entries, "journal deleted");
        self.db.notify(Table::Journal);
        if removed_entries > 0 {
            self.db.notify(Table::Entry);
        }
        Ok(removed_entries)
    }
}

fn select_all(db: &Database) -> Result<Vec<Journal>> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare("SELECT id, title, color FROM journal ORDER BY rowid")?;
        let journals = stmt
            .query_map([], journal_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(journals)
    })
}

fn journal_from_row(row: &Row<'_>) -> rusqlite::Result<Journal> {
    Ok(Journal {
        id: row.get(0)?,
        title: row.get(1)?,
        color: JournalColor(row.get(2)?),
    })
}
