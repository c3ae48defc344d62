//! SQLite store handle and schema management

use crate::error::{DaybookError, Result};
use rusqlite::{Connection, Transaction};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Current schema version. A stored version that differs is migrated destructively.
pub const SCHEMA_VERSION: i32 = 3;

/// Tables that live queries can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Journal,
    Entry,
}

/// Shared handle to the journal store.
///
/// Writes go through a single locked connection. Every successful write bumps
/// the version counter of the tables it touched so live queries re-evaluate.
pub struct Database {
    conn: Mutex<Connection>,
    journal_changes: watch::Sender<u64>,
    entry_changes: watch::Sender<u64>,
}

impl Database {
    /// Open (or create) a database file at the specified path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "opening database");
        Self::from_connection(Connection::open(path)?)
    }

    /// Create a new in-memory database, used by tests
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrate(&conn)?;
        let (journal_changes, _) = watch::channel(0);
        let (entry_changes, _) = watch::channel(0);
        Ok(Database {
            conn: Mutex::new(conn),
            journal_changes,
            entry_changes,
        })
    }

    /// Flush and close the underlying connection
    pub fn close(self) -> Result<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| DaybookError::Store("connection lock poisoned".to_string()))?;
        conn.close().map_err(|(_, e)| DaybookError::Database(e))?;
        debug!("database closed");
        Ok(())
    }

    /// Run a read or single-statement write against the connection
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.lock()?;
        Ok(f(&conn)?)
    }

    /// Run several statements atomically
    pub fn with_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    /// Signal that a table's contents changed
    pub fn notify(&self, table: Table) {
        self.changes(table).send_modify(|version| *version += 1);
    }

    /// Receiver that observes every change to a table
    pub fn subscribe(&self, table: Table) -> watch::Receiver<u64> {
        self.changes(table).subscribe()
    }

    fn changes(&self, table: Table) -> &watch::Sender<u64> {
        match table {
            Table::Journal => &self.journal_changes,
            Table::Entry => &self.entry_changes,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DaybookError::Store("connection lock poisoned".to_string()))
    }
}

fn schema_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Bring the schema to SCHEMA_VERSION, dropping data from any other version
fn migrate(conn: &Connection) -> Result<()> {
    let version = schema_version(conn)?;
    if version == SCHEMA_VERSION {
        return Ok(());
    }

    if version != 0 {
        warn!(
            from = version,
            to = SCHEMA_VERSION,
            "schema version changed, discarding stored journals"
        );
        conn.execute_batch(
            "DROP INDEX IF EXISTS idx_journal_entry_day;
             DROP TABLE IF EXISTS journal_entry;
             DROP TABLE IF EXISTS journal;",
        )?;
    }

    create_schema(conn)?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
}

fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS journal (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            color INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS journal_entry (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            date TEXT NOT NULL,
            journal_id TEXT NOT NULL,
            image_uris TEXT NOT NULL DEFAULT '[]'
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_journal_entry_day
            ON journal_entry (journal_id, date);",
    )
}
