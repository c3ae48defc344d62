//! Observable queries that follow table changes
//!
//! A [`LiveQuery`] re-runs its query whenever the observed table changes or,
//! for keyed queries, whenever the key channel publishes a new key. It always
//! holds the latest result: [`LiveQuery::get`] replays it (re-evaluating first
//! if something changed since), and [`LiveQuery::changed`] waits for the next
//! change and returns the fresh result.

use crate::error::{DaybookError, Result};
use crate::infrastructure::database::{Database, Table};
use std::sync::Arc;
use tokio::sync::watch;

type Query<K, T> = Box<dyn Fn(&Database, &K) -> Result<T> + Send>;

enum KeySource<K> {
    Fixed(K),
    Watched(watch::Receiver<K>),
}

/// Query result kept current against a table and an optional key channel
pub struct LiveQuery<T, K = ()> {
    db: Arc<Database>,
    table: watch::Receiver<u64>,
    key: KeySource<K>,
    query: Query<K, T>,
    latest: Option<T>,
}

impl<T> LiveQuery<T, ()> {
    /// Observe `table`, evaluating `query` against it
    pub fn new<F>(db: Arc<Database>, table: Table, query: F) -> Self
    where
        F: Fn(&Database) -> Result<T> + Send + 'static,
    {
        let table = db.subscribe(table);
        LiveQuery {
            db,
            table,
            key: KeySource::Fixed(()),
            query: Box::new(move |db: &Database, _: &()| query(db)),
            latest: None,
        }
    }
}

impl<T, K: Clone> LiveQuery<T, K> {
    /// Observe `table` and a key channel; the query receives the latest key
    pub fn keyed<F>(db: Arc<Database>, table: Table, key: watch::Receiver<K>, query: F) -> Self
    where
        F: Fn(&Database, &K) -> Result<T> + Send + 'static,
    {
        let table = db.subscribe(table);
        LiveQuery {
            db,
            table,
            key: KeySource::Watched(key),
            query: Box::new(query),
            latest: None,
        }
    }

    /// Latest result, re-evaluated first if the table or key changed
    pub fn get(&mut self) -> Result<&T> {
        if self.latest.is_none() || self.is_stale() {
            self.refresh()?;
        }
        self.latest()
    }

    /// Wait for the table or key to change, then return the fresh result
    pub async fn changed(&mut self) -> Result<&T> {
        match &mut self.key {
            KeySource::Fixed(_) => self.table.changed().await.map_err(|_| closed())?,
            KeySource::Watched(key) => {
                tokio::select! {
                    changed = self.table.changed() => changed.map_err(|_| closed())?,
                    changed = key.changed() => changed.map_err(|_| closed())?,
                }
            }
        }
        self.refresh()?;
        self.latest()
    }

    fn is_stale(&self) -> bool {
        let table_changed = self.table.has_changed().unwrap_or(false);
        let key_changed = match &self.key {
            KeySource::Fixed(_) => false,
            KeySource::Watched(key) => key.has_changed().unwrap_or(false),
        };
        table_changed || key_changed
    }

    fn refresh(&mut self) -> Result<()> {
        self.table.borrow_and_update();
        let key = match &mut self.key {
            KeySource::Fixed(key) => key.clone(),
            KeySource::Watched(key) => key.borrow_and_update().clone(),
        };
        self.latest = Some((self.query)(&self.db, &key)?);
        Ok(())
    }

    fn latest(&self) -> Result<&T> {
        self.latest
            .as_ref()
            .ok_or_else(|| DaybookError::Store("live query has no result".to_string()))
    }
}

fn closed() -> DaybookError {
    DaybookError::Store("change feed closed".to_string())
}
