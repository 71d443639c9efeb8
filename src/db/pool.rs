//! Store-handle providers.
//!
//! Every tracker operation acquires its own connection, runs, and drops it.
//! Trackers receive a provider instead of opening the database themselves,
//! so tests can hand them a temporary file or a failing double.

use crate::db::initialize::apply_schema;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::PathBuf;

pub trait StoreProvider {
    /// Open a live handle. Columns are addressable by name via `row.get("col")`.
    fn acquire(&self) -> AppResult<Connection>;

    /// Apply every schema statement. Safe to call on an initialized store.
    fn ensure_schema(&self) -> AppResult<()> {
        let conn = self.acquire()?;
        apply_schema(&conn)
    }
}

impl<P: StoreProvider + ?Sized> StoreProvider for &P {
    fn acquire(&self) -> AppResult<Connection> {
        (**self).acquire()
    }
}

/// SQLite database file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StoreProvider for FileStore {
    fn acquire(&self) -> AppResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }
}
