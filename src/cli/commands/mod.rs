pub mod bible;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod rosary;
pub mod sins;

use crate::config::Config;
use crate::db::pool::{FileStore, StoreProvider};
use crate::errors::AppResult;

/// Open the configured database and make sure every table exists.
pub(crate) fn open_store(cfg: &Config) -> AppResult<FileStore> {
    let store = FileStore::new(cfg.database_path());
    store.ensure_schema()?;
    Ok(store)
}

/// Explicit `--limit` wins over the configured default.
pub(crate) fn effective_limit(cli_limit: Option<usize>, cfg: &Config) -> Option<usize> {
    cli_limit.or(cfg.default_limit)
}
