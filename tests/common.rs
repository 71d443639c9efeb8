#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rfaithlog::db::pool::{FileStore, StoreProvider};
use rfaithlog::utils::clock::FixedClock;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfl() -> Command {
    cargo_bin_cmd!("rfaithlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfaithlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfaithlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh file-backed store with every table created.
pub fn fresh_store(name: &str) -> FileStore {
    let store = FileStore::new(setup_test_db(name));
    store.ensure_schema().expect("ensure schema");
    store
}

pub fn clock(ts: &str) -> FixedClock {
    FixedClock::at(ts).expect("valid fixed timestamp")
}

/// Row count of a table, read with a raw connection.
pub fn count_rows(store: &FileStore, table: &str) -> i64 {
    let conn = store.acquire().expect("open db");
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .expect("count rows")
}

/// Initialize a DB through the CLI in test mode (no config file written).
pub fn init_db(db_path: &str) {
    rfl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
