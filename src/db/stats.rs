use crate::db::schema::{RECORD_TABLES, SINS_CONFESSION_LOG_TABLE};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

/// Row counts for one record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStats {
    pub table: &'static str,
    pub rows: i64,
}

/// Count the rows of every record table.
pub fn table_counts(conn: &Connection) -> AppResult<Vec<TableStats>> {
    let mut out = Vec::with_capacity(RECORD_TABLES.len());
    for table in RECORD_TABLES {
        // Table names come from the schema constants, never from user input.
        let rows: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        out.push(TableStats { table, rows });
    }
    Ok(out)
}

pub fn unconfessed_count(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row(
        &format!("SELECT COUNT(*) FROM {SINS_CONFESSION_LOG_TABLE} WHERE confessed = ?1"),
        [false],
        |row| row.get(0),
    )?;
    Ok(n)
}

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROWS PER TABLE
    //
    for t in table_counts(conn)? {
        println!("{}• {}:{} {}{}{}", CYAN, t.table, RESET, GREEN, t.rows, RESET);
    }

    //
    // 3) PENDING CONFESSIONS
    //
    println!(
        "{}• Not yet confessed:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        unconfessed_count(conn)?,
        RESET
    );

    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check` and return its report lines ("ok" when clean).
pub fn integrity_check(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA integrity_check")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn vacuum(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("VACUUM")?;
    Ok(())
}
