use crate::db::schema::ALL_TABLE_SCHEMAS;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Create every table and index that is missing.
pub fn apply_schema(conn: &Connection) -> AppResult<()> {
    for statement in ALL_TABLE_SCHEMAS {
        conn.execute_batch(statement)?;
    }
    Ok(())
}
