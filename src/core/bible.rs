use crate::core::{limit_param, require_text};
use crate::db::log::audit;
use crate::db::pool::StoreProvider;
use crate::errors::AppResult;
use crate::models::BibleReading;
use crate::utils::clock::{Clock, SystemClock, TIMESTAMP_FORMAT};
use crate::utils::formatting::non_empty;
use chrono::NaiveDateTime;
use rusqlite::{OptionalExtension, Row, params};

const SELECT_READING: &str = "SELECT id, book, chapter, start_verse, end_verse, reading_date, notes
     FROM bible_reading";

/// Bible reading log. Entries are immutable once written.
pub struct BibleLog<P, C = SystemClock> {
    store: P,
    clock: C,
}

impl<P: StoreProvider> BibleLog<P> {
    pub fn with_system_clock(store: P) -> Self {
        Self::new(store, SystemClock)
    }
}

impl<P: StoreProvider, C: Clock> BibleLog<P, C> {
    pub fn new(store: P, clock: C) -> Self {
        Self { store, clock }
    }

    /// Record a reading stamped with the current instant. Returns the new id.
    pub fn add(
        &self,
        book: &str,
        chapter: i64,
        start_verse: Option<i64>,
        end_verse: Option<i64>,
        notes: Option<&str>,
    ) -> AppResult<i64> {
        require_text("Book", book)?;

        let reading_date = self.clock.timestamp();
        let conn = self.store.acquire()?;

        conn.execute(
            "INSERT INTO bible_reading (book, chapter, start_verse, end_verse, reading_date, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                book,
                chapter,
                start_verse,
                end_verse,
                reading_date,
                notes,
                reading_date
            ],
        )?;
        let id = conn.last_insert_rowid();

        audit(
            &conn,
            "add",
            "bible",
            &format!("Reading #{id}: {book} {chapter}"),
        );

        Ok(id)
    }

    /// All readings, most recent first. `limit` keeps the head of the sequence.
    pub fn list(&self, limit: Option<usize>) -> AppResult<Vec<BibleReading>> {
        let conn = self.store.acquire()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_READING} ORDER BY reading_date DESC, id DESC LIMIT ?1"
        ))?;

        let rows = stmt.query_map([limit_param(limit)], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<BibleReading>> {
        let conn = self.store.acquire()?;
        let reading = conn
            .query_row(&format!("{SELECT_READING} WHERE id = ?1"), [id], map_row)
            .optional()?;
        Ok(reading)
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<BibleReading> {
    Ok(BibleReading {
        id: row.get("id")?,
        book: row.get("book")?,
        chapter: row.get("chapter")?,
        start_verse: row.get("start_verse")?,
        end_verse: row.get("end_verse")?,
        reading_date: row.get("reading_date")?,
        notes: row.get("notes")?,
    })
}

/// `[id] YYYY-MM-DD hh:mm AM - Book Chapter[:verses] (Notes: ...)`
///
/// An unparsable `reading_date` is shown as stored.
pub fn format_reading(reading: &BibleReading) -> String {
    let date = NaiveDateTime::parse_from_str(&reading.reading_date, TIMESTAMP_FORMAT)
        .map(|dt| dt.format("%Y-%m-%d %I:%M %p").to_string())
        .unwrap_or_else(|_| reading.reading_date.clone());

    let notes = non_empty(reading.notes.as_deref())
        .map(|n| format!(" (Notes: {n})"))
        .unwrap_or_default();

    format!("[{}] {} - {}{}", reading.id, date, reading.reference(), notes)
}
