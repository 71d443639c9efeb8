use crate::core::limit_param;
use crate::db::log::audit;
use crate::db::pool::StoreProvider;
use crate::errors::AppResult;
use crate::models::RosaryPrayer;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::date::{self, DATE_FORMAT};
use crate::utils::formatting::non_empty;
use rusqlite::{OptionalExtension, Row, params};

const SELECT_PRAYER: &str = "SELECT id, prayer_date, mysteries, notes, created_at
     FROM rosary_prayers";

/// Rosary prayer log.
pub struct RosaryLog<P, C = SystemClock> {
    store: P,
    clock: C,
}

impl<P: StoreProvider> RosaryLog<P> {
    pub fn with_system_clock(store: P) -> Self {
        Self::new(store, SystemClock)
    }
}

impl<P: StoreProvider, C: Clock> RosaryLog<P, C> {
    pub fn new(store: P, clock: C) -> Self {
        Self { store, clock }
    }

    /// Log a session on `prayer_date` (today when omitted).
    /// A malformed date is rejected before the store is opened.
    pub fn log(
        &self,
        prayer_date: Option<&str>,
        mysteries: Option<&str>,
        notes: Option<&str>,
    ) -> AppResult<i64> {
        let prayer_date = match date::validate_optional(prayer_date)? {
            Some(d) => d,
            None => self.clock.today().format(DATE_FORMAT).to_string(),
        };

        let conn = self.store.acquire()?;
        conn.execute(
            "INSERT INTO rosary_prayers (prayer_date, mysteries, notes, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![prayer_date, mysteries, notes, self.clock.timestamp()],
        )?;
        let id = conn.last_insert_rowid();

        audit(
            &conn,
            "add",
            "rosary",
            &format!("Prayer #{id} on {prayer_date}"),
        );

        Ok(id)
    }

    /// Newest prayer date first; same-day entries most recently logged first.
    pub fn history(&self, limit: Option<usize>) -> AppResult<Vec<RosaryPrayer>> {
        let conn = self.store.acquire()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_PRAYER} ORDER BY prayer_date DESC, created_at DESC, id DESC LIMIT ?1"
        ))?;

        let rows = stmt.query_map([limit_param(limit)], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<RosaryPrayer>> {
        let conn = self.store.acquire()?;
        let prayer = conn
            .query_row(&format!("{SELECT_PRAYER} WHERE id = ?1"), [id], map_row)
            .optional()?;
        Ok(prayer)
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<RosaryPrayer> {
    Ok(RosaryPrayer {
        id: row.get("id")?,
        prayer_date: row.get("prayer_date")?,
        mysteries: row.get("mysteries")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

/// `[id] date[ - Mysteries: M][ - Notes: N]`
pub fn format_prayer(prayer: &RosaryPrayer) -> String {
    let date = date::parse_date(&prayer.prayer_date)
        .map(date::format_date)
        .unwrap_or_else(|| prayer.prayer_date.clone());

    let mut line = format!("[{}] {}", prayer.id, date);
    if let Some(m) = non_empty(prayer.mysteries.as_deref()) {
        line.push_str(&format!(" - Mysteries: {m}"));
    }
    if let Some(n) = non_empty(prayer.notes.as_deref()) {
        line.push_str(&format!(" - Notes: {n}"));
    }
    line
}
