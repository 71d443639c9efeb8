use crate::core::{limit_param, require_text};
use crate::db::log::audit;
use crate::db::pool::StoreProvider;
use crate::errors::AppResult;
use crate::models::{ConfessOutcome, SinEntry};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::date::{self, DATE_FORMAT};
use crate::utils::formatting::non_empty;
use rusqlite::{OptionalExtension, Row, params};

const SELECT_SIN: &str = "SELECT id, sin_description, occurrence_date, confessed, confession_date, notes, created_at
     FROM sins_confession_log";

/// Which entries [`SinLog::list`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinFilter {
    #[default]
    All,
    Confessed,
    Unconfessed,
}

impl SinFilter {
    /// `show_all` wins over `show_confessed`.
    pub fn from_flags(show_all: bool, show_confessed: bool) -> Self {
        match (show_all, show_confessed) {
            (true, _) => SinFilter::All,
            (false, true) => SinFilter::Confessed,
            (false, false) => SinFilter::Unconfessed,
        }
    }
}

/// Sin log with a one-way Unconfessed → Confessed transition.
pub struct SinLog<P, C = SystemClock> {
    store: P,
    clock: C,
}

impl<P: StoreProvider> SinLog<P> {
    pub fn with_system_clock(store: P) -> Self {
        Self::new(store, SystemClock)
    }
}

impl<P: StoreProvider, C: Clock> SinLog<P, C> {
    pub fn new(store: P, clock: C) -> Self {
        Self { store, clock }
    }

    /// New entries always start unconfessed.
    pub fn add(
        &self,
        description: &str,
        occurrence_date: Option<&str>,
        notes: Option<&str>,
    ) -> AppResult<i64> {
        require_text("Sin description", description)?;
        let occurrence_date = date::validate_optional(occurrence_date)?;

        let conn = self.store.acquire()?;
        conn.execute(
            "INSERT INTO sins_confession_log (sin_description, occurrence_date, confessed, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                description,
                occurrence_date,
                false,
                notes,
                self.clock.timestamp()
            ],
        )?;
        let id = conn.last_insert_rowid();

        audit(&conn, "add", "sins", &format!("Sin entry #{id} logged"));

        Ok(id)
    }

    /// Confess entry `id` on `confession_date` (today when omitted).
    ///
    /// Only an unconfessed row is updated; a confessed row keeps its
    /// original date and yields [`ConfessOutcome::AlreadyConfessed`].
    pub fn mark_confessed(
        &self,
        id: i64,
        confession_date: Option<&str>,
    ) -> AppResult<ConfessOutcome> {
        let confession_date = match date::validate_optional(confession_date)? {
            Some(d) => d,
            None => self.clock.today().format(DATE_FORMAT).to_string(),
        };

        let conn = self.store.acquire()?;
        let changed = conn.execute(
            "UPDATE sins_confession_log
             SET confessed = ?1, confession_date = ?2
             WHERE id = ?3 AND confessed = ?4",
            params![true, confession_date, id, false],
        )?;

        if changed > 0 {
            audit(
                &conn,
                "confess",
                "sins",
                &format!("Sin entry #{id} confessed on {confession_date}"),
            );
            return Ok(ConfessOutcome::Confessed {
                date: confession_date,
            });
        }

        let existing: Option<Option<String>> = conn
            .query_row(
                "SELECT confession_date FROM sins_confession_log WHERE id = ?1",
                [id],
                |row| row.get("confession_date"),
            )
            .optional()?;

        Ok(match existing {
            Some(on) => ConfessOutcome::AlreadyConfessed { on },
            None => ConfessOutcome::NotFound,
        })
    }

    /// Entries matching `filter`, newest logged first.
    pub fn list(&self, filter: SinFilter, limit: Option<usize>) -> AppResult<Vec<SinEntry>> {
        let (show_all, confessed) = match filter {
            SinFilter::All => (true, false),
            SinFilter::Confessed => (false, true),
            SinFilter::Unconfessed => (false, false),
        };

        let conn = self.store.acquire()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_SIN}
             WHERE (?1 OR confessed = ?2)
             ORDER BY created_at DESC, id DESC
             LIMIT ?3"
        ))?;

        let rows = stmt.query_map(params![show_all, confessed, limit_param(limit)], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Flag-based variant of [`SinLog::list`].
    pub fn list_by_flags(
        &self,
        show_all: bool,
        show_confessed: bool,
        limit: Option<usize>,
    ) -> AppResult<Vec<SinEntry>> {
        self.list(SinFilter::from_flags(show_all, show_confessed), limit)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<SinEntry>> {
        let conn = self.store.acquire()?;
        let entry = conn
            .query_row(&format!("{SELECT_SIN} WHERE id = ?1"), [id], map_row)
            .optional()?;
        Ok(entry)
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<SinEntry> {
    Ok(SinEntry {
        id: row.get("id")?,
        sin_description: row.get("sin_description")?,
        occurrence_date: row.get("occurrence_date")?,
        confessed: row.get("confessed")?,
        confession_date: row.get("confession_date")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

/// `[id] Status - "description"[ (Occurred: D)][ (Confessed on: D)][ - Notes: N] (Logged: D)`
pub fn format_sin(entry: &SinEntry) -> String {
    let mut line = format!(
        "[{}] {} - \"{}\"",
        entry.id,
        entry.status_label(),
        entry.sin_description
    );

    if let Some(d) = non_empty(entry.occurrence_date.as_deref()) {
        line.push_str(&format!(" (Occurred: {d})"));
    }
    if entry.confessed
        && let Some(d) = non_empty(entry.confession_date.as_deref())
    {
        line.push_str(&format!(" (Confessed on: {d})"));
    }
    if let Some(n) = non_empty(entry.notes.as_deref()) {
        line.push_str(&format!(" - Notes: {n}"));
    }

    let logged: String = entry.created_at.chars().take(10).collect();
    line.push_str(&format!(" (Logged: {logged})"));
    line
}
