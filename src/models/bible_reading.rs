use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibleReading {
    pub id: i64,
    pub book: String,
    pub chapter: i64,
    pub start_verse: Option<i64>,
    pub end_verse: Option<i64>,
    pub reading_date: String, // ⇔ bible_reading.reading_date (TEXT "YYYY-MM-DD HH:MM:SS")
    pub notes: Option<String>,
}

impl BibleReading {
    /// Verse suffix appended after the chapter number.
    ///
    /// `:3` for 3..=3, `:1-31` for a range, `:16` for an open start,
    /// ` (verse 7)` when only the end verse is known.
    pub fn verse_suffix(&self) -> String {
        match (self.start_verse, self.end_verse) {
            (Some(s), Some(e)) if s == e => format!(":{s}"),
            (Some(s), Some(e)) => format!(":{s}-{e}"),
            (Some(s), None) => format!(":{s}"),
            (None, Some(e)) => format!(" (verse {e})"),
            (None, None) => String::new(),
        }
    }

    /// `Book Chapter[:verses]`
    pub fn reference(&self) -> String {
        format!("{} {}{}", self.book, self.chapter, self.verse_suffix())
    }
}
