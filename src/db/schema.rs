//! Table layouts for every record type.
//! Single source of truth for column names; every statement is idempotent.

pub const BIBLE_READING_TABLE: &str = "bible_reading";
pub const ROSARY_PRAYERS_TABLE: &str = "rosary_prayers";
pub const SINS_CONFESSION_LOG_TABLE: &str = "sins_confession_log";
pub const LOG_TABLE: &str = "log";

const BIBLE_READING_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS bible_reading (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    book         TEXT NOT NULL CHECK(length(trim(book)) > 0),
    chapter      INTEGER NOT NULL,
    start_verse  INTEGER,
    end_verse    INTEGER,
    reading_date TEXT NOT NULL,
    notes        TEXT,
    created_at   TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_bible_reading_date ON bible_reading(reading_date);
"#;

const ROSARY_PRAYERS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS rosary_prayers (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    prayer_date TEXT NOT NULL,
    mysteries   TEXT,
    notes       TEXT,
    created_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_rosary_prayers_date ON rosary_prayers(prayer_date, created_at);
"#;

const SINS_CONFESSION_LOG_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS sins_confession_log (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    sin_description TEXT NOT NULL CHECK(length(trim(sin_description)) > 0),
    occurrence_date TEXT,
    confessed       BOOLEAN NOT NULL DEFAULT 0 CHECK(confessed IN (0, 1)),
    confession_date TEXT,
    notes           TEXT,
    created_at      TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    CHECK ((confessed = 0 AND confession_date IS NULL)
        OR (confessed = 1 AND confession_date IS NOT NULL))
);
CREATE INDEX IF NOT EXISTS idx_sins_created_at ON sins_confession_log(created_at);
CREATE INDEX IF NOT EXISTS idx_sins_confessed ON sins_confession_log(confessed);
"#;

const LOG_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS log (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    date      TEXT NOT NULL,
    operation TEXT NOT NULL,
    target    TEXT DEFAULT '',
    message   TEXT NOT NULL
);
"#;

/// Ordered schema statements: the three record tables, then the audit log.
pub const ALL_TABLE_SCHEMAS: [&str; 4] = [
    BIBLE_READING_SCHEMA,
    ROSARY_PRAYERS_SCHEMA,
    SINS_CONFESSION_LOG_SCHEMA,
    LOG_SCHEMA,
];

/// Record tables, in declaration order.
pub const RECORD_TABLES: [&str; 3] = [
    BIBLE_READING_TABLE,
    ROSARY_PRAYERS_TABLE,
    SINS_CONFESSION_LOG_TABLE,
];
