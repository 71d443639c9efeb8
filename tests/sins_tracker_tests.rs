use rfaithlog::core::sins::format_sin;
use rfaithlog::core::{SinFilter, SinLog};
use rfaithlog::db::pool::StoreProvider;
use rfaithlog::errors::AppError;
use rfaithlog::models::{ConfessOutcome, SinEntry};

mod common;
use common::{clock, count_rows, fresh_store};

fn entry() -> SinEntry {
    SinEntry {
        id: 12,
        sin_description: "Lied about chores".to_string(),
        occurrence_date: None,
        confessed: false,
        confession_date: None,
        notes: None,
        created_at: "2023-10-25 18:30:00".to_string(),
    }
}

#[test]
fn test_add_entry_starts_unconfessed() {
    let store = fresh_store("sins_add");
    let log = SinLog::new(&store, clock("2023-10-25 18:30:00"));

    let id = log
        .add("Test sin", Some("2023-04-01"), Some("A note"))
        .expect("add sin");

    let conn = store.acquire().unwrap();
    let (description, occurred, confessed, confession_date, notes): (
        String,
        Option<String>,
        bool,
        Option<String>,
        Option<String>,
    ) = conn
        .query_row(
            "SELECT sin_description, occurrence_date, confessed, confession_date, notes
             FROM sins_confession_log WHERE id = ?1",
            [id],
            |row| {
                Ok((
                    row.get("sin_description")?,
                    row.get("occurrence_date")?,
                    row.get("confessed")?,
                    row.get("confession_date")?,
                    row.get("notes")?,
                ))
            },
        )
        .unwrap();

    assert_eq!(description, "Test sin");
    assert_eq!(occurred.as_deref(), Some("2023-04-01"));
    assert!(!confessed);
    assert_eq!(confession_date, None);
    assert_eq!(notes.as_deref(), Some("A note"));
}

#[test]
fn test_add_entry_minimal() {
    let store = fresh_store("sins_add_minimal");
    let log = SinLog::new(&store, clock("2023-10-25 18:30:00"));

    let id = log.add("Another sin", None, None).unwrap();
    let e = log.get(id).unwrap().expect("entry exists");

    assert_eq!(e.sin_description, "Another sin");
    assert_eq!(e.occurrence_date, None);
    assert_eq!(e.notes, None);
    assert!(!e.confessed);
    assert_eq!(e.created_at, "2023-10-25 18:30:00");
}

#[test]
fn test_add_entry_invalid_date_writes_nothing() {
    let store = fresh_store("sins_add_bad_date");
    let log = SinLog::new(&store, clock("2023-10-25 18:30:00"));

    let err = log
        .add("Sin with bad date", Some("bad-date-format"), None)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
    assert!(err.is_validation());
    assert_eq!(count_rows(&store, "sins_confession_log"), 0);
}

#[test]
fn test_add_entry_rejects_blank_description() {
    let store = fresh_store("sins_add_blank");
    let log = SinLog::new(&store, clock("2023-10-25 18:30:00"));

    assert!(matches!(
        log.add("  ", None, None).unwrap_err(),
        AppError::Validation(_)
    ));
    assert_eq!(count_rows(&store, "sins_confession_log"), 0);
}

#[test]
fn test_mark_confessed_default_date() {
    let store = fresh_store("sins_confess_default");
    let log = SinLog::new(&store, clock("2023-10-27 17:00:00"));

    let id = log.add("To be confessed", None, None).unwrap();
    let outcome = log.mark_confessed(id, None).unwrap();

    assert!(outcome.is_success());
    assert_eq!(
        outcome,
        ConfessOutcome::Confessed {
            date: "2023-10-27".to_string()
        }
    );

    let e = log.get(id).unwrap().unwrap();
    assert!(e.confessed);
    assert_eq!(e.confession_date.as_deref(), Some("2023-10-27"));
}

#[test]
fn test_mark_confessed_specific_date() {
    let store = fresh_store("sins_confess_specific");
    let log = SinLog::new(&store, clock("2023-10-27 17:00:00"));

    let id = log.add("Specific date", None, None).unwrap();
    assert!(log.mark_confessed(id, Some("2023-10-20")).unwrap().is_success());

    let e = log.get(id).unwrap().unwrap();
    assert_eq!(e.confession_date.as_deref(), Some("2023-10-20"));
}

#[test]
fn test_mark_confessed_twice_keeps_first_date() {
    let store = fresh_store("sins_confess_twice");
    let log = SinLog::new(&store, clock("2023-10-27 17:00:00"));

    let id = log.add("Only once", None, None).unwrap();
    assert!(log.mark_confessed(id, Some("2023-10-27")).unwrap().is_success());

    let second = log.mark_confessed(id, Some("2023-10-28")).unwrap();
    assert!(!second.is_success());
    assert_eq!(
        second,
        ConfessOutcome::AlreadyConfessed {
            on: Some("2023-10-27".to_string())
        }
    );

    let e = log.get(id).unwrap().unwrap();
    assert_eq!(e.confession_date.as_deref(), Some("2023-10-27"));
}

#[test]
fn test_mark_confessed_unknown_id() {
    let store = fresh_store("sins_confess_missing");
    let log = SinLog::new(&store, clock("2023-10-27 17:00:00"));

    assert_eq!(
        log.mark_confessed(999, None).unwrap(),
        ConfessOutcome::NotFound
    );
}

#[test]
fn test_mark_confessed_invalid_date_leaves_row_unchanged() {
    let store = fresh_store("sins_confess_bad_date");
    let log = SinLog::new(&store, clock("2023-10-27 17:00:00"));

    let id = log.add("Still pending", None, None).unwrap();
    let err = log.mark_confessed(id, Some("another-bad-date")).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));

    let e = log.get(id).unwrap().unwrap();
    assert!(!e.confessed);
    assert_eq!(e.confession_date, None);
}

#[test]
fn test_list_filters() {
    let store = fresh_store("sins_filters");

    let first = SinLog::new(&store, clock("2023-10-01 10:00:00"))
        .add("Sin 1", None, None)
        .unwrap();
    let second = SinLog::new(&store, clock("2023-10-02 10:00:00"))
        .add("Sin 2", None, None)
        .unwrap();
    let third = SinLog::new(&store, clock("2023-10-03 10:00:00"))
        .add("Sin 3", None, None)
        .unwrap();

    let log = SinLog::new(&store, clock("2023-10-04 10:00:00"));
    assert!(log.mark_confessed(second, None).unwrap().is_success());

    let all: Vec<i64> = log
        .list(SinFilter::All, None)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(all, vec![third, second, first]);

    let unconfessed: Vec<i64> = log
        .list_by_flags(false, false, None)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(unconfessed, vec![third, first]);

    let confessed = log.list_by_flags(false, true, None).unwrap();
    assert_eq!(confessed.len(), 1);
    assert_eq!(confessed[0].id, second);
    assert!(confessed[0].confessed);

    // show_all ignores show_confessed
    assert_eq!(log.list_by_flags(true, false, None).unwrap().len(), 3);
}

#[test]
fn test_list_limit() {
    let store = fresh_store("sins_limit");
    for ts in ["2023-10-01 10:00:00", "2023-10-02 10:00:00", "2023-10-03 10:00:00"] {
        SinLog::new(&store, clock(ts)).add(ts, None, None).unwrap();
    }

    let log = SinLog::new(&store, clock("2023-10-04 10:00:00"));
    let top = log.list(SinFilter::All, Some(2)).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].sin_description, "2023-10-03 10:00:00");
    assert_eq!(top[1].sin_description, "2023-10-02 10:00:00");
}

#[test]
fn test_filter_from_flags() {
    assert_eq!(SinFilter::from_flags(true, true), SinFilter::All);
    assert_eq!(SinFilter::from_flags(true, false), SinFilter::All);
    assert_eq!(SinFilter::from_flags(false, true), SinFilter::Confessed);
    assert_eq!(SinFilter::from_flags(false, false), SinFilter::Unconfessed);
}

#[test]
fn test_format_unconfessed() {
    assert_eq!(
        format_sin(&entry()),
        "[12] Not Confessed - \"Lied about chores\" (Logged: 2023-10-25)"
    );
}

#[test]
fn test_format_confessed_with_every_segment() {
    let mut e = entry();
    e.occurrence_date = Some("2023-10-24".to_string());
    e.confessed = true;
    e.confession_date = Some("2023-10-27".to_string());
    e.notes = Some("To avoid trouble".to_string());

    assert_eq!(
        format_sin(&e),
        "[12] Confessed - \"Lied about chores\" (Occurred: 2023-10-24) \
         (Confessed on: 2023-10-27) - Notes: To avoid trouble (Logged: 2023-10-25)"
    );
}

#[test]
fn test_format_hides_confession_date_when_not_confessed() {
    let mut e = entry();
    e.confession_date = Some("2023-10-27".to_string());
    assert!(!format_sin(&e).contains("Confessed on"));
}
