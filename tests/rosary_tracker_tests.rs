use rfaithlog::core::RosaryLog;
use rfaithlog::core::rosary::format_prayer;
use rfaithlog::errors::AppError;
use rfaithlog::models::RosaryPrayer;

mod common;
use common::{clock, count_rows, fresh_store};

fn prayer(mysteries: Option<&str>, notes: Option<&str>) -> RosaryPrayer {
    RosaryPrayer {
        id: 4,
        prayer_date: "2023-10-25".to_string(),
        mysteries: mysteries.map(str::to_string),
        notes: notes.map(str::to_string),
        created_at: "2023-10-25 20:00:00".to_string(),
    }
}

#[test]
fn test_log_with_explicit_date() {
    let store = fresh_store("rosary_explicit");
    let log = RosaryLog::new(&store, clock("2023-10-27 21:00:00"));

    let id = log
        .log(Some("2023-10-25"), Some("Sorrowful"), Some("Evening"))
        .expect("log prayer");
    let p = log.get(id).unwrap().expect("prayer exists");

    assert_eq!(p.prayer_date, "2023-10-25");
    assert_eq!(p.mysteries.as_deref(), Some("Sorrowful"));
    assert_eq!(p.notes.as_deref(), Some("Evening"));
    assert_eq!(p.created_at, "2023-10-27 21:00:00");
}

#[test]
fn test_log_defaults_to_today() {
    let store = fresh_store("rosary_today");
    let log = RosaryLog::new(&store, clock("2023-10-27 06:45:00"));

    let id = log.log(None, None, None).unwrap();
    let p = log.get(id).unwrap().unwrap();

    assert_eq!(p.prayer_date, "2023-10-27");
    assert_eq!(p.mysteries, None);
    assert_eq!(p.notes, None);
}

#[test]
fn test_log_rejects_malformed_dates() {
    let store = fresh_store("rosary_bad_date");
    let log = RosaryLog::new(&store, clock("2023-10-27 06:45:00"));

    for bad in ["26-10-2023", "bad-date", "2023-1-5", "2023-02-30", ""] {
        let err = log.log(Some(bad), Some("Joyful"), None).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidDate(_)),
            "expected InvalidDate for {bad:?}"
        );
    }

    assert_eq!(count_rows(&store, "rosary_prayers"), 0);
}

#[test]
fn test_history_orders_by_prayer_date_desc() {
    let store = fresh_store("rosary_order");
    let log = RosaryLog::new(&store, clock("2023-10-05 10:00:00"));

    log.log(Some("2023-10-01"), None, None).unwrap();
    log.log(Some("2023-10-03"), None, None).unwrap();
    log.log(Some("2023-10-02"), None, None).unwrap();

    let dates: Vec<String> = log
        .history(None)
        .unwrap()
        .into_iter()
        .map(|p| p.prayer_date)
        .collect();
    assert_eq!(dates, vec!["2023-10-03", "2023-10-02", "2023-10-01"]);
}

#[test]
fn test_history_same_day_most_recently_logged_first() {
    let store = fresh_store("rosary_same_day");

    let morning = RosaryLog::new(&store, clock("2023-10-05 07:00:00"))
        .log(Some("2023-10-05"), Some("Joyful"), None)
        .unwrap();
    let evening = RosaryLog::new(&store, clock("2023-10-05 21:00:00"))
        .log(Some("2023-10-05"), Some("Glorious"), None)
        .unwrap();
    // same second as the evening entry: insertion order decides
    let late = RosaryLog::new(&store, clock("2023-10-05 21:00:00"))
        .log(Some("2023-10-05"), Some("Luminous"), None)
        .unwrap();

    let ids: Vec<i64> = RosaryLog::new(&store, clock("2023-10-06 08:00:00"))
        .history(None)
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![late, evening, morning]);
}

#[test]
fn test_history_limit() {
    let store = fresh_store("rosary_limit");
    let log = RosaryLog::new(&store, clock("2023-10-05 10:00:00"));

    log.log(Some("2023-10-01"), None, None).unwrap();
    log.log(Some("2023-10-02"), None, None).unwrap();
    log.log(Some("2023-10-03"), None, None).unwrap();

    let top = log.history(Some(2)).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].prayer_date, "2023-10-03");
    assert_eq!(top[1].prayer_date, "2023-10-02");
}

#[test]
fn test_history_empty() {
    let store = fresh_store("rosary_empty");
    let log = RosaryLog::new(&store, clock("2023-10-05 10:00:00"));
    assert!(log.history(Some(5)).unwrap().is_empty());
}

#[test]
fn test_format_segments() {
    assert_eq!(format_prayer(&prayer(None, None)), "[4] 2023-10-25");
    assert_eq!(
        format_prayer(&prayer(Some("Joyful"), None)),
        "[4] 2023-10-25 - Mysteries: Joyful"
    );
    assert_eq!(
        format_prayer(&prayer(None, Some("Morning prayer"))),
        "[4] 2023-10-25 - Notes: Morning prayer"
    );
    assert_eq!(
        format_prayer(&prayer(Some("Sorrowful"), Some("With family"))),
        "[4] 2023-10-25 - Mysteries: Sorrowful - Notes: With family"
    );
}

#[test]
fn test_format_ignores_empty_segments() {
    assert_eq!(format_prayer(&prayer(Some(""), Some(""))), "[4] 2023-10-25");
}
