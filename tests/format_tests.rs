use chrono::NaiveDate;

use f1_paddock::modules::helpers::handelbars::format_date::format_timestamp;
use f1_paddock::modules::helpers::handelbars::format_race_status::race_status_on;

// Store timestamps come back as RFC 3339 with fractional seconds; the
// screens show them as DD.MM.YYYY HH:mm.
#[test]
fn test_timestamp_display_format() {
    assert_eq!(
        format_timestamp("2024-05-01T10:00:00.000000Z"),
        "01.05.2024 10:00"
    );
    assert_eq!(
        format_timestamp("2024-12-31T23:59:12.345678+00:00"),
        "31.12.2024 23:59"
    );
}

// Malformed input is passed through unchanged instead of breaking the page.
#[test]
fn test_malformed_timestamp_is_returned_unchanged() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp(""), "");
    assert_eq!(format_timestamp("2024-05-01"), "2024-05-01");
}

#[test]
fn test_race_status() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    assert_eq!(race_status_on("2024-06-14", today), "Finished");
    assert_eq!(race_status_on("2024-06-15", today), "Upcoming");
    assert_eq!(race_status_on("2024-06-16", today), "Upcoming");
}

// An unparseable race date counts as upcoming rather than failing.
#[test]
fn test_race_status_with_bad_date() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    assert_eq!(race_status_on("sometime", today), "Upcoming");
    assert_eq!(race_status_on("", today), "Upcoming");
}
