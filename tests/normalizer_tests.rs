use chrono::{NaiveDate, NaiveDateTime};
use parkagg::core::normalizer::{RowSchema, canonical_plate, normalize_rows};
use parkagg::ingest::row::{CellValue, RawRow};
use parkagg::models::{EventKind, IssueKind, SourceRef};

fn schema() -> RowSchema {
    RowSchema {
        plate_column: "Plate".to_string(),
        event_column: "Event".to_string(),
        timestamp_column: "Timestamp".to_string(),
        entry_marker: "01 ENTRY".to_string(),
        exit_marker: "02 EXIT".to_string(),
        timestamp_format: None,
    }
}

fn row(file: &str, n: u32, plate: &str, event: &str, ts: &str) -> RawRow {
    let mut r = RawRow::new(SourceRef::new(file, n));
    r.push("Plate", CellValue::Text(plate.to_string()));
    r.push("Event", CellValue::Text(event.to_string()));
    r.push("Timestamp", CellValue::Text(ts.to_string()));
    r
}

#[test]
fn valid_rows_become_events_with_canonical_plates() {
    let rows = vec![
        row("a.csv", 2, "  abc123 ", "01 entry", "2024-01-05 08:00:00"),
        row("a.csv", 3, "ABC123", "02 Exit", "2024-01-05T17:30:00"),
    ];

    let (events, issues) = normalize_rows(&rows, &schema());

    assert!(issues.is_empty());
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].plate, "ABC123");
    assert_eq!(events[0].kind, EventKind::Entry);
    assert_eq!(events[1].kind, EventKind::Exit);
    assert_eq!(
        events[1].timestamp,
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(17, 30, 0)
            .unwrap()
    );
}

#[test]
fn native_datetime_cells_are_used_as_is() {
    let native: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(7, 45, 12)
        .unwrap();

    let mut r = RawRow::new(SourceRef::new("a.csv", 2));
    r.push("Plate", CellValue::Text("AB12".to_string()));
    r.push("Event", CellValue::Text("01 ENTRY".to_string()));
    r.push("Timestamp", CellValue::DateTime(native));

    let (events, issues) = normalize_rows(&[r], &schema());

    assert!(issues.is_empty());
    assert_eq!(events[0].timestamp, native);
}

#[test]
fn unknown_marker_is_a_malformed_row_carrying_the_raw_text() {
    let rows = vec![row("a.csv", 2, "AB12", "03 SERVICE", "2024-01-05 08:00:00")];

    let (events, issues) = normalize_rows(&rows, &schema());

    assert!(events.is_empty());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MalformedRow);
    assert!(issues[0].detail.contains("03 SERVICE"));
    assert_eq!(issues[0].source, SourceRef::new("a.csv", 2));
}

#[test]
fn unparseable_timestamp_is_a_malformed_row() {
    let rows = vec![row("a.csv", 2, "AB12", "01 ENTRY", "yesterday-ish")];

    let (events, issues) = normalize_rows(&rows, &schema());

    assert!(events.is_empty());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MalformedRow);
    assert!(issues[0].detail.contains("yesterday-ish"));
}

#[test]
fn blank_plate_rows_are_dropped_without_an_issue() {
    let rows = vec![
        row("a.csv", 2, "   ", "01 ENTRY", "2024-01-05 08:00:00"),
        row("a.csv", 3, "AB12", "01 ENTRY", "2024-01-05 08:00:00"),
    ];

    let (events, issues) = normalize_rows(&rows, &schema());

    assert!(issues.is_empty());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].plate, "AB12");
}

#[test]
fn explicit_timestamp_format_is_the_only_one_accepted() {
    let mut s = schema();
    s.timestamp_format = Some("%d.%m.%Y %H:%M".to_string());

    let rows = vec![
        row("a.csv", 2, "AB12", "01 ENTRY", "05.01.2024 08:00"),
        row("a.csv", 3, "AB12", "02 EXIT", "2024-01-05 17:30:00"),
    ];

    let (events, issues) = normalize_rows(&rows, &s);

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].timestamp,
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::MalformedRow);
}

#[test]
fn column_lookup_ignores_header_case() {
    let mut r = RawRow::new(SourceRef::new("a.csv", 2));
    r.push("PLATE", CellValue::Text("ab12".to_string()));
    r.push("event", CellValue::Text("01 ENTRY".to_string()));
    r.push("timestamp", CellValue::Text("2024-01-05 08:00:00".to_string()));

    let (events, issues) = normalize_rows(&[r], &schema());

    assert!(issues.is_empty());
    assert_eq!(events.len(), 1);
}

#[test]
fn canonical_plate_trims_and_uppercases() {
    assert_eq!(canonical_plate("  ab 12c "), "AB 12C");
}
