//! Event Normalizer: raw rows → canonical events, independent of the source
//! file layout. Rows that cannot be normalized become MALFORMED_ROW issues
//! and are dropped; they never abort the run.

use crate::ingest::row::{CellValue, RawRow};
use crate::models::{Event, EventKind, Issue, IssueKind};
use crate::utils::parse_timestamp;

/// Logical → physical column names plus the marker/timestamp conventions of
/// the export being read.
#[derive(Debug, Clone)]
pub struct RowSchema {
    pub plate_column: String,
    pub event_column: String,
    pub timestamp_column: String,
    pub entry_marker: String,
    pub exit_marker: String,
    pub timestamp_format: Option<String>,
}

pub fn normalize_rows(rows: &[RawRow], schema: &RowSchema) -> (Vec<Event>, Vec<Issue>) {
    let mut events = Vec::new();
    let mut issues = Vec::new();

    for row in rows {
        // Rows without a plate carry nothing attributable; drop them silently.
        let plate = match row.cell(&schema.plate_column) {
            Some(cell) if !cell.is_empty() => canonical_plate(&cell.render()),
            _ => continue,
        };
        if plate.is_empty() {
            continue;
        }

        let marker = row
            .cell(&schema.event_column)
            .map(CellValue::render)
            .unwrap_or_default();
        let kind = match EventKind::from_marker(&marker, &schema.entry_marker, &schema.exit_marker)
        {
            Some(kind) => kind,
            None => {
                issues.push(Issue::new(
                    IssueKind::MalformedRow,
                    Some(plate),
                    None,
                    format!("unrecognized event marker '{}'", marker.trim()),
                    row.source.clone(),
                ));
                continue;
            }
        };

        let timestamp = match row.cell(&schema.timestamp_column) {
            // Native date-time cells are taken as-is.
            Some(CellValue::DateTime(dt)) => *dt,
            Some(CellValue::Text(s)) => {
                match parse_timestamp(s, schema.timestamp_format.as_deref()) {
                    Some(dt) => dt,
                    None => {
                        issues.push(Issue::new(
                            IssueKind::MalformedRow,
                            Some(plate),
                            None,
                            format!("unparseable timestamp '{}'", s.trim()),
                            row.source.clone(),
                        ));
                        continue;
                    }
                }
            }
            _ => {
                issues.push(Issue::new(
                    IssueKind::MalformedRow,
                    Some(plate),
                    None,
                    "missing timestamp",
                    row.source.clone(),
                ));
                continue;
            }
        };

        events.push(Event::new(plate, kind, timestamp, row.source.clone()));
    }

    (events, issues)
}

/// Canonical grouping key: trimmed, uppercased.
pub fn canonical_plate(raw: &str) -> String {
    raw.trim().to_uppercase()
}
