//! Pipeline facade: rows → events → per-plate pairing → monthly totals,
//! with every anomaly funnelled into one ordered issue report.

use super::aggregate::{BucketBy, summarize_monthly};
use super::normalizer::{RowSchema, normalize_rows};
use super::pairing::{DuplicateEntryPolicy, pair_plate};
use crate::ingest::row::RawRow;
use crate::models::{Event, Interval, Issue, MonthlyTotal};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub duplicate_entry: DuplicateEntryPolicy,
    pub bucket_by: BucketBy,
}

/// The three artifacts handed to the output writer, plus the number of
/// events that survived normalization (zero means the run had no usable
/// input; the caller decides what to do with that).
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub intervals: Vec<Interval>,
    pub monthly: Vec<MonthlyTotal>,
    pub issues: Vec<Issue>,
    pub event_count: usize,
}

pub fn run_pipeline(
    rows: &[RawRow],
    schema: &RowSchema,
    options: &PipelineOptions,
) -> PipelineOutput {
    let (events, mut issues) = normalize_rows(rows, schema);
    let event_count = events.len();

    // Group per plate; BTreeMap keeps the interval output in plate order.
    let mut by_plate: BTreeMap<String, Vec<Event>> = BTreeMap::new();
    for ev in events {
        by_plate.entry(ev.plate.clone()).or_default().push(ev);
    }

    let mut intervals = Vec::new();
    for (plate, plate_events) in &by_plate {
        let (plate_intervals, plate_issues) =
            pair_plate(plate, plate_events, options.duplicate_entry);
        intervals.extend(plate_intervals);
        issues.extend(plate_issues);
    }

    let monthly = summarize_monthly(&intervals, options.bucket_by);

    // One report, stable-sorted by input location for troubleshooting.
    issues.sort_by(|a, b| a.source.cmp(&b.source));

    PipelineOutput {
        intervals,
        monthly,
        issues,
        event_count,
    }
}
