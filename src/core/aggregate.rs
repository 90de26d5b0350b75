//! Aggregator: pure reduction of intervals into per-plate monthly totals.

use crate::models::{Interval, MonthlyTotal};
use crate::utils::{month_key, round2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which end of a stay decides the month it is attributed to when a stay
/// spans a month boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketBy {
    #[default]
    Entry,
    Exit,
}

/// Output is sorted plate ascending, then month ascending, so repeated runs
/// on identical input produce byte-identical reports.
pub fn summarize_monthly(intervals: &[Interval], bucket_by: BucketBy) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<(String, String), (u64, f64)> = BTreeMap::new();

    for iv in intervals {
        let ts = match bucket_by {
            BucketBy::Entry => &iv.entry_time,
            BucketBy::Exit => &iv.exit_time,
        };
        let key = (iv.plate.clone(), month_key(ts));
        let bucket = buckets.entry(key).or_insert((0, 0.0));
        bucket.0 += 1;
        bucket.1 += iv.duration_minutes;
    }

    buckets
        .into_iter()
        .map(|((plate, month), (visits, minutes))| MonthlyTotal {
            plate,
            month,
            visits,
            total_minutes: round2(minutes),
            total_hours: round2(minutes / 60.0),
        })
        .collect()
}
