use chrono::NaiveDateTime;
use serde::Serialize;

/// One completed stay, derived from a matched ENTRY/EXIT pair.
/// Invariant: entry_time <= exit_time, duration_minutes >= 0.
#[derive(Debug, Clone, Serialize)]
pub struct Interval {
    pub plate: String,
    pub entry_time: NaiveDateTime,
    pub exit_time: NaiveDateTime,
    pub duration_minutes: f64,
}
