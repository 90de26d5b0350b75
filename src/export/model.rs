//! Flat row representations of the three output artifacts, shared by every
//! export format.

use crate::models::{Interval, Issue, MonthlyTotal};
use chrono::NaiveDateTime;

pub const MONTHLY_SHEET: &str = "monthly_totals";
pub const INTERVALS_SHEET: &str = "intervals";
pub const ISSUES_SHEET: &str = "issues";

pub fn monthly_headers() -> [&'static str; 5] {
    ["plate", "month", "visits", "total_minutes", "total_hours"]
}

pub fn interval_headers() -> [&'static str; 4] {
    ["plate", "entry_time", "exit_time", "duration_minutes"]
}

pub fn issue_headers() -> [&'static str; 6] {
    ["file", "row", "kind", "plate", "timestamp", "detail"]
}

pub fn monthly_row(m: &MonthlyTotal) -> Vec<String> {
    vec![
        m.plate.clone(),
        m.month.clone(),
        m.visits.to_string(),
        format_number(m.total_minutes),
        format_number(m.total_hours),
    ]
}

pub fn interval_row(iv: &Interval) -> Vec<String> {
    vec![
        iv.plate.clone(),
        format_timestamp(&iv.entry_time),
        format_timestamp(&iv.exit_time),
        format_number(iv.duration_minutes),
    ]
}

pub fn issue_row(issue: &Issue) -> Vec<String> {
    vec![
        issue.source.file.clone(),
        issue.source.row.to_string(),
        issue.kind.as_str().to_string(),
        issue.plate.clone().unwrap_or_default(),
        issue
            .timestamp
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_default(),
        issue.detail.clone(),
    ]
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_number(v: f64) -> String {
    // Trim a trailing ".0" so whole numbers export as integers.
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
