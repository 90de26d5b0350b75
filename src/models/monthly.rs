use serde::Serialize;

/// Aggregated stay statistics for one plate in one calendar month.
/// `month` is the "YYYY-MM" bucket key.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTotal {
    pub plate: String,
    pub month: String,
    pub visits: u64,
    pub total_minutes: f64,
    pub total_hours: f64,
}
