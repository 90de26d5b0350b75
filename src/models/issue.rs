use super::event::SourceRef;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    UnmatchedEntry,
    UnmatchedExit,
    OutOfOrder,
    MalformedRow,
    HazardPlate,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::UnmatchedEntry => "UNMATCHED_ENTRY",
            IssueKind::UnmatchedExit => "UNMATCHED_EXIT",
            IssueKind::OutOfOrder => "OUT_OF_ORDER",
            IssueKind::MalformedRow => "MALFORMED_ROW",
            IssueKind::HazardPlate => "HAZARD_PLATE",
        }
    }
}

/// A recoverable anomaly found during normalization or pairing.
/// Issues are collected, never raised; they never block other rows or plates.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub plate: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub detail: String,
    pub source: SourceRef,
}

impl Issue {
    pub fn new(
        kind: IssueKind,
        plate: Option<String>,
        timestamp: Option<NaiveDateTime>,
        detail: impl Into<String>,
        source: SourceRef,
    ) -> Self {
        Self {
            kind,
            plate,
            timestamp,
            detail: detail.into(),
            source,
        }
    }
}
