use super::event_kind::EventKind;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Location of a row in the scanned input, kept for diagnostics and as the
/// deterministic tie-break when two events share a timestamp.
///
/// Files are discovered in lexical path order and rows are read top to
/// bottom, so the derived `Ord` on (file, row) equals the order in which the
/// rows were read.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceRef {
    pub file: String,
    pub row: u32,
}

impl SourceRef {
    pub fn new(file: impl Into<String>, row: u32) -> Self {
        Self {
            file: file.into(),
            row,
        }
    }
}

impl std::fmt::Display for SourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.row)
    }
}

/// One canonical ENTRY/EXIT observation. Immutable once created by the
/// normalizer; the ordering key is (timestamp, source).
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub plate: String,
    pub kind: EventKind,
    pub timestamp: NaiveDateTime,
    pub source: SourceRef,
}

impl Event {
    pub fn new(
        plate: impl Into<String>,
        kind: EventKind,
        timestamp: NaiveDateTime,
        source: SourceRef,
    ) -> Self {
        Self {
            plate: plate.into(),
            kind,
            timestamp,
            source,
        }
    }

    /// Sort key used before pairing: chronological, then read order.
    pub fn sort_key(&self) -> (NaiveDateTime, &SourceRef) {
        (self.timestamp, &self.source)
    }
}
