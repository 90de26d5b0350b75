use crate::models::SourceRef;
use chrono::NaiveDateTime;

/// A single cell as read from a source file. Spreadsheet exports may carry a
/// native date-time value; CSV sources only ever produce text.
#[derive(Debug, Clone)]
pub enum CellValue {
    Empty,
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::DateTime(_) => false,
        }
    }

    /// Textual form used for plate and marker columns.
    pub fn render(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// One raw input row: an ordered header → cell mapping plus its location.
/// The normalizer resolves the configured columns against it by header name.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub source: SourceRef,
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new(source: SourceRef) -> Self {
        Self {
            source,
            cells: Vec::new(),
        }
    }

    pub fn push(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.push((header.into(), value));
    }

    /// Case-insensitive header lookup; first match wins.
    pub fn cell(&self, header: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(h, _)| h.eq_ignore_ascii_case(header))
            .map(|(_, v)| v)
    }
}
