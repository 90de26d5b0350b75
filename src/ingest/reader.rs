use super::row::{CellValue, RawRow};
use crate::errors::AppResult;
use crate::models::SourceRef;
use std::path::Path;

/// Result of reading one source file.
pub enum ReadOutcome {
    Rows(Vec<RawRow>),
    /// The file lacks one or more of the configured columns and is skipped.
    MissingColumns(Vec<String>),
}

/// Read every record of a CSV export into raw rows, preserving source order.
/// Row numbers are 1-based with the header on row 1, matching what a user
/// sees when they open the file in a spreadsheet.
pub fn read_rows(path: &Path, required_columns: &[&str]) -> AppResult<ReadOutcome> {
    // Ragged rows happen in hand-edited exports; missing cells become Empty.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let missing: Vec<String> = required_columns
        .iter()
        .filter(|required| !headers.iter().any(|h| h.eq_ignore_ascii_case(required)))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Ok(ReadOutcome::MissingColumns(missing));
    }

    let file_name = path.to_string_lossy().into_owned();
    let mut rows = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let mut row = RawRow::new(SourceRef::new(file_name.clone(), index as u32 + 2));
        for (col, header) in headers.iter().enumerate() {
            let value = match record.get(col) {
                Some(text) if !text.trim().is_empty() => CellValue::Text(text.to_string()),
                _ => CellValue::Empty,
            };
            row.push(header.clone(), value);
        }
        rows.push(row);
    }

    Ok(ReadOutcome::Rows(rows))
}
