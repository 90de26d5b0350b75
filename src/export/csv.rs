use crate::core::pipeline::PipelineOutput;
use crate::errors::AppResult;
use crate::export::model::{
    interval_headers, interval_row, issue_headers, issue_row, monthly_headers, monthly_row,
};
use csv::Writer;
use std::path::{Path, PathBuf};

/// CSV cannot hold three sheets in one file, so the output path becomes a
/// family of sibling files: `<stem>_monthly.csv`, `<stem>_intervals.csv`
/// and, when there are issues, `<stem>_issues.csv`.
pub(crate) fn export_csv(output: &PipelineOutput, path: &Path) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    let monthly_path = sibling(path, "monthly");
    write_table(
        &monthly_path,
        &monthly_headers(),
        output.monthly.iter().map(monthly_row),
    )?;
    written.push(monthly_path);

    let intervals_path = sibling(path, "intervals");
    write_table(
        &intervals_path,
        &interval_headers(),
        output.intervals.iter().map(interval_row),
    )?;
    written.push(intervals_path);

    if !output.issues.is_empty() {
        let issues_path = sibling(path, "issues");
        write_table(
            &issues_path,
            &issue_headers(),
            output.issues.iter().map(issue_row),
        )?;
        written.push(issues_path);
    }

    Ok(written)
}

fn write_table(
    path: &Path,
    headers: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!("{stem}_{suffix}.csv"))
}
