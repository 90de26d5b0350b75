// src/export/mod.rs

mod csv;
mod excel_date;
mod fs_utils;
mod json;
pub mod model;
mod xlsx;

use crate::core::pipeline::PipelineOutput;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

/// Completion message shared by all formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the pipeline artifacts to `path` in the requested format, creating
/// parent directories as needed.
pub fn write_output(
    format: &ExportFormat,
    path: &Path,
    output: &PipelineOutput,
    force: bool,
) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Xlsx => {
            xlsx::export_xlsx(output, path)?;
            notify_export_success("XLSX", path);
        }
        ExportFormat::Csv => {
            for written in csv::export_csv(output, path)? {
                notify_export_success("CSV", &written);
            }
        }
        ExportFormat::Json => {
            json::export_json(output, path)?;
            notify_export_success("JSON", path);
        }
    }

    Ok(())
}
