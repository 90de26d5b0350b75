use crate::core::pipeline::PipelineOutput;
use crate::errors::{AppError, AppResult};
use serde_json::json;
use std::path::Path;

/// One pretty-printed document with the three artifacts.
pub(crate) fn export_json(output: &PipelineOutput, path: &Path) -> AppResult<()> {
    let doc = json!({
        "monthly_totals": output.monthly,
        "intervals": output.intervals,
        "issues": output.issues,
    });

    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}
