use crate::cli::parser::Commands;
use crate::config::{Config, Overrides};
use crate::core::pipeline::PipelineOutput;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::ingest::{ReadOutcome, discover_source_files, read_rows};
use crate::models::IssueKind;
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;
use std::path::{Path, PathBuf};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Run {
        config,
        source_folder,
        output_file,
        timestamp_format,
        recursive,
        format,
        force,
    } = cmd
    else {
        return Err(AppError::Other("unexpected command".to_string()));
    };

    let mut cfg = Config::load(Path::new(config))?;
    cfg.apply_overrides(&Overrides {
        source_folder: source_folder.as_ref().map(PathBuf::from),
        output_file: output_file.as_ref().map(PathBuf::from),
        timestamp_format: timestamp_format.clone(),
        recursive: *recursive,
    });

    let files = discover_source_files(&cfg.source_folder, cfg.recursive)?;
    if files.is_empty() {
        return Err(AppError::NoUsableInput(format!(
            "no CSV files were found in '{}'",
            cfg.source_folder.display()
        )));
    }

    let schema = cfg.row_schema();
    let required = [
        schema.plate_column.as_str(),
        schema.event_column.as_str(),
        schema.timestamp_column.as_str(),
    ];

    // Unreadable or incomplete files are skipped, never fatal; the run only
    // fails if nothing usable remains.
    let mut rows = Vec::new();
    for file in &files {
        match read_rows(file, &required) {
            Ok(ReadOutcome::Rows(file_rows)) => {
                info(format!("[LOAD] {}: {} rows", file.display(), file_rows.len()));
                rows.extend(file_rows);
            }
            Ok(ReadOutcome::MissingColumns(missing)) => {
                warning(format!(
                    "[SKIP] {} missing required columns: {}",
                    file.display(),
                    missing.join(", ")
                ));
            }
            Err(e) => {
                warning(format!("[SKIP] failed to read {}: {}", file.display(), e));
            }
        }
    }

    let output = crate::core::run_pipeline(&rows, &schema, &cfg.pipeline_options());
    if output.event_count == 0 {
        return Err(AppError::NoUsableInput(
            "no valid events could be read from the source files".to_string(),
        ));
    }

    export::write_output(format, &cfg.output_file, &output, *force)?;

    print_summary(&output);
    Ok(())
}

fn print_summary(output: &PipelineOutput) {
    let mut table = Table::new(&["artifact", "count"]);
    table.add_row(vec!["events".to_string(), output.event_count.to_string()]);
    table.add_row(vec!["intervals".to_string(), output.intervals.len().to_string()]);
    table.add_row(vec!["monthly totals".to_string(), output.monthly.len().to_string()]);
    table.add_row(vec!["issues".to_string(), output.issues.len().to_string()]);
    println!("\n{}", table.render());

    if output.issues.is_empty() {
        return;
    }

    let kinds = [
        IssueKind::MalformedRow,
        IssueKind::UnmatchedEntry,
        IssueKind::UnmatchedExit,
        IssueKind::OutOfOrder,
        IssueKind::HazardPlate,
    ];
    for kind in kinds {
        let count = output.issues.iter().filter(|i| i.kind == kind).count();
        if count > 0 {
            warning(format!("{}: {}", kind.as_str(), count));
        }
    }
}
