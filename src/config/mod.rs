use crate::core::aggregate::BucketBy;
use crate::core::normalizer::RowSchema;
use crate::core::pairing::DuplicateEntryPolicy;
use crate::core::pipeline::PipelineOptions;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Logical → physical header names of the three relevant columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default = "default_plate_column")]
    pub plate: String,
    #[serde(default = "default_event_column")]
    pub event: String,
    #[serde(default = "default_timestamp_column")]
    pub timestamp: String,
}

fn default_plate_column() -> String {
    "Plate".to_string()
}
fn default_event_column() -> String {
    "Event".to_string()
}
fn default_timestamp_column() -> String {
    "Timestamp".to_string()
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            plate: default_plate_column(),
            event: default_event_column(),
            timestamp: default_timestamp_column(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source_folder: PathBuf,
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    #[serde(default)]
    pub columns: ColumnMapping,
    #[serde(default = "default_entry_marker")]
    pub entry_marker: String,
    #[serde(default = "default_exit_marker")]
    pub exit_marker: String,
    #[serde(default)]
    pub timestamp_format: Option<String>,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub duplicate_entry_policy: DuplicateEntryPolicy,
    #[serde(default)]
    pub bucket_by: BucketBy,
}

fn default_output_file() -> PathBuf {
    PathBuf::from("output/parking_durations.xlsx")
}
fn default_entry_marker() -> String {
    "01 ENTRY".to_string()
}
fn default_exit_marker() -> String {
    "02 EXIT".to_string()
}

/// Command-line overrides applied on top of the configuration file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub source_folder: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub timestamp_format: Option<String>,
    pub recursive: bool,
}

impl Config {
    /// Load the JSON configuration file. Relative paths inside it are
    /// resolved against the directory containing the file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| {
            AppError::Config(format!(
                "configuration file '{}' was not found; create one with `parkagg init`",
                path.display()
            ))
        })?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| AppError::ConfigParse(path.display().to_string(), e))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.source_folder = resolve_path(base, &config.source_folder);
        config.output_file = resolve_path(base, &config.output_file);
        config.entry_marker = config.entry_marker.trim().to_uppercase();
        config.exit_marker = config.exit_marker.trim().to_uppercase();

        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(folder) = &overrides.source_folder {
            self.source_folder = folder.clone();
        }
        if let Some(file) = &overrides.output_file {
            self.output_file = file.clone();
        }
        if let Some(fmt) = &overrides.timestamp_format {
            self.timestamp_format = Some(fmt.clone());
        }
        if overrides.recursive {
            self.recursive = true;
        }
    }

    /// Validate the loaded configuration; returns every problem found.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !self.source_folder.is_dir() {
            problems.push(format!(
                "source folder '{}' does not exist",
                self.source_folder.display()
            ));
        }
        if self.entry_marker.is_empty() {
            problems.push("entry_marker is empty".to_string());
        }
        if self.exit_marker.is_empty() {
            problems.push("exit_marker is empty".to_string());
        }
        if !self.entry_marker.is_empty() && self.entry_marker == self.exit_marker {
            problems.push("entry_marker and exit_marker are identical".to_string());
        }
        problems
    }

    pub fn row_schema(&self) -> RowSchema {
        RowSchema {
            plate_column: self.columns.plate.clone(),
            event_column: self.columns.event.clone(),
            timestamp_column: self.columns.timestamp.clone(),
            entry_marker: self.entry_marker.clone(),
            exit_marker: self.exit_marker.clone(),
            timestamp_format: self.timestamp_format.clone(),
        }
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            duplicate_entry: self.duplicate_entry_policy,
            bucket_by: self.bucket_by,
        }
    }

    /// Starter configuration written by `parkagg init`.
    pub fn template() -> Self {
        Self {
            source_folder: PathBuf::from("exports"),
            output_file: default_output_file(),
            columns: ColumnMapping::default(),
            entry_marker: default_entry_marker(),
            exit_marker: default_exit_marker(),
            timestamp_format: None,
            recursive: false,
            duplicate_entry_policy: DuplicateEntryPolicy::default(),
            bucket_by: BucketBy::default(),
        }
    }
}

fn resolve_path(base: &Path, value: &Path) -> PathBuf {
    if value.is_absolute() {
        value.to_path_buf()
    } else {
        base.join(value)
    }
}
