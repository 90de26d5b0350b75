use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find the CSV exports under `folder`, in lexical path order so that the
/// cross-file concatenation (and the pairing tie-break that depends on it)
/// is reproducible across runs. Spreadsheet lock files ("~$...") and hidden
/// files are skipped.
pub fn discover_source_files(folder: &Path, recursive: bool) -> AppResult<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(AppError::Config(format!(
            "source folder '{}' does not exist or is not a directory",
            folder.display()
        )));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_source_file(path))
        .collect();

    files.sort();
    Ok(files)
}

fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with("~$") || name.starts_with('.') {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}
