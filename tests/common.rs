#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn pagg() -> Command {
    cargo_bin_cmd!("parkagg")
}

/// Create a unique, empty working directory inside the system temp dir.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_parkagg", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write a CSV export with the default Plate/Event/Timestamp header.
pub fn write_export(dir: &Path, name: &str, rows: &[(&str, &str, &str)]) -> PathBuf {
    let mut content = String::from("Plate,Event,Timestamp\n");
    for (plate, event, ts) in rows {
        content.push_str(&format!("{},{},{}\n", plate, event, ts));
    }
    let path = dir.join(name);
    fs::write(&path, content).expect("write export fixture");
    path
}

/// Write a config.json pointing at `exports/` inside `dir`, with the given
/// output file name (relative paths resolve against the config location).
/// Returns the config path as a String ready for CLI args.
pub fn write_config(dir: &Path, output_file: &str) -> String {
    write_config_with(dir, output_file, &[])
}

pub fn write_config_with(dir: &Path, output_file: &str, extra: &[(&str, &str)]) -> String {
    let mut fields = vec![
        ("\"source_folder\"".to_string(), "\"exports\"".to_string()),
        (
            "\"output_file\"".to_string(),
            format!("\"{}\"", output_file),
        ),
    ];
    for (key, value) in extra {
        fields.push((format!("\"{}\"", key), value.to_string()));
    }

    let body = fields
        .iter()
        .map(|(k, v)| format!("  {}: {}", k, v))
        .collect::<Vec<_>>()
        .join(",\n");

    let path = dir.join("config.json");
    fs::write(&path, format!("{{\n{}\n}}\n", body)).expect("write config fixture");
    fs::create_dir_all(dir.join("exports")).expect("create exports dir");
    path.to_string_lossy().into_owned()
}
