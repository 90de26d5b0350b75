use predicates::str::contains;
use std::fs;

mod common;
use common::{pagg, setup_test_dir, write_config, write_config_with, write_export};

#[test]
fn run_aggregates_a_folder_of_exports_to_json() {
    let dir = setup_test_dir("run_json");
    let config = write_config(&dir, "out/results.json");
    write_export(
        &dir.join("exports"),
        "january.csv",
        &[
            ("ABC123", "01 ENTRY", "2024-01-05 08:00:00"),
            ("ABC123", "02 EXIT", "2024-01-05 17:30:00"),
        ],
    );

    pagg()
        .args([
            "run",
            "--config",
            &config,
            "--format",
            "json",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("[LOAD]"));

    let content = fs::read_to_string(dir.join("out/results.json")).expect("read results");
    assert!(content.contains("ABC123"));
    assert!(content.contains("\"2024-01\""));
    assert!(content.contains("570"));
    assert!(content.contains("9.5"));
}

#[test]
fn run_spanning_two_files_pairs_across_them() {
    let dir = setup_test_dir("run_two_files");
    let config = write_config(&dir, "results.json");
    // Lexical order: a_entries.csv before b_exits.csv
    write_export(
        &dir.join("exports"),
        "b_exits.csv",
        &[("AB12", "02 EXIT", "2024-01-05 12:00:00")],
    );
    write_export(
        &dir.join("exports"),
        "a_entries.csv",
        &[("ab12", "01 entry", "2024-01-05 08:00:00")],
    );

    pagg()
        .args([
            "run",
            "--config",
            &config,
            "--format",
            "json",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(dir.join("results.json")).expect("read results");
    assert!(content.contains("\"duration_minutes\": 240"));
    assert!(content.contains("\"issues\": []"));
}

#[test]
fn run_reports_issues_in_the_output() {
    let dir = setup_test_dir("run_issues");
    let config = write_config(&dir, "results.json");
    write_export(
        &dir.join("exports"),
        "events.csv",
        &[
            ("XYZ999", "02 EXIT", "2024-02-01 09:00:00"),
            ("AB12", "01 ENTRY", "2024-02-01 10:00:00"),
        ],
    );

    pagg()
        .args([
            "run",
            "--config",
            &config,
            "--format",
            "json",
            "--force",
        ])
        .assert()
        .success()
        .stderr(contains("UNMATCHED_EXIT: 1"));

    let content = fs::read_to_string(dir.join("results.json")).expect("read results");
    assert!(content.contains("UNMATCHED_EXIT"));
    assert!(content.contains("UNMATCHED_ENTRY"));
}

#[test]
fn run_fails_when_the_source_folder_has_no_files() {
    let dir = setup_test_dir("run_empty");
    let config = write_config(&dir, "results.json");

    pagg()
        .args(["run", "--config", &config])
        .assert()
        .failure()
        .stderr(contains("No usable input"));
}

#[test]
fn run_fails_when_no_event_survives_normalization() {
    let dir = setup_test_dir("run_no_events");
    let config = write_config(&dir, "results.json");
    write_export(
        &dir.join("exports"),
        "junk.csv",
        &[("AB12", "bogus", "not a time")],
    );

    pagg()
        .args(["run", "--config", &config])
        .assert()
        .failure()
        .stderr(contains("No usable input"));
}

#[test]
fn run_skips_files_with_missing_columns() {
    let dir = setup_test_dir("run_missing_cols");
    let config = write_config(&dir, "results.json");
    fs::write(
        dir.join("exports/wrong.csv"),
        "Badge,When\n123,2024-01-05 08:00:00\n",
    )
    .expect("write wrong.csv");
    write_export(
        &dir.join("exports"),
        "good.csv",
        &[
            ("AB12", "01 ENTRY", "2024-01-05 08:00:00"),
            ("AB12", "02 EXIT", "2024-01-05 09:00:00"),
        ],
    );

    pagg()
        .args([
            "run",
            "--config",
            &config,
            "--format",
            "json",
            "--force",
        ])
        .assert()
        .success()
        .stderr(contains("[SKIP]"))
        .stderr(contains("wrong.csv"));
}

#[test]
fn run_csv_format_writes_sibling_files() {
    let dir = setup_test_dir("run_csv");
    let config = write_config(&dir, "results.csv");
    write_export(
        &dir.join("exports"),
        "events.csv",
        &[
            ("AB12", "01 ENTRY", "2024-01-05 08:00:00"),
            ("AB12", "02 EXIT", "2024-01-05 09:00:00"),
        ],
    );

    pagg()
        .args([
            "run",
            "--config",
            &config,
            "--format",
            "csv",
            "--force",
        ])
        .assert()
        .success();

    let monthly = fs::read_to_string(dir.join("results_monthly.csv")).expect("monthly csv");
    assert!(monthly.contains("AB12"));
    assert!(monthly.contains("2024-01"));
    assert!(dir.join("results_intervals.csv").exists());
}

#[test]
fn run_xlsx_format_writes_a_workbook() {
    let dir = setup_test_dir("run_xlsx");
    let config = write_config(&dir, "results.xlsx");
    write_export(
        &dir.join("exports"),
        "events.csv",
        &[
            ("AB12", "01 ENTRY", "2024-01-05 08:00:00"),
            ("AB12", "02 EXIT", "2024-01-05 09:00:00"),
        ],
    );

    pagg()
        .args(["run", "--config", &config, "--force"])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(dir.join("results.xlsx").exists());
}

#[test]
fn run_honors_duplicate_entry_policy_from_config() {
    let dir = setup_test_dir("run_policy");
    let config = write_config_with(
        &dir,
        "results.json",
        &[("duplicate_entry_policy", "\"keep-earliest\"")],
    );
    write_export(
        &dir.join("exports"),
        "events.csv",
        &[
            ("Q1", "01 ENTRY", "2024-01-01 08:00:00"),
            ("Q1", "01 ENTRY", "2024-01-01 09:00:00"),
            ("Q1", "02 EXIT", "2024-01-01 10:00:00"),
        ],
    );

    pagg()
        .args([
            "run",
            "--config",
            &config,
            "--format",
            "json",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(dir.join("results.json")).expect("read results");
    // keep-earliest pairs 08:00 with 10:00
    assert!(content.contains("\"duration_minutes\": 120"));
}

#[test]
fn init_writes_a_template_and_refuses_to_overwrite() {
    let dir = setup_test_dir("init");
    let target = dir.join("config.json");
    let target_arg = target.to_string_lossy().into_owned();

    pagg()
        .args(["init", "--path", &target_arg])
        .assert()
        .success();
    assert!(target.exists());

    let content = fs::read_to_string(&target).expect("read template");
    assert!(content.contains("source_folder"));
    assert!(content.contains("01 ENTRY"));

    pagg()
        .args(["init", "--path", &target_arg])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    pagg()
        .args(["init", "--path", &target_arg, "--force"])
        .assert()
        .success();
}

#[test]
fn config_print_shows_the_resolved_configuration() {
    let dir = setup_test_dir("config_print");
    let config = write_config(&dir, "results.xlsx");

    pagg()
        .args(["config", "--config", &config, "--print"])
        .assert()
        .success()
        .stdout(contains("source_folder"))
        .stdout(contains("01 ENTRY"));
}

#[test]
fn config_check_fails_on_a_missing_source_folder() {
    let dir = setup_test_dir("config_check");
    let config = write_config(&dir, "results.xlsx");
    fs::remove_dir_all(dir.join("exports")).expect("remove exports dir");

    pagg()
        .args(["config", "--config", &config, "--check"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}
