use assert_cmd::Command;
use predicates::str::contains;
use std::fs;

const BINARY_NAME: &str = "urlshield";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// An empty URL is rejected before any request is issued.
fn analyze_rejects_empty_url() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("analyze").arg("--url").arg("   ");
    cmd.assert()
        .failure()
        .stdout(contains("Enter a URL to analyze"));
}

#[test]
/// A dataset without the .csv suffix is rejected before any request is issued.
fn upload_rejects_non_csv_filename() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("dataset.txt");
    fs::write(&path, "url,label\n").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("upload").arg("--file").arg(&path);
    cmd.assert()
        .failure()
        .stdout(contains("Only CSV files are accepted"));
}

#[test]
/// Unknown kernels are rejected client-side.
fn train_rejects_unknown_kernel() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("train").arg("--kernel").arg("gaussian");
    cmd.assert().failure().stderr(contains("Unknown kernel"));
}
