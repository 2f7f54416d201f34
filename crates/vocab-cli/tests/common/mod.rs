//! Common utilities for CLI E2E tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// Invoke the CLI with its data directory pointed at `data_dir`.
pub fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_vocab-cli"))
        .args(args)
        .env("VOCAB_BOOSTER_DATA_DIR", data_dir)
        .env_remove("VOCAB_BOOSTER_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Invoke a CLI command and expect success.
pub fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(
        code, 0,
        "CLI command failed with code {}: {:?}\nstderr: {}",
        code, args, stderr
    );
    stdout
}

/// Invoke a CLI command and expect failure.
pub fn run_cli_failure(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert!(code != 0, "CLI command unexpectedly succeeded: {:?}", args);
    (stdout, stderr, code)
}

/// Parse JSON output from CLI.
pub fn parse_json<T: for<'de> serde::Deserialize<'de>>(json: &str) -> T {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

/// Check if string contains substring
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected '{}' to contain '{}'",
        haystack,
        needle
    );
}

pub const SAMPLE_IMPORT: &str = "\
# Trade talks resume
生成时间：2024-06-01
Negotiators discussed a tariff and a levy on steel.
单词清单：
• tariff - 关税
• levy - 征税
==========
# Rail fares
生成时间：2024-06-02
A new toll on the bridge.
单词清单：
• toll - 通行费
";

/// Write the sample import file into `dir` and return its path.
pub fn write_sample(dir: &Path) -> String {
    let path = dir.join("articles.txt");
    std::fs::write(&path, SAMPLE_IMPORT).expect("write sample import");
    path.to_string_lossy().into_owned()
}
