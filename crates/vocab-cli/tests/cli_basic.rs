//! Basic CLI E2E tests.
//!
//! Each test runs the binary against its own temporary data directory.

mod common;

use common::*;

#[test]
fn test_queue_without_import_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(dir.path(), &["queue"]);
    assert_contains(&stderr, "import");
}

#[test]
fn test_import_and_queue() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(dir.path());

    let out = run_cli_success(dir.path(), &["import", &file]);
    assert_contains(&out, "imported 2 articles, 3 words");

    let json = run_cli_success(dir.path(), &["queue", "--json"]);
    let queue: Vec<serde_json::Value> = parse_json(&json);
    let ids: Vec<&str> = queue.iter().map(|w| w["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["tariff", "levy", "toll"]);
}

#[test]
fn test_import_without_words_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "# Just a title\nno list here").unwrap();
    let (_, stderr, _) = run_cli_failure(dir.path(), &["import", path.to_str().unwrap()]);
    assert_contains(&stderr, "No words found");
}

#[test]
fn test_answer_advances_session() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(dir.path());
    run_cli_success(dir.path(), &["import", &file]);

    let receipt: serde_json::Value =
        parse_json(&run_cli_success(dir.path(), &["answer", "known", "--json"]));
    assert_eq!(receipt["word"]["id"], "tariff");
    assert_eq!(receipt["progress"]["level"], 1);
    assert_eq!(receipt["previous"]["level"], 0);

    let receipt: serde_json::Value =
        parse_json(&run_cli_success(dir.path(), &["answer", "unknown", "--json"]));
    assert_eq!(receipt["word"]["id"], "levy");
    assert_eq!(receipt["progress"]["level"], 1);

    let receipt: serde_json::Value =
        parse_json(&run_cli_success(dir.path(), &["answer", "y", "--json"]));
    assert_eq!(receipt["word"]["id"], "toll");
    assert_eq!(receipt["exhausted"]["type"], "queue_exhausted");

    // Everything is now six minutes out.
    let (_, stderr, _) = run_cli_failure(dir.path(), &["answer", "known"]);
    assert_contains(&stderr, "nothing to review");

    let stats: serde_json::Value = parse_json(&run_cli_success(dir.path(), &["stats", "--json"]));
    assert_eq!(stats["scheduled"], 3);
    assert_eq!(stats["by_level"][1], 3);
}

#[test]
fn test_context_highlights_word() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(dir.path());
    run_cli_success(dir.path(), &["import", &file]);

    let out = run_cli_success(dir.path(), &["context", "levy"]);
    assert_contains(&out, "Trade talks resume");
    assert_contains(&out, "[levy]");

    run_cli_failure(dir.path(), &["context", "missing"]);
}

#[test]
fn test_export_restore_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(dir.path());
    run_cli_success(dir.path(), &["import", &file]);
    run_cli_success(dir.path(), &["answer", "known"]);

    let snapshot = dir.path().join("snapshot.json");
    run_cli_success(dir.path(), &["export", "--output", snapshot.to_str().unwrap()]);

    let other = tempfile::tempdir().unwrap();
    let out = run_cli_success(other.path(), &["restore", snapshot.to_str().unwrap()]);
    assert_contains(&out, "restored 3 words, 1 progress records");
}

#[test]
fn test_reset_clears_data() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(dir.path());
    run_cli_success(dir.path(), &["import", &file]);
    run_cli_success(dir.path(), &["reset", "--yes"]);
    run_cli_failure(dir.path(), &["stats"]);
}

#[test]
fn test_config_get_set_list() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "import.preserve_progress"]).trim(),
        "true"
    );
    run_cli_success(dir.path(), &["config", "set", "import.preserve_progress", "false"]);
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "import.preserve_progress"]).trim(),
        "false"
    );
    assert_contains(&run_cli_success(dir.path(), &["config", "list"]), "[logging]");
    run_cli_failure(dir.path(), &["config", "get", "no.such.key"]);
}

#[test]
fn test_reimport_with_reset_progress() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(dir.path());
    run_cli_success(dir.path(), &["import", &file]);
    run_cli_success(dir.path(), &["answer", "known"]);

    let kept = run_cli_success(dir.path(), &["import", &file]);
    assert_contains(&kept, "1 progress records kept");

    let dropped = run_cli_success(dir.path(), &["import", &file, "--reset-progress"]);
    assert_contains(&dropped, "0 progress records kept");
}
