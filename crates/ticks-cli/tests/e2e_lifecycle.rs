//! E2E CLI workflow tests for `tk`.
//!
//! Each test runs the binary as a subprocess in an isolated temp directory.
//! `tk` keeps no state, so multi-step flows pipe the JSON document from one
//! invocation into the next with `--file -`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the `tk` binary, rooted in `dir`.
///
/// The user config directory is redirected into `dir` so a developer's own
/// `ticks/config.toml` never leaks into a test.
fn tk_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tk"));
    cmd.current_dir(dir);
    cmd.env("HOME", dir);
    cmd.env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd.env("TICKS_LOG", "error");
    cmd.env_remove("FORMAT");
    cmd
}

/// Run `tk <args> --json` with `doc` on stdin and return the resulting document.
fn step(dir: &Path, doc: &str, args: &[&str]) -> String {
    let output = tk_cmd(dir)
        .args(["--file", "-", "--json"])
        .args(args)
        .write_stdin(doc.to_string())
        .output()
        .expect("tk should not crash");
    assert!(
        output.status.success(),
        "tk {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

/// Render a document with `show --format text`.
fn render(dir: &Path, doc: &str) -> String {
    let output = tk_cmd(dir)
        .args(["--file", "-", "--format", "text", "show"])
        .write_stdin(doc.to_string())
        .output()
        .expect("tk should not crash");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

fn today(dir: &Path) -> String {
    let doc = r#"{"title":"Today","items":[]}"#;
    step(dir, doc, &["add", "Buy milk", "Clean room", "Go to theater"])
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn fresh_list_uses_default_title() {
    let dir = TempDir::new().expect("temp dir");
    tk_cmd(dir.path())
        .args(["--format", "text", "show"])
        .assert()
        .success()
        .stdout("---- Todos ----\n\n");
}

#[test]
fn project_config_sets_default_title() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::create_dir_all(dir.path().join(".ticks")).expect("create .ticks");
    std::fs::write(
        dir.path().join(".ticks/config.toml"),
        "[list]\ndefault_title = \"Groceries\"\n",
    )
    .expect("write config");

    tk_cmd(dir.path())
        .args(["--format", "text", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---- Groceries ----"));
}

#[test]
fn add_mark_and_render() {
    let dir = TempDir::new().expect("temp dir");
    let doc = today(dir.path());
    let doc = step(dir.path(), &doc, &["done-at", "0"]);
    let doc = step(dir.path(), &doc, &["done", "Go to theater"]);

    assert_eq!(
        render(dir.path(), &doc),
        "---- Today ----\n[X] Buy milk\n[ ] Clean room\n[X] Go to theater\n"
    );

    let doc = step(dir.path(), &doc, &["undone-all"]);
    assert_eq!(
        render(dir.path(), &doc),
        "---- Today ----\n[ ] Buy milk\n[ ] Clean room\n[ ] Go to theater\n"
    );
}

#[test]
fn list_file_is_read_but_never_written() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("today.json");
    let original = r#"{"title":"Home","items":[{"title":"Sweep"}]}"#;
    std::fs::write(&path, original).expect("write document");

    tk_cmd(dir.path())
        .args(["--file", "today.json", "--format", "text", "done-all"])
        .assert()
        .success()
        .stdout("---- Home ----\n[X] Sweep\n");

    assert_eq!(std::fs::read_to_string(&path).expect("read back"), original);
}

#[test]
fn remove_at_shifts_items_down() {
    let dir = TempDir::new().expect("temp dir");
    let doc = step(dir.path(), &today(dir.path()), &["remove-at", "1"]);

    let json: Value = serde_json::from_str(&doc).expect("valid JSON");
    let titles: Vec<&str> = json["items"]
        .as_array()
        .expect("items array")
        .iter()
        .filter_map(|item| item["title"].as_str())
        .collect();
    assert_eq!(titles, ["Buy milk", "Go to theater"]);
}

#[test]
fn shift_and_pop() {
    let dir = TempDir::new().expect("temp dir");
    let doc = step(dir.path(), &today(dir.path()), &["shift"]);
    let doc = step(dir.path(), &doc, &["pop"]);
    assert_eq!(render(dir.path(), &doc), "---- Today ----\n[ ] Clean room\n");
}

#[test]
fn shift_on_empty_list_is_not_an_error() {
    let dir = TempDir::new().expect("temp dir");
    tk_cmd(dir.path())
        .args(["--format", "text", "shift"])
        .assert()
        .success()
        .stdout("---- Todos ----\n\n")
        .stderr(predicate::str::contains("nothing removed"));
}

#[test]
fn quiet_suppresses_notices() {
    let dir = TempDir::new().expect("temp dir");
    tk_cmd(dir.path())
        .args(["-q", "--format", "text", "add", "x"])
        .assert()
        .success()
        .stderr("");
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn at_first_last_and_find() {
    let dir = TempDir::new().expect("temp dir");
    let doc = today(dir.path());

    let query = |args: &[&str]| -> Value {
        let output = tk_cmd(dir.path())
            .args(["--file", "-", "--json"])
            .args(args)
            .write_stdin(doc.clone())
            .output()
            .expect("tk should not crash");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("valid JSON")
    };

    assert_eq!(
        query(&["at", "1"]),
        serde_json::json!({"index": 1, "title": "Clean room", "done": false})
    );
    assert_eq!(query(&["first"])["title"], "Buy milk");
    assert_eq!(query(&["last"])["index"], 2);
    assert_eq!(query(&["find", "Go to theater"])["index"], 2);
    assert_eq!(query(&["find", "Nothing"]), Value::Null);
}

#[test]
fn filter_partitions_the_list() {
    let dir = TempDir::new().expect("temp dir");
    let doc = step(dir.path(), &today(dir.path()), &["done-at", "1"]);

    let done = step(dir.path(), &doc, &["filter", "--done"]);
    let pending = step(dir.path(), &doc, &["filter", "--not-done", "--title", "Pending"]);

    assert_eq!(render(dir.path(), &done), "---- Today ----\n[X] Clean room\n");
    assert_eq!(
        render(dir.path(), &pending),
        "---- Pending ----\n[ ] Buy milk\n[ ] Go to theater\n"
    );
}

#[test]
fn marking_unknown_title_changes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let doc = today(dir.path());
    let after = step(dir.path(), &doc, &["done", "X"]);
    assert_eq!(render(dir.path(), &after), render(dir.path(), &doc));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_index_fails_with_code() {
    let dir = TempDir::new().expect("temp dir");
    let doc = today(dir.path());

    for index in ["3", "-1", "1.5", "abc"] {
        let output = tk_cmd(dir.path())
            .args(["--file", "-", "--json", "at", index])
            .write_stdin(doc.clone())
            .output()
            .expect("tk should not crash");
        assert!(!output.status.success(), "index {index} should fail");

        let err: Value = serde_json::from_slice(&output.stderr).expect("JSON error on stderr");
        assert_eq!(err["error"]["error_code"], "E2001");
        assert_eq!(err["error"]["message"], format!("invalid index: {index}"));
    }
}

#[test]
fn failed_mutation_prints_no_document() {
    let dir = TempDir::new().expect("temp dir");
    tk_cmd(dir.path())
        .args(["--file", "-", "--format", "text", "remove-at", "9"])
        .write_stdin(today(dir.path()))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid index: 9"));
}

#[test]
fn non_item_element_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let output = tk_cmd(dir.path())
        .args(["--file", "-", "--json", "show"])
        .write_stdin(r#"{"title":"T","items":[{"title":"ok"},"oops"]}"#)
        .output()
        .expect("tk should not crash");
    assert!(!output.status.success());

    let err: Value = serde_json::from_slice(&output.stderr).expect("JSON error on stderr");
    assert_eq!(err["error"]["error_code"], "E2002");
    assert!(
        err["error"]["message"]
            .as_str()
            .is_some_and(|m| m.contains("element 1"))
    );
}

#[test]
fn malformed_project_config_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::create_dir_all(dir.path().join(".ticks")).expect("create .ticks");
    std::fs::write(dir.path().join(".ticks/config.toml"), "list = [").expect("write config");

    tk_cmd(dir.path())
        .args(["--format", "text", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_is_read_from_isolated_dir() {
    let dir = TempDir::new().expect("temp dir");
    let config_dir = dir.path().join(".config/ticks");
    std::fs::create_dir_all(&config_dir).expect("create user config dir");
    std::fs::write(config_dir.join("config.toml"), "output = \"json\"\n")
        .expect("write user config");

    let output = tk_cmd(dir.path())
        .arg("show")
        .output()
        .expect("tk should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("JSON from user config");
    assert_eq!(json["title"], "Todos");
}

#[cfg(target_os = "linux")]
#[test]
fn malformed_user_config_stays_inside_the_test_dir() {
    let broken = TempDir::new().expect("temp dir");
    let config_dir = broken.path().join(".config/ticks");
    std::fs::create_dir_all(&config_dir).expect("create user config dir");
    std::fs::write(config_dir.join("config.toml"), "output = [").expect("write user config");

    tk_cmd(broken.path())
        .args(["--format", "text", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));

    let clean = TempDir::new().expect("temp dir");
    tk_cmd(clean.path())
        .args(["--format", "text", "show"])
        .assert()
        .success()
        .stdout("---- Todos ----\n\n");
}

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().expect("temp dir");
    tk_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tk"));
}
