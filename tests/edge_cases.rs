//! Edge case and error handling tests for inklude


use std::fs;
use std::os::unix::fs::symlink;

use assert_cmd::Command;
use harness::{TestDir, run_inklude};
use inklude::{Error, Inklude, LoadConfig};
use predicates::prelude::*;
use serde_json::{Value, json};

fn inklude_cmd(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("inklude").expect("binary exists");
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// CLI Errors
// ============================================================================

#[test]
fn test_cli_missing_directory_fails() {
    let dir = TestDir::new();
    inklude_cmd(&dir)
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("inklude: cannot list directory"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_cli_missing_directory_optional() {
    let dir = TestDir::new();
    inklude_cmd(&dir)
        .args(["does-not-exist", "--optional", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{}\n"));
}

#[test]
fn test_cli_aggregate_missing_directory_is_empty_object() {
    let dir = TestDir::new();
    inklude_cmd(&dir)
        .args(["conf.d", "--aggregate"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{}\n"));
}

#[test]
fn test_cli_invalid_filter() {
    let dir = TestDir::new();
    inklude_cmd(&dir)
        .args(["--filter", "(unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern '(unclosed'"));
}

#[test]
fn test_cli_invalid_module() {
    let dir = TestDir::new();
    dir.add_file("broken.json", "{ nope");

    inklude_cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load module"))
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn test_cli_aggregate_rejects_scalar_module() {
    let dir = TestDir::new();
    dir.add_json("conf/name.json", &json!("just a string"));

    inklude_cmd(&dir)
        .args(["conf", "--aggregate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("module 'name' must be an object"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_base_requires_aggregate() {
    let dir = TestDir::new();
    inklude_cmd(&dir)
        .args(["--base", "base.json"])
        .assert()
        .failure();
}

// ============================================================================
// Filtering Edge Cases
// ============================================================================

#[test]
fn test_cli_filter_and_ignore() {
    let dir = TestDir::new();
    dir.add_json("keep.json", &json!(1));
    dir.add_file("README.md", "# docs");
    dir.add_json("old/stale.json", &json!(2));

    let (stdout, _stderr, success) = run_inklude(
        dir.path(),
        &["--json", "--filter", r"^(.+)\.json$", "-I", "old"],
    );
    assert!(success);
    let value: Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value, json!({"keep": 1}));
}

#[test]
fn test_cli_custom_exclude_includes_vcs_dirs() {
    let dir = TestDir::new();
    dir.add_json(".svn/meta.json", &json!({"rev": 3}));
    dir.add_json("skip/x.json", &json!({}));

    let (stdout, _stderr, success) = run_inklude(dir.path(), &["--json", "--exclude", "^skip$"]);
    assert!(success);
    let value: Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value, json!({".svn": {"meta": {"rev": 3}}}));
}

#[test]
fn test_hidden_files_are_loaded() {
    let dir = TestDir::new();
    dir.add_json(".env.json", &json!({"secret": false}));

    let tree = Inklude::json().load(&LoadConfig::new(dir.path())).unwrap();
    assert!(tree.contains(".env"));
}

#[test]
fn test_identity_filter_keeps_extensions() {
    let dir = TestDir::new();
    dir.add_json("a.json", &json!(1));

    let config = LoadConfig::new(dir.path()).with_filter("(.*)").unwrap();
    let tree = Inklude::json().load(&config).unwrap();
    assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["a.json"]);
}

#[test]
fn test_file_and_directory_name_collision() {
    let dir = TestDir::new();
    dir.add_json("db.json", &json!({"from": "file"}));
    dir.add_json("db/inner.json", &json!({"from": "dir"}));

    // "db" sorts before "db.json", so the file wins
    let tree = Inklude::json().load(&LoadConfig::new(dir.path())).unwrap();
    assert_eq!(tree.to_value(), json!({"db": {"from": "file"}}));
}

#[test]
fn test_cli_filter_glob() {
    let dir = TestDir::new();
    dir.add_json("app.json", &json!({"port": 80}));
    dir.add_file("notes.txt", "not a module");

    let output = inklude_cmd(&dir)
        .args(["--json", "--filter-glob", "*.json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, json!({"app": {"port": 80}}));
}

#[test]
fn test_cli_filter_glob_conflicts_with_filter() {
    let dir = TestDir::new();
    inklude_cmd(&dir)
        .args(["--filter", "(.*)", "--filter-glob", "*.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_is_loaded() {
    let dir = TestDir::new();
    dir.add_json("real.json", &json!({"v": 1}));
    symlink(dir.path().join("real.json"), dir.path().join("alias.json")).unwrap();

    let tree = Inklude::json().load(&LoadConfig::new(dir.path())).unwrap();
    assert_eq!(
        tree.to_value(),
        json!({"alias": {"v": 1}, "real": {"v": 1}})
    );
}

#[test]
fn test_broken_symlink_fails_even_when_optional() {
    let dir = TestDir::new();
    dir.add_json("real.json", &json!({}));
    symlink("nonexistent.json", dir.path().join("broken.json")).unwrap();

    let err = Inklude::json()
        .optional(&LoadConfig::new(dir.path()))
        .unwrap_err();
    assert!(matches!(err, Error::Classify { .. }), "got {err:?}");
}

#[test]
fn test_self_referential_symlink_fails() {
    let dir = TestDir::new();
    dir.add_dir("sub");
    symlink("..", dir.path().join("sub").join("parent")).unwrap();

    let (_stdout, stderr, success) = run_inklude(dir.path(), &["--json"]);
    assert!(!success, "cycle should fail");
    assert!(stderr.contains("symlink cycle"), "got: {}", stderr);
}

// ============================================================================
// Larger Trees
// ============================================================================

#[test]
fn test_wide_directory() {
    let dir = TestDir::new();
    for i in 0..100 {
        let mut module = serde_json::Map::new();
        module.insert(format!("k{i}"), json!(i));
        dir.add_json(&format!("m{i:03}.json"), &Value::Object(module));
    }

    let tree = Inklude::json()
        .load(&LoadConfig::new(dir.path()).with_jobs(4))
        .unwrap();
    assert_eq!(tree.len(), 100);

    let merged = Inklude::json()
        .aggregate(&LoadConfig::new(dir.path()), None)
        .unwrap();
    assert_eq!(merged.len(), 100);
    assert_eq!(merged.get("k99"), Some(&json!(99)));
}

#[test]
fn test_deep_directory() {
    let dir = TestDir::new();
    let deep = (0..30).map(|i| format!("d{i}")).collect::<Vec<_>>().join("/");
    dir.add_json(&format!("{deep}/leaf.json"), &json!(true));

    let tree = Inklude::json().load(&LoadConfig::new(dir.path())).unwrap();
    let lookup = format!("{deep}/leaf");
    assert_eq!(
        tree.lookup(&lookup).and_then(|n| n.as_module()),
        Some(&json!(true))
    );
    assert_eq!(tree.counts(), (30, 1));
}

#[test]
fn test_empty_root_directory() {
    let dir = TestDir::new();
    fs::create_dir(dir.path().join("empty")).unwrap();

    let (stdout, _stderr, success) = run_inklude(dir.path(), &["empty"]);
    assert!(success);
    assert_eq!(stdout, "empty\n\n0 directories, 0 modules\n");
}
