//! Integration tests for nodeforge-cli.
//!
//! These run the compiled binary end to end in temporary directories, so
//! they exercise argument parsing, the scaffold flow, and exit codes
//! exactly as a user would.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn nodeforge() -> Command {
    Command::cargo_bin("nodeforge").unwrap()
}

#[test]
fn help_flag_exits_zero() {
    nodeforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodeforge"))
        .stdout(predicate::str::contains("--lang"));
}

#[test]
fn version_flag_exits_zero() {
    nodeforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_name_exits_one() {
    nodeforge().assert().failure().code(1);
}

#[test]
fn scaffolds_javascript_project() {
    let temp = TempDir::new().unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["demo-api", "--lang", "js", "--yes"])
        .assert()
        .success();

    let root = temp.path().join("demo-api");
    for dir in [
        "src",
        "src/controllers",
        "src/middlewares",
        "src/models",
        "src/routes",
        "src/services",
    ] {
        assert!(root.join(dir).is_dir(), "missing directory: {dir}");
    }
    for file in [
        "src/app.js",
        "server.js",
        ".env",
        ".gitignore",
        "package.json",
        "README.md",
    ] {
        assert!(root.join(file).is_file(), "missing file: {file}");
    }
}

#[test]
fn package_manifest_carries_project_name() {
    let temp = TempDir::new().unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["demo-api", "--lang", "js", "--yes"])
        .assert()
        .success();

    let raw = fs::read_to_string(temp.path().join("demo-api/package.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(manifest["name"], "demo-api");
    assert_eq!(manifest["main"], "server.js");
}

#[test]
fn env_file_lists_expected_variables() {
    let temp = TempDir::new().unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["demo-api", "--lang", "js", "--yes"])
        .assert()
        .success();

    let env = fs::read_to_string(temp.path().join("demo-api/.env")).unwrap();
    assert!(env.contains("PORT="));
    assert!(env.contains("DATABASE_URL="));
    assert!(env.contains("SECRET_KEY="));
}

#[test]
fn scaffolds_typescript_project() {
    let temp = TempDir::new().unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["demo-api", "--lang", "ts", "--yes"])
        .assert()
        .success();

    let root = temp.path().join("demo-api");
    assert!(root.join("src/server.ts").is_file());
    assert!(root.join("src/app.ts").is_file());
    assert!(root.join("tsconfig.json").is_file());
    assert!(root.join("nodemon.json").is_file());
    // The compiled entry lives under dist/; there is no root bootstrap.
    assert!(!root.join("server.js").exists());
}

#[test]
fn existing_directory_exits_one_and_is_untouched() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("existing-api")).unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["existing-api", "--lang", "js", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let entries: Vec<_> = fs::read_dir(temp.path().join("existing-api"))
        .unwrap()
        .collect();
    assert!(entries.is_empty(), "pre-existing directory was modified");
}

#[test]
fn failure_without_verbose_prints_the_hint() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("existing-api")).unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["existing-api", "--lang", "js", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use -v / --verbose"));
}

#[test]
fn verbose_failure_shows_the_chain_instead_of_the_hint() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("existing-api")).unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["-v", "existing-api", "--lang", "js", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}

#[test]
fn dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["demo-api", "--lang", "js", "--dry-run", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("demo-api").exists());
}

#[test]
fn invalid_name_exits_one() {
    let temp = TempDir::new().unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["bad/name", "--lang", "js", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn quiet_flag_silences_stdout() {
    let temp = TempDir::new().unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["-q", "demo-api", "--lang", "js", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("demo-api/package.json").is_file());
}

#[test]
fn config_file_sets_default_language() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("nodeforge.toml");
    fs::write(&config_path, "[defaults]\nlanguage = \"typescript\"\n").unwrap();

    nodeforge()
        .current_dir(temp.path())
        .args(["demo-api", "--yes", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    assert!(temp.path().join("demo-api/tsconfig.json").is_file());
}
