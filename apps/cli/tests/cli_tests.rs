//! CLI 集成测试（不需要硬件）

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn retaliation(config_home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("retaliation").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    let home = tempfile::tempdir().unwrap();
    retaliation(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_aim_missing_pitch_fails() {
    let home = tempfile::tempdir().unwrap();
    retaliation(&home)
        .args(["aim", "3000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<PITCH>"));
}

#[test]
fn test_builtin_sets_listed() {
    let home = tempfile::tempdir().unwrap();
    retaliation(&home)
        .args(["sets", "--names-only"])
        .assert()
        .success()
        .stdout(predicate::str::diff("chris\ntom\nwill\n"));
}

#[test]
fn test_sets_from_config_file() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[command_sets]
desk = [
    { command = "zero" },
    { command = "right", value = 1200 },
    { command = "fire", value = 2 },
    { command = "zero" },
]
"#,
    )
    .unwrap();

    retaliation(&home)
        .arg("sets")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "desk: zero(0), right(1200), fire(2), zero(0)",
        ));
}

#[test]
fn test_unknown_command_set_fails() {
    let home = tempfile::tempdir().unwrap();
    retaliation(&home)
        .args(["run", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command set: 'nobody'"));
}

#[test]
fn test_unknown_primitive_command_fails() {
    let home = tempfile::tempdir().unwrap();
    retaliation(&home)
        .args(["exec", "spin", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command: 'spin'"));
}

#[test]
fn test_invalid_config_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("broken.toml");
    fs::write(&path, "[command_sets]\ndesk = 5\n").unwrap();

    retaliation(&home)
        .args(["sets", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.toml"));
}

fn write_config_with_unknown_step(home: &tempfile::TempDir) -> std::path::PathBuf {
    let path = home.path().join("bad.toml");
    fs::write(
        &path,
        r#"
[command_sets]
bad = [{ command = "spin" }, { command = "zero" }]
"#,
    )
    .unwrap();
    path
}

#[test]
fn test_unknown_config_step_warns_on_stderr() {
    let home = tempfile::tempdir().unwrap();
    let path = write_config_with_unknown_step(&home);

    retaliation(&home)
        .args(["sets", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("bad: spin(0), zero(0)"))
        .stderr(predicate::str::contains(
            "Command set 'bad' step 0: unknown command 'spin'",
        ));
}

#[test]
fn test_rust_log_overrides_default_levels() {
    let home = tempfile::tempdir().unwrap();
    let path = write_config_with_unknown_step(&home);

    retaliation(&home)
        .env("RUST_LOG", "retaliation=error")
        .args(["sets", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command").not());
}

#[test]
fn test_bare_yaw_without_pitch_fails() {
    let home = tempfile::tempdir().unwrap();
    retaliation(&home)
        .arg("3000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<PITCH>"));
}
