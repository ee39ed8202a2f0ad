#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::str::contains;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn serialize() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn fake_kctl(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("kctl");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("unable to write fake kctl");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("unable to make fake kctl executable");
    path
}

// `ktest-timed --show` prints what kctl wrote
#[test]
fn cli_show_prints_child_output() {
    let _guard = serialize();
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let program = fake_kctl(temp_dir.path(), "echo \"$@\"");

    Command::cargo_bin("ktest-timed")
        .unwrap()
        .arg("--program")
        .arg(&program)
        .args(&["--show", "pak"])
        .assert()
        .success()
        .stdout(contains("-h localhost -p 8123 get -A pak"));
}

#[test]
fn cli_show_plain_format_and_op() {
    let _guard = serialize();
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let program = fake_kctl(temp_dir.path(), "echo \"$@\"");

    Command::cargo_bin("ktest-timed")
        .unwrap()
        .arg("--program")
        .arg(&program)
        .args(&[
            "--show", "--format", "plain", "--op", "getnext", "--port", "9000", "pak",
        ])
        .assert()
        .success()
        .stdout(contains("-h localhost -p 9000 getnext pak"));
}

// `ktest-timed --show` exits with the child's status
#[test]
fn cli_show_passes_exit_code() {
    let _guard = serialize();
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let program = fake_kctl(temp_dir.path(), "echo 'get failed' >&2\nexit 4");

    Command::cargo_bin("ktest-timed")
        .unwrap()
        .arg("--program")
        .arg(&program)
        .args(&["--show", "pak"])
        .assert()
        .code(4)
        .stderr(contains("get failed"));
}

#[test]
fn cli_timing_report() {
    let _guard = serialize();
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let program = fake_kctl(temp_dir.path(), "exit 0");

    Command::cargo_bin("ktest-timed")
        .unwrap()
        .arg("--program")
        .arg(&program)
        .args(&["--iterations", "3"])
        .assert()
        .success()
        .stdout(contains("Get \"pak\" runs in"))
        .stdout(contains("average over 3 iterations"));
}

// settings come from the config file unless a flag overrides them
#[test]
fn cli_config_file() {
    let _guard = serialize();
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let program = fake_kctl(temp_dir.path(), "echo \"$@\"");
    let config_path = temp_dir.path().join("kctl.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"program": {:?}, "host": "device-1", "port": 9123}}"#,
            program.to_str().unwrap()
        ),
    )
    .expect("unable to write config");

    Command::cargo_bin("ktest-timed")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .args(&["--show", "--host", "device-2", "--format", "hex", "k1"])
        .assert()
        .success()
        .stdout(contains("-h device-2 -p 9123 get -X k1"));
}

#[test]
fn cli_unknown_format() {
    let _guard = serialize();
    Command::cargo_bin("ktest-timed")
        .unwrap()
        .args(&["--program", "/nonexistent/kctl", "--format", "octal", "pak"])
        .assert()
        .failure()
        .stderr(contains("Unknown print format"));
}

#[test]
fn cli_missing_program() {
    let _guard = serialize();
    Command::cargo_bin("ktest-timed")
        .unwrap()
        .args(&["--program", "/nonexistent/kctl", "--iterations", "2"])
        .assert()
        .failure()
        .stderr(contains("Cannot spawn kctl process"));
}

#[test]
fn cli_unknown_op() {
    let _guard = serialize();
    Command::cargo_bin("ktest-timed")
        .unwrap()
        .args(&["--op", "getall", "pak"])
        .assert()
        .failure();
}
