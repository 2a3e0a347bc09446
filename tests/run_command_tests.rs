//! Run command tests driving the binary against a stub macpack tool
//!
//! Each test installs a `/bin/sh` script as `~/.macpack/bin/macpack` inside a
//! temporary `HOME`. Tests that write a stub and then execute it are serial:
//! a concurrent fork can hold the stub open for writing and make the exec
//! fail with "Text file busy".

#![cfg(unix)]

mod common;

use common::{TestHome, arg_of};
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn test_run_prints_stdout() {
    let home = TestHome::new();
    home.install_stub("printf 'OK'\nexit 0");

    home.cmd()
        .args(["run", "Demo.mpb"])
        .assert()
        .success()
        .stdout("OK");
}

#[test]
#[serial]
fn test_run_prints_stderr_and_ignores_exit_code() {
    let home = TestHome::new();
    home.install_stub("printf 'ERR' >&2\nexit 1");

    home.cmd()
        .args(["run", "Demo.mpb"])
        .assert()
        .success()
        .stdout("ERR");
}

#[test]
#[serial]
fn test_run_forwards_exit_code_when_asked() {
    let home = TestHome::new();
    home.install_stub("printf 'ERR' >&2\nexit 3");

    home.cmd()
        .args(["run", "Demo.mpb", "--exit-code"])
        .assert()
        .code(3)
        .stdout("ERR");
}

#[test]
#[serial]
fn test_run_passes_absolute_bundle_path() {
    let home = TestHome::new();
    home.install_stub("printf '%s|%s' \"$#\" \"$1\"");
    let bundle = home.create_bundle("apps/Demo.mpb", None);

    home.cmd()
        .args(["run", "./apps/../apps/./Demo.mpb"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("1|{}", arg_of(&bundle))));
}

#[test]
#[serial]
fn test_run_passes_nonexistent_bundle_path() {
    let home = TestHome::new();
    home.install_stub("printf '%s' \"$1\"");

    home.cmd()
        .args(["run", "missing/Nowhere.mpb"])
        .assert()
        .success()
        .stdout(predicate::str::diff(arg_of(
            &home.work.join("missing/Nowhere.mpb"),
        )));
}

#[test]
#[serial]
fn test_run_is_repeatable() {
    let home = TestHome::new();
    home.install_stub("echo \"running $1\"\necho 'done' >&2");

    let first = home.cmd().args(["run", "Demo.mpb"]).output().unwrap();
    let second = home.cmd().args(["run", "Demo.mpb"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(!first.stdout.is_empty());
}

#[test]
#[serial]
fn test_run_without_tool_fails() {
    let home = TestHome::new();

    home.cmd()
        .args(["run", "Demo.mpb"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: Bundle failed to run"))
        .stderr(predicate::str::contains(".macpack/bin/macpack"));
}

#[test]
#[serial]
fn test_run_without_bundle_fails() {
    let home = TestHome::new();
    home.install_stub("printf 'should not run'");

    home.cmd()
        .arg("run")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("No bundle selected"));
}

#[test]
#[serial]
fn test_run_invalid_utf8_output_fails() {
    let home = TestHome::new();
    home.install_stub("printf '\\377\\376'");

    home.cmd()
        .args(["run", "Demo.mpb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
#[serial]
fn test_run_verbose_logs_to_stderr() {
    let home = TestHome::new();
    home.install_stub("printf 'OK'");

    home.cmd()
        .args(["-v", "run", "Demo"])
        .assert()
        .success()
        .stdout("OK")
        .stderr(predicate::str::contains("Tool:"))
        .stderr(predicate::str::contains("does not end in .mpb"))
        .stderr(predicate::str::contains("Tool exited with code 0"));
}
