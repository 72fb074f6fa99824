//! Integration tests for the `pycalc` binary

use assert_cmd::Command;
use predicates::prelude::*;

fn pycalc() -> Command {
    let mut cmd = Command::cargo_bin("pycalc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_eval_prints_result() {
    pycalc()
        .args(["--eval", "2+3*4"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_eval_float_result() {
    pycalc()
        .args(["-e", "7/2"])
        .assert()
        .success()
        .stdout("3.5\n");
}

#[test]
fn test_eval_error_exit_code() {
    pycalc()
        .args(["--eval", "5/0"])
        .assert()
        .code(1)
        .stdout("ERROR\n")
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_eval_quiet_suppresses_warning() {
    pycalc()
        .args(["-q", "--eval", "2+"])
        .assert()
        .failure()
        .stdout("ERROR\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_eval_json_ok() {
    pycalc()
        .args(["--eval", "(1+2)*3", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""display":"9""#))
        .stdout(predicate::str::contains(r#""ok":true"#))
        .stdout(predicate::str::contains(r#""error":null"#));
}

#[test]
fn test_eval_json_error() {
    let output = pycalc()
        .args(["-q", "--eval", "1 + 1", "--json"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["expression"], "1 + 1");
    assert_eq!(json["display"], "ERROR");
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "Unexpected character: ' '");
}

#[test]
fn test_json_without_eval_rejected() {
    pycalc()
        .arg("--json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--eval"));
}

#[test]
fn test_eval_log_file() {
    let path = std::env::temp_dir().join(format!("pycalc-cli-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    pycalc()
        .args(["-vv", "--eval", "6*7", "--log-file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("42\n");

    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.contains("evaluated"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_help() {
    pycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--eval"))
        .stdout(predicate::str::contains("--no-mouse"));
}
