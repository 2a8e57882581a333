use predicates::prelude::predicate;
use serde_json::Value;

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("digest"))
        .stdout(predicate::str::contains("truncate"))
        .stdout(predicate::str::contains("collide"))
        .stdout(predicate::str::contains("sweep"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_emits_usage_error_envelope() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .arg("plot")
        .output()
        .expect("run trunccol");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["error"], "input_usage_error");
    assert_eq!(stderr["code"], 3);
    assert_eq!(stderr["details"]["kind"], "cli_parse_error");
}

#[test]
fn malformed_log_filter_is_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["--log-level", "trunccol=loud", "digest", "--text", "x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid log filter"));
}
