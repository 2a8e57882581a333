use serde_json::{Value, json};
use trunccol::engine::truncate::record;

#[test]
fn collide_command_prints_verifiable_pair() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["collide", "--bits", "16", "--seed", "4"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let actual: Value = serde_json::from_slice(&output).expect("parse collide output");
    let first = actual["first_input"].as_str().expect("first");
    let second = actual["second_input"].as_str().expect("second");
    assert_ne!(first, second);
    assert_eq!(
        record(first, 16).expect("first").truncated,
        record(second, 16).expect("second").truncated
    );
    assert_eq!(actual["truncated"].as_str().expect("truncated").len(), 4);
    assert!(actual["inputs_examined"].as_u64().expect("inputs") >= 2);
}

#[test]
fn collide_command_is_reproducible_with_seed() {
    let run = || {
        assert_cmd::cargo::cargo_bin_cmd!("trunccol")
            .args(["collide", "--bits", "12", "--seed", "10"])
            .output()
            .expect("run collide")
    };
    let first: Value = serde_json::from_slice(&run().stdout).expect("first json");
    let second: Value = serde_json::from_slice(&run().stdout).expect("second json");
    assert_eq!(first["first_input"], second["first_input"]);
    assert_eq!(first["second_input"], second["second_input"]);
    assert_eq!(first["inputs_examined"], second["inputs_examined"]);
}

#[test]
fn collide_command_reports_expired_search_with_exit_two() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["collide", "--bits", "64", "--seed", "1", "--max-draws", "25"])
        .output()
        .expect("run collide");

    assert_eq!(output.status.code(), Some(2));
    let actual: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(actual["collided"], json!(false));
    assert_eq!(actual["inputs_examined"], json!(25));
}

#[test]
fn collide_command_rejects_zero_bits() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["collide", "--bits", "0"])
        .output()
        .expect("run collide");

    assert_eq!(output.status.code(), Some(3));
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["error"], json!("input_usage_error"));
    assert_eq!(stderr["code"], json!(3));
    assert_eq!(stderr["details"]["command"], json!("collide"));
}

#[test]
fn collide_command_rejects_single_input_space() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["collide", "--bits", "8", "--alphabet", "a", "--input-length", "1"])
        .timeout(std::time::Duration::from_secs(10))
        .output()
        .expect("run collide");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["code"], json!(3));
    assert!(
        stderr["message"]
            .as_str()
            .expect("message")
            .contains("at least two")
    );
}

#[test]
fn collide_command_requires_limit_when_no_collision_exists() {
    let unbounded = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["collide", "--bits", "16", "--alphabet", "ab", "--input-length", "1"])
        .timeout(std::time::Duration::from_secs(10))
        .output()
        .expect("run collide");
    assert_eq!(unbounded.status.code(), Some(3));
    let stderr: Value = serde_json::from_slice(&unbounded.stderr).expect("stderr json");
    assert!(
        stderr["message"]
            .as_str()
            .expect("message")
            .contains("set max_draws or timeout_ms")
    );

    let bounded = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args([
            "collide",
            "--bits",
            "16",
            "--alphabet",
            "ab",
            "--input-length",
            "1",
            "--max-draws",
            "20",
        ])
        .output()
        .expect("run collide");
    assert_eq!(bounded.status.code(), Some(2));
}
