use std::fs;

use predicates::prelude::predicate;
use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn sweep_command_writes_json_table() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["sweep", "--bits", "8,10,12", "--seed", "5"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let table: Value = serde_json::from_slice(&output).expect("parse sweep output");
    let rows = table.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    let bits: Vec<u64> = rows
        .iter()
        .map(|row| row["bits"].as_u64().expect("bits"))
        .collect();
    assert_eq!(bits, vec![8, 10, 12]);
    for row in rows {
        assert!(row["inputs_examined"].as_u64().expect("inputs") >= 2);
        assert!(row["elapsed_seconds"].as_f64().expect("elapsed") >= 0.0);
    }
}

#[test]
fn sweep_command_reads_config_and_writes_csv() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("sweep.toml");
    fs::write(&config, "bits = [12, 8]\nseed = 9\n").expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["sweep", "--to", "csv", "--config"])
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with(
            "bits,inputs_examined,elapsed_seconds,collided,expected_inputs\n8,",
        ));
}

#[test]
fn sweep_command_writes_output_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sweep.jsonl");

    assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["sweep", "--bits", "8,10", "--seed", "2", "--output"])
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let text = fs::read_to_string(&path).expect("read output");
    let rows: Vec<Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("jsonl row"))
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["bits"], json!(10));
}

#[test]
fn sweep_command_rejects_invalid_width_without_output() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["sweep", "--bits", "8,260"])
        .output()
        .expect("run sweep");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["error"], json!("input_usage_error"));
    assert_eq!(stderr["details"]["command"], json!("sweep"));
}

#[test]
fn sweep_command_rejects_unreachable_width_before_any_point() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args([
            "sweep",
            "--bits",
            "8,16",
            "--alphabet",
            "ab",
            "--input-length",
            "1",
        ])
        .timeout(std::time::Duration::from_secs(10))
        .output()
        .expect("run sweep");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["code"], json!(3));
    assert_eq!(stderr["details"]["command"], json!("sweep"));
}

#[test]
fn sweep_command_rejects_unknown_config_keys() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("sweep.toml");
    fs::write(&config, "widths = [8]\n").expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["sweep", "--config"])
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn sweep_command_emits_pipeline_with_parameter_sources() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("sweep.toml");
    fs::write(&config, "seed = 3\n").expect("write config");

    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["--emit-pipeline", "sweep", "--bits", "8", "--config"])
        .arg(&config)
        .output()
        .expect("run sweep");

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stderr).expect("pipeline json");
    assert_eq!(report["command"], json!("sweep"));
    let parameters = report["parameters"].as_array().expect("parameters");
    let seed = parameters
        .iter()
        .find(|parameter| parameter["name"] == json!("seed"))
        .expect("seed parameter");
    assert_eq!(seed["source"], json!("config"));
    assert!(
        report["deterministic_guards"]
            .as_array()
            .expect("guards")
            .contains(&json!("sequential_sweep_points"))
    );
}
