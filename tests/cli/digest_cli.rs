use predicates::prelude::predicate;
use serde_json::{Value, json};

#[test]
fn digest_command_hashes_text_flag() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["digest", "--text", ""])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let actual: Value = serde_json::from_slice(&output).expect("parse digest output");
    assert_eq!(
        actual,
        json!({
            "input": "",
            "digest": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        })
    );
}

#[test]
fn digest_command_reads_stdin() {
    assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .arg("digest")
        .write_stdin("abc\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn digest_command_emits_pipeline_report_on_stderr() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["--emit-pipeline", "digest", "--text", "abc"])
        .output()
        .expect("run digest");

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stderr).expect("pipeline json");
    assert_eq!(report["command"], json!("digest"));
    assert_eq!(report["steps"][1], json!("compute_sha256"));
    assert_eq!(report["parameters"][0]["source"], json!("flag"));
}
