use serde_json::{Value, json};

#[test]
fn truncate_command_reports_prefix() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["truncate", "--text", "", "--bits", "24"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let actual: Value = serde_json::from_slice(&output).expect("parse truncate output");
    assert_eq!(actual["bits"], json!(24));
    assert_eq!(actual["truncated"], json!("e3b0c4"));
    assert_eq!(actual["truncated_value"], json!(0xe3b0c4));
}

#[test]
fn truncate_command_rejects_odd_width_before_hashing() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["truncate", "--text", "abc", "--bits", "7"])
        .output()
        .expect("run truncate");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["error"], json!("input_usage_error"));
    assert_eq!(stderr["code"], json!(3));
    assert_eq!(stderr["details"]["command"], json!("truncate"));
    assert!(
        stderr["message"]
            .as_str()
            .expect("message")
            .starts_with("invalid parameter")
    );
}
