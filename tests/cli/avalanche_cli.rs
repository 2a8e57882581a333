use serde_json::{Value, json};

#[test]
fn avalanche_command_reports_flipped_pair() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["avalanche", "--text", "This is a test", "--rounds", "3"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let actual: Value = serde_json::from_slice(&output).expect("parse avalanche output");
    assert_eq!(actual["first_input"], json!("This is a test"));
    assert_eq!(actual["second_input"], json!("Uhis is a test"));
    assert_eq!(actual["rounds"], json!(3));
    assert_eq!(actual["first_digest"].as_str().expect("digest").len(), 64);
}

#[test]
fn avalanche_command_rejects_zero_rounds() {
    assert_cmd::cargo::cargo_bin_cmd!("trunccol")
        .args(["avalanche", "--text", "abc", "--rounds", "0"])
        .assert()
        .code(3);
}
