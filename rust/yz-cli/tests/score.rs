use std::process::{Command, Output};

use serde_json::Value;

fn yz_bin() -> String {
    env!("CARGO_BIN_EXE_yz").to_string()
}

fn run(args: &[&str]) -> Output {
    Command::new(yz_bin()).args(args).output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

#[test]
fn score_prints_bare_number() {
    let out = run(&["score", "6, 2, 2, 2, 6", "FULL_HOUSE"]);
    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(stdout(&out), "18");

    let out = run(&["score", "53665", "pair"]);
    assert_eq!(stdout(&out), "12");
}

#[test]
fn score_json_report() {
    let out = run(&["score", "3 3 3 3 5", "three_of_a_kind", "--json"]);
    assert!(out.status.success());
    let v: Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["dice"], serde_json::json!([3, 3, 3, 3, 5]));
    assert_eq!(v["category"], "three_of_a_kind");
    assert_eq!(v["score"], 9);
}

#[test]
fn invalid_dice_reports_range() {
    let out = run(&["score", "0, 3, 4, 5, 1", "chance"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("between 1 and 6"), "stderr:\n{err}");
}

#[test]
fn unknown_category_fails() {
    let out = run(&["score", "1, 2, 3, 4, 5", "straight"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("unknown score category"), "stderr:\n{err}");
}

#[test]
fn missing_arguments_is_usage_error() {
    let out = run(&["score", "1, 2, 3, 4, 5"]);
    assert_eq!(out.status.code(), Some(2));
    let out = run(&["score", "1, 2, 3, 4, 5", "chance", "--bogus"]);
    assert_eq!(out.status.code(), Some(2));
    let out = run(&["frobnicate"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn config_overrides_fixed_rewards() {
    let td = tempfile::tempdir().expect("tempdir");
    let path = td.path().join("rules.yaml");
    std::fs::write(&path, "scoring:\n  yatzy: 75\n").unwrap();
    let path = path.to_str().unwrap();

    let out = run(&["score", "4, 4, 4, 4, 4", "yatzy", "--config", path]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "75");

    let out = run(&["score", "1, 2, 3, 4, 5", "small_straight", "--config", path]);
    assert_eq!(stdout(&out), "15");
}

#[test]
fn missing_config_file_fails() {
    let out = run(&["score", "4, 4, 4, 4, 4", "yatzy", "--config", "no/such/file.yaml"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn table_lists_every_category() {
    let out = run(&["table", "6, 6, 6, 2, 2"]);
    assert!(out.status.success());
    let s = stdout(&out);
    assert!(s.starts_with("dice: 6, 6, 6, 2, 2"));
    assert_eq!(s.lines().count(), 1 + 15 + 1);
    assert!(s.contains("full_house"));
    assert!(s.ends_with("best: full_house (30)"));
}

#[test]
fn table_json() {
    let out = run(&["table", "2,3,4,5,6", "--json"]);
    assert!(out.status.success());
    let v: Value = serde_json::from_str(&stdout(&out)).unwrap();
    let rows = v["scores"].as_array().unwrap();
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0]["category"], "ones");
    assert_eq!(rows[11]["category"], "large_straight");
    assert_eq!(rows[11]["score"], 20);
    assert_eq!(v["best"]["category"], "large_straight");
}

#[test]
fn categories_in_card_order() {
    let out = run(&["categories"]);
    assert!(out.status.success());
    let s = stdout(&out);
    let names: Vec<&str> = s.lines().collect();
    assert_eq!(names.len(), 15);
    assert_eq!(names[0], "ones");
    assert_eq!(names[14], "yatzy");
}

#[test]
fn version_flag() {
    let out = run(&["--version"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("yz "));
}
