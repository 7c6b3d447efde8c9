//! End-to-end tests for the txtract binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn txtract() -> Command {
    Command::cargo_bin("txtract").unwrap()
}

#[test]
fn test_extract_pos_receipt_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "Big Bazaar\nTotal: ₹1250.00\n29-07-2025\n").unwrap();

    txtract()
        .args(["extract", "--kind", "pos", "--date", "2025-08-01"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1250.00"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("2025-07-29"));
}

#[test]
fn test_extract_structured_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.txt");
    std::fs::write(
        &input,
        "Expense250Groceries29-07-2025\nIncome50000Salary01-08-2025\n",
    )
    .unwrap();

    txtract()
        .args([
            "extract",
            "--kind",
            "structured",
            "--format",
            "csv",
            "--date",
            "2025-08-01",
        ])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "kind,amount,date,category,description,paymentMethod",
        ))
        .stdout(predicate::str::contains("expense,250,2025-07-29,Groceries"))
        .stdout(predicate::str::contains("income,50000,2025-08-01,Salary"));
}

#[test]
fn test_fail_on_empty() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noise.txt");
    std::fs::write(&input, "thanks for shopping\n").unwrap();

    txtract()
        .args(["extract", "--kind", "pos", "--fail-on-empty"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No transactions found"));
}

#[test]
fn test_empty_result_is_success_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noise.txt");
    std::fs::write(&input, "thanks for shopping\n").unwrap();

    txtract()
        .args(["extract", "--kind", "pos"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 0 transaction(s)"));
}

#[test]
fn test_non_text_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("binary.txt");
    std::fs::write(&input, [0xffu8, 0xfe, 0x01, 0x02]).unwrap();

    txtract()
        .args(["extract", "--kind", "pos"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("txtract.json");

    txtract()
        .args(["config", "init"])
        .arg(&config_path)
        .assert()
        .success();

    txtract()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pos_receipt"));
}

#[test]
fn test_batch_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a.txt"),
        "Big Bazaar\nTotal: ₹450.00\n29-07-2025\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("b.txt"), "no transaction here\n").unwrap();

    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    txtract()
        .args(["batch", "--kind", "pos", "--summary", "--date", "2025-08-01"])
        .arg("--output-dir")
        .arg(&out_dir)
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 files"));

    let summary = std::fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("a.txt,success,1,450.00"));
    assert!(summary.contains("b.txt,success,0,0"));

    let a_json = std::fs::read_to_string(out_dir.join("a.json")).unwrap();
    assert!(a_json.contains("Groceries"));
}
