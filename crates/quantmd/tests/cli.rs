use assert_cmd::Command;
use predicates::prelude::*;

fn quantmd() -> Command {
    Command::cargo_bin("quantmd").unwrap()
}

fn write_houses_csv(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("houses.csv");
    std::fs::write(
        &path,
        "house,state,size\n\
         A,Texas,150\n\
         B,New York,90\n\
         C,New York,178\n\
         D,Texas,70\n\
         E,New York,76\n\
         F,California,52\n\
         G,Texas,81\n\
         H,New York,129\n\
         I,California,143\n",
    )
    .unwrap();
    path
}

#[test]
fn convert_renders_a_markdown_row() {
    quantmd()
        .args(["convert", "1/8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("|1/8|1/8|0.125|12.5%|"));
}

#[test]
fn convert_marks_repeating_decimals_as_approximate() {
    quantmd()
        .args(["convert", "1/9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.111 (approx)"))
        .stdout(predicate::str::contains("11.1% (approx)"));
}

#[test]
fn convert_json_receipt_has_the_expected_shape() {
    let output = quantmd()
        .args(["convert", "2/4", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let receipt: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(receipt["mode"], "convert");
    assert_eq!(receipt["tool"]["name"], "quantmd");
    assert_eq!(receipt["report"]["rows"][0]["reduced"]["numerator"], 1);
    assert_eq!(receipt["report"]["rows"][0]["reduced"]["denominator"], 2);
    assert_eq!(receipt["report"]["rows"][0]["decimal"]["text"], "0.5");
    assert_eq!(receipt["report"]["rows"][0]["decimal"]["exact"], true);
}

#[test]
fn convert_rejects_a_zero_denominator() {
    quantmd()
        .args(["convert", "1/0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid_fraction"));
}

#[test]
fn convert_rejects_a_plain_decimal_literal() {
    quantmd()
        .args(["convert", "0.375"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid_input"));
}

#[test]
fn table_lists_proper_fractions_per_denominator() {
    quantmd()
        .args(["table", "--denominators", "2,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("|1/2|1/2|0.5|50%|"))
        .stdout(predicate::str::contains("|1/3|1/3|0.333 (approx)|33.3% (approx)|"))
        .stdout(predicate::str::contains("|2/3|2/3|0.667 (approx)|66.7% (approx)|"));
}

#[test]
fn table_rejects_denominators_below_two() {
    quantmd()
        .args(["table", "--denominators", "2,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid_input"));
}

#[test]
fn stats_summarizes_a_whole_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_houses_csv(&dir);
    quantmd()
        .args(["stats", path.to_str().unwrap(), "--column", "size", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "size\t-\t9\t52\t178\t126\t107.667\t90",
        ));
}

#[test]
fn stats_honors_a_category_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_houses_csv(&dir);
    quantmd()
        .args([
            "stats",
            path.to_str().unwrap(),
            "--column",
            "size",
            "--where",
            "state=Texas",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "size\tstate=Texas\t3\t70\t150\t80\t100.333\t81",
        ));
}

#[test]
fn stats_json_receipt_echoes_the_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_houses_csv(&dir);
    let output = quantmd()
        .args([
            "stats",
            path.to_str().unwrap(),
            "--column",
            "size",
            "--where",
            "state=California",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let receipt: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(receipt["mode"], "stats");
    assert_eq!(receipt["report"]["filter"], "state=California");
    assert_eq!(receipt["report"]["count"], 2);
    assert_eq!(receipt["report"]["range"]["min"], 52.0);
    assert_eq!(receipt["report"]["range"]["max"], 143.0);
}

#[test]
fn stats_on_an_empty_filter_match_is_an_error_not_a_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_houses_csv(&dir);
    quantmd()
        .args([
            "stats",
            path.to_str().unwrap(),
            "--column",
            "size",
            "--where",
            "state=Nevada",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty_input"));
}

#[test]
fn stats_reports_a_missing_column_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_houses_csv(&dir);
    quantmd()
        .args(["stats", path.to_str().unwrap(), "--column", "price"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column_not_found"))
        .stderr(predicate::str::contains("price"));
}

#[test]
fn completions_emit_the_program_name() {
    quantmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quantmd"));
}
