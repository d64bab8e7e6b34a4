//! Binary-level tests for the dfm CLI.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn dfm() -> Command {
    Command::cargo_bin("dfm").unwrap()
}

#[test]
fn analyze_clean_part_prints_full_report() {
    dfm()
        .args([
            "analyze",
            "bracket.step",
            "--bbox",
            "120",
            "80",
            "40",
            "--volume",
            "180000",
            "--surface-area",
            "52000",
            "--finish",
            "anodize",
            "--tolerance",
            "±0.05mm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100/100"))
        .stdout(predicate::str::contains("excellent"))
        .stdout(predicate::str::contains("STEP format is supported"))
        .stdout(predicate::str::contains("10 passed, 0 warnings, 0 failed, 0 info"));
}

#[test]
fn analyze_emits_json_for_scripting() {
    let output = dfm()
        .args(["analyze", "bracket.step", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["file_name"], "bracket.step");
    assert_eq!(report["checks"].as_array().unwrap().len(), 10);
    assert_eq!(report["checks"][0]["id"], "file-type");
    assert_eq!(report["checks"][0]["status"], "pass");
    // No geometry: fidelity warns, so the part rates good, not excellent.
    assert_eq!(report["manufacturability"], "good");
}

#[test]
fn unsupported_file_type_exits_nonzero() {
    dfm()
        .args(["analyze", "drawing.xyz"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("poor"))
        .stdout(predicate::str::contains("Convert your file to STEP"));
}

#[test]
fn geometry_can_come_from_an_upstream_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geometry.json");
    fs::write(
        &path,
        r#"{
            "bounding_box": { "x": 120.0, "y": 80.0, "z": 40.0 },
            "volume": 180000.0,
            "surface_area": 52000.0
        }"#,
    )
    .unwrap();

    dfm()
        .args(["analyze", "bracket.step", "--geometry"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Geometry validated successfully"))
        .stdout(predicate::str::contains("Single watertight shell"));
}

#[test]
fn missing_geometry_file_is_reported() {
    dfm()
        .args(["analyze", "bracket.step", "--geometry", "no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read geometry"));
}

#[test]
fn contract_violations_surface_the_error_code() {
    dfm()
        .args(["analyze", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DFM-2001"));
}

#[test]
fn finishes_lists_the_size_limit_table() {
    dfm()
        .args(["finishes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chrome"))
        .stdout(predicate::str::contains("300"))
        .stdout(predicate::str::contains("passivate"));
}

#[test]
fn finishes_json_round_trips() {
    let output = dfm().args(["finishes", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let table: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(table["default_limit_mm"], 1000.0);
    let finishes = table["finishes"].as_array().unwrap();
    assert!(finishes
        .iter()
        .any(|f| f["finish"] == "chrome" && f["max_dimension_mm"] == 300.0));
}
