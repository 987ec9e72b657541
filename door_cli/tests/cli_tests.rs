//! CLI tests for doorcalc

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn doorcalc() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("doorcalc"));
    for var in [
        "DOORCALC_DOOR_HEIGHT",
        "DOORCALC_WALL_THICKNESS",
        "DOORCALC_FRAME_THICKNESS",
        "DOORCALC_CASING_WIDTH",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn bi_fold_args() -> [&'static str; 9] {
    [
        "calc",
        "--door-type",
        "bi-fold",
        "--rough-width",
        "34",
        "--rough-height",
        "82",
        "--door-width",
        "30",
    ]
}

// ============================================================================
// Basic
// ============================================================================

#[test]
fn test_help_displays() {
    doorcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Door frame and casing calculator"));
}

#[test]
fn test_unknown_command_fails() {
    doorcalc()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// calc
// ============================================================================

#[test]
fn test_calc_bi_fold_cut_sheet() {
    doorcalc()
        .args(bi_fold_args())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Door fits in the rough opening, no special-sized door is needed.",
        ))
        .stdout(predicate::str::contains("Legs:  2 @ 81.25\""))
        .stdout(predicate::str::contains("3 x 8 ft 1\"x6\" frame board"))
        .stdout(predicate::str::contains("5 x 7 ft 2-1/4\" wide casing"));
}

#[test]
fn test_calc_json_output() {
    let output = doorcalc().args(bi_fold_args()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["frame_dimensions"]["top_frame_length_in"], 30.5);
    assert_eq!(report["frame_order_lengths_ft"], serde_json::json!([8.0, 8.0, 8.0]));
    assert_eq!(
        report["casing_order_lengths_ft"],
        serde_json::json!([7.0, 7.0, 7.0, 7.0, 7.0])
    );
}

#[test]
fn test_calc_unframed_door() {
    doorcalc()
        .args([
            "calc",
            "--door-type",
            "prehung",
            "--rough-width",
            "34",
            "--rough-height",
            "82",
            "--door-width",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No frame for this door type"));
}

#[test]
fn test_calc_door_too_large() {
    doorcalc()
        .args([
            "calc",
            "--door-type",
            "bi-fold",
            "--rough-width",
            "31",
            "--rough-height",
            "82",
            "--door-width",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Consider ordering a special-sized door or adjust the rough opening.",
        ));
}

#[test]
fn test_calc_missing_required_flag() {
    doorcalc()
        .args(["calc", "--door-type", "bi-fold", "--rough-width", "34", "--rough-height", "82"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("door_width_in"))
        .stderr(predicate::str::contains("MissingField"));
}

#[test]
fn test_calc_wall_too_thick() {
    doorcalc()
        .args(bi_fold_args())
        .args(["--wall-thickness", "7.26"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wall thickness out of expected range"));
}

#[test]
fn test_calc_casing_width_from_env() {
    doorcalc()
        .env("DOORCALC_CASING_WIDTH", "3.25")
        .args(bi_fold_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("4 x 10 ft 3-1/4\" wide casing"));
}

// ============================================================================
// --input
// ============================================================================

fn write_bi_fold_input(tmp: &TempDir) -> std::path::PathBuf {
    let path = tmp.path().join("closet.json");
    fs::write(
        &path,
        r#"{"door_type": "bi-fold", "rough_opening_width_in": 34, "rough_opening_height_in": 82, "door_width_in": 30}"#,
    )
    .unwrap();
    path
}

#[test]
fn test_calc_from_input_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_bi_fold_input(&tmp);

    doorcalc()
        .args(["calc", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Head:  1 @ 30.5\""));
}

#[test]
fn test_calc_flags_override_input_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_bi_fold_input(&tmp);

    doorcalc()
        .args(["calc", "--casing-width", "3.25", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3-1/4\" wide casing"));
}

#[test]
fn test_calc_wall_override_on_input_file_is_checked() {
    let tmp = TempDir::new().unwrap();
    let path = write_bi_fold_input(&tmp);

    doorcalc()
        .args(["calc", "--json", "--wall-thickness", "9", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("WallThicknessOutOfRange"));
}

#[test]
fn test_calc_env_overrides_input_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_bi_fold_input(&tmp);

    doorcalc()
        .env("DOORCALC_WALL_THICKNESS", "6")
        .args(["calc", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Frame (1\"x8\")"));
}

#[test]
fn test_calc_rejects_non_finite_measurement() {
    doorcalc()
        .args(bi_fold_args())
        .args(["--casing-width", "nan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("casing_width_in"))
        .stderr(predicate::str::contains("InvalidInput"));
}

#[test]
fn test_example_round_trips_through_calc() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("example.json");

    let output = doorcalc().arg("example").output().unwrap();
    assert!(output.status.success());
    fs::write(&path, &output.stdout).unwrap();

    doorcalc()
        .args(["calc", "--json", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fits_in_rough_opening\": true"));
}

#[test]
fn test_calc_input_file_not_found() {
    doorcalc()
        .args(["calc", "--input", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading does-not-exist.json"));
}

#[test]
fn test_calc_input_conflicts_with_flags() {
    doorcalc()
        .args(["calc", "--input", "x.json", "--door-width", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
