use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn projectile() -> Command {
    Command::cargo_bin("projectile_motion").expect("projectile_motion bin")
}

#[test]
fn prints_metrics_for_flag_inputs() {
    projectile()
        .args([
            "--body", "3", "--height", "0", "--velocity", "20", "--angle", "45", "--no-plot",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time of flight: 2.8862 seconds"))
        .stdout(predicate::str::contains("Maximum height: 10.2041 meters"))
        .stdout(predicate::str::contains("Horizontal reach: 40.8163 meters"));
}

#[test]
fn prompts_for_missing_inputs_on_stdin() {
    projectile()
        .arg("--no-plot")
        .write_stdin("3\n0\n20\n45\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select the body"))
        .stdout(predicate::str::contains("Body: Earth"))
        .stdout(predicate::str::contains("Horizontal reach: 40.8163 meters"));
}

#[test]
fn rejects_out_of_range_angle_before_computing() {
    projectile()
        .args([
            "--body", "3", "--height", "0", "--velocity", "20", "--angle", "95", "--no-plot",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid launch angle"))
        .stdout(predicate::str::contains("Time of flight").not());
}

#[test]
fn rejects_negative_velocity() {
    projectile()
        .args([
            "--body", "3", "--height", "0", "--velocity", "-1", "--angle", "45", "--no-plot",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid initial velocity"));
}

#[test]
fn rejects_unknown_body() {
    projectile()
        .args([
            "--body", "9", "--height", "0", "--velocity", "20", "--angle", "45", "--no-plot",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn rejects_non_numeric_text() {
    projectile()
        .args([
            "--body", "3", "--height", "tall", "--velocity", "20", "--angle", "45", "--no-plot",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'tall' is not a number"));
}

#[test]
fn compares_every_body() {
    projectile()
        .args([
            "--all-bodies", "--height", "0", "--velocity", "20", "--angle", "45", "--no-plot",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercury"))
        .stdout(predicate::str::contains("Neptune"))
        .stdout(predicate::str::contains("40.8163"));
}

#[test]
fn exports_samples_as_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("samples.csv");

    projectile()
        .args([
            "--body",
            "4",
            "--height",
            "1",
            "--velocity",
            "12",
            "--angle",
            "30",
            "--intervals",
            "10",
            "--no-plot",
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = fs::read_to_string(csv_path).expect("csv written");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "body,index,time_s,x_m,y_m");
    assert_eq!(lines.len(), 12);
    assert!(lines[1].starts_with("Mars,0,"));
}

#[test]
fn zero_intervals_are_rejected() {
    projectile()
        .args([
            "--body", "3", "--height", "0", "--velocity", "20", "--angle", "45", "--intervals",
            "0", "--no-plot",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time intervals"));
}

#[test]
fn rejects_velocity_too_large_to_plot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plot_path = dir.path().join("overflow.png");

    projectile()
        .args([
            "--body",
            "3",
            "--height",
            "0",
            "--velocity",
            "1e160",
            "--angle",
            "45",
            "--plot-output",
            plot_path.to_str().unwrap(),
        ])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid initial velocity"))
        .stdout(predicate::str::contains("Maximum height").not());
    assert!(!plot_path.exists());
}

#[test]
fn writes_the_plot_to_the_requested_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plot_path = dir.path().join("plots").join("earth.png");

    projectile()
        .args([
            "--body",
            "3",
            "--height",
            "0",
            "--velocity",
            "20",
            "--angle",
            "45",
            "--plot-output",
            plot_path.to_str().unwrap(),
        ])
        .timeout(std::time::Duration::from_secs(60))
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot saved to"));

    let bytes = fs::read(&plot_path).expect("plot written");
    assert!(!bytes.is_empty());
}
