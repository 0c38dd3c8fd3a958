//! End-to-end tests: design a layout to disk, then estimate from the file.

use std::fs;
use std::path::Path;

use clap::Parser;
use ringarray::{run, Cli};
use tempfile::TempDir;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out).expect("report should be UTF-8"))
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path should be UTF-8")
}

#[test]
fn test_design_writes_layout_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("sensor_locations.csv");

    let report = run_args(&[
        "ringarray", "design", "--zmin", "1000", "--zmax", "5000", "-p", "1.4", "-o", path_str(&file),
    ])
    .unwrap();
    assert!(report.contains("12 stations (6 inner, 6 outer)"));

    let content = fs::read_to_string(&file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "# x (m), y(m)");
    assert_eq!(lines[1], "0.000 357.143");
}

#[test]
fn test_design_then_estimate_round_trip() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("layout.csv");

    run_args(&[
        "ringarray", "design", "--zmin", "1000", "--zmax", "5000", "-p", "1.4", "-o", path_str(&file),
    ])
    .unwrap();

    let report = run_args(&[
        "ringarray", "estimate", "-i", path_str(&file), "-p", "1.4", "--format", "json",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();

    let zmin = value["estimate"]["zmin"].as_f64().unwrap();
    let zmax = value["estimate"]["zmax"].as_f64().unwrap();
    assert!(((zmin - 1000.0) / 1000.0).abs() < 0.02, "zmin {}", zmin);
    assert!(((zmax - 5000.0) / 5000.0).abs() < 0.02, "zmax {}", zmax);
    assert_eq!(value["stationCount"], 12);
}

#[test]
fn test_design_with_too_few_stations_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("layout.csv");

    let err = run_args(&[
        "ringarray", "design", "--zmin", "100", "--zmax", "500", "--max-gap", "10", "-n", "5", "-o",
        path_str(&file),
    ])
    .unwrap_err();

    assert!(format!("{:#}", err).contains("not enough stations"));
    assert!(!file.exists(), "no layout should be written on failure");
}

#[test]
fn test_estimate_missing_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("missing.csv");

    let err = run_args(&["ringarray", "estimate", "-i", path_str(&file)]).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read layout"));
}

#[test]
fn test_estimate_malformed_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.csv");
    fs::write(&file, "# x (m), y(m)\n1.0 2.0\nnot a row\n").unwrap();

    let err = run_args(&["ringarray", "estimate", "-i", path_str(&file)]).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Invalid layout file"));
    assert!(message.contains("line 3"));
}

#[test]
fn test_estimate_station_at_center() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("center.csv");
    fs::write(&file, "# x (m), y(m)\n0.000 0.000\n10.000 0.000\n0.000 10.000\n").unwrap();

    let err = run_args(&["ringarray", "estimate", "-i", path_str(&file)]).unwrap_err();
    assert!(format!("{:#}", err).contains("degenerate geometry"));
}

#[test]
fn test_estimate_stations_on_one_center_line() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("line.csv");
    fs::write(
        &file,
        "# x (m), y(m)\n100.000 0.000\n-100.000 0.000\n200.000 0.000\n-200.000 0.000\n300.000 0.000\n-300.000 0.000\n",
    )
    .unwrap();

    let err = run_args(&["ringarray", "estimate", "-i", path_str(&file)]).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Depth estimation failed"));
    assert!(message.contains("one line through the array center"));
}
