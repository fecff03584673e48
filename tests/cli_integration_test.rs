use assert_cmd::Command;
use indoc::indoc;
use kpimap::{ParetoReport, SeriesReport};
use std::fs;

fn kpimap() -> Command {
    Command::cargo_bin("kpimap").unwrap()
}

#[test]
fn generate_then_report_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let series = dir.path().join("series.json");
    let report = dir.path().join("report.json");

    kpimap()
        .args(["generate", "--days", "14", "--seed", "7"])
        .arg("--output")
        .arg(&series)
        .assert()
        .success();

    kpimap()
        .arg("report")
        .arg(&series)
        .args([
            "--group-by",
            "week",
            "--calendar",
            "corporate",
            "--metric",
            "casi-cerrados",
            "--format",
            "json",
        ])
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let parsed: SeriesReport =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(parsed.target, Some(80.0));
    assert!(!parsed.points.is_empty());
    assert!(parsed.categories.contains(&"L06".to_string()));
}

#[test]
fn pareto_command_ranks_a_causes_file() {
    let dir = tempfile::tempdir().unwrap();
    let causes = dir.path().join("causes.json");
    fs::write(
        &causes,
        indoc! {r#"
            [
              {"id": "1", "description": "A", "units": 30},
              {"id": "2", "description": "B", "units": 50},
              {"id": "3", "description": "C", "units": 20}
            ]
        "#},
    )
    .unwrap();

    let output = kpimap()
        .arg("pareto")
        .arg(&causes)
        .args(["--format", "json"])
        .assert()
        .success();

    let parsed: ParetoReport =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(parsed.total_units, 100);
    assert_eq!(parsed.causes[0].description, "B");
    assert_eq!(parsed.causes[2].accumulated_percent, 100.0);
}

#[test]
fn pareto_command_skips_inadmissible_causes() {
    let dir = tempfile::tempdir().unwrap();
    let causes = dir.path().join("causes.json");
    fs::write(
        &causes,
        indoc! {r#"
            [
              {"id": "1", "description": "valid", "units": 10},
              {"id": "2", "description": "", "units": 5},
              {"id": "3", "description": "zero", "units": 0}
            ]
        "#},
    )
    .unwrap();

    let output = kpimap()
        .arg("pareto")
        .arg(&causes)
        .args(["--format", "json"])
        .assert()
        .success();

    let parsed: ParetoReport =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(parsed.causes.len(), 1);
    assert_eq!(parsed.causes[0].description, "valid");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("kpimap.toml");

    kpimap()
        .arg("init")
        .arg("--path")
        .arg(&config)
        .assert()
        .success();
    assert!(config.exists());

    kpimap()
        .arg("init")
        .arg("--path")
        .arg(&config)
        .assert()
        .failure();

    kpimap()
        .args(["init", "--force"])
        .arg("--path")
        .arg(&config)
        .assert()
        .success();
}

#[test]
fn report_requires_input_or_demo() {
    kpimap().arg("report").assert().failure();
}
