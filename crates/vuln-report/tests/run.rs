use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;
use vuln_report::{run, ReportErrorKind, RunOptions, Severity, DEFAULT_OUTPUT};

const SCANS: &str = r#"[
  {
    "projectName": "storefront",
    "vulnerabilities": [
      {"id": "SNYK-JS-LODASH-1", "title": "Prototype Pollution", "severity": "high",
       "packageName": "lodash", "version": "4.17.4", "fixedIn": ["4.17.21"]},
      {"id": "SNYK-JS-MINIMIST-2", "title": "Prototype Pollution", "severity": "CRITICAL",
       "packageName": "minimist", "version": "0.0.8"}
    ]
  },
  {
    "projectName": "admin",
    "vulnerabilities": [
      {"id": "SNYK-JS-AXIOS-3", "severity": "moderate", "packageName": "axios"}
    ]
  }
]"#;

#[test]
fn writes_report_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.json");
    let output = dir.path().join("out/report.html");
    fs::write(&input, SCANS).unwrap();

    let outcome = run(&RunOptions {
        output: Some(output.clone()),
        title: Some("Release audit".into()),
        ..RunOptions::new(&input)
    })
    .unwrap();

    assert_eq!(outcome.output, output);
    assert_eq!(outcome.summary.total(), 3);
    assert_eq!(outcome.summary.count(Severity::Critical), 1);
    assert_eq!(outcome.summary.count(Severity::Medium), 1);

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Release audit"));
    assert!(html.contains("minimist@0.0.8"));
    assert!(html.contains("storefront"));
}

#[test]
fn config_supplies_title_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.json");
    let config = dir.path().join("report.toml");
    let output = dir.path().join("from-config.html");
    fs::write(&input, r#"{"vulnerabilities": []}"#).unwrap();
    fs::write(
        &config,
        format!("title = \"Nightly\"\noutput = {:?}\n", output.display().to_string()),
    )
    .unwrap();

    let outcome = run(&RunOptions {
        config: Some(config),
        ..RunOptions::new(&input)
    })
    .unwrap();

    assert_eq!(outcome.output, output);
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Nightly</title>"));
    assert!(html.contains("No vulnerabilities found"));
}

#[test]
fn malformed_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.json");
    let output = dir.path().join("report.html");
    fs::write(&input, "{\"vulnerabilities\": [").unwrap();

    let err = run(&RunOptions {
        output: Some(output.clone()),
        ..RunOptions::new(&input)
    })
    .unwrap_err();

    assert_eq!(err.kind, ReportErrorKind::Parse);
    assert!(!output.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&RunOptions {
        output: Some(dir.path().join("report.html")),
        ..RunOptions::new(dir.path().join("absent.json"))
    })
    .unwrap_err();
    assert_eq!(err.kind, ReportErrorKind::Io);
}

#[test]
fn cli_prints_summary_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.json");
    fs::write(&input, SCANS).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_vuln-report"))
        .current_dir(dir.path())
        .arg(&input)
        .env_remove("VULN_REPORT_CONFIG")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "critical: 1",
            "high: 1",
            "medium: 1",
            "low: 0",
            "info: 0",
            "unknown: 0",
            "total: 3",
        ]
    );
    assert!(dir.path().join(DEFAULT_OUTPUT).exists());
}

#[test]
fn cli_exits_nonzero_on_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.json");
    fs::write(&input, "not json").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_vuln-report"))
        .current_dir(dir.path())
        .arg(&input)
        .env_remove("VULN_REPORT_CONFIG")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("ParseError"), "{stderr}");
    assert!(out.stdout.is_empty());
}
