//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "demoflow-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_catalog_versions() {
    let (stdout, _, code) = run_cli(&["catalog", "versions"]);
    assert_eq!(code, 0, "catalog versions failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
    assert!(stdout.contains("4-month"));
}

#[test]
fn test_catalog_events_mvp() {
    let (stdout, _, code) = run_cli(&["catalog", "events", "mvp"]);
    assert_eq!(code, 0, "catalog events failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 4);
}

#[test]
fn test_catalog_events_rejects_unknown_track() {
    let (_, stderr, code) = run_cli(&["catalog", "events", "6-month"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown track"));
}

#[test]
fn test_catalog_explain() {
    let (stdout, _, code) = run_cli(&["catalog", "explain", "call_started"]);
    assert_eq!(code, 0, "catalog explain failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["production"].as_str().unwrap().len() > 0);
}

#[test]
fn test_catalog_report() {
    let (stdout, _, code) = run_cli(&["catalog", "report", "4-month"]);
    assert_eq!(code, 0, "catalog report failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        parsed["report"]["recommendation"].as_str().unwrap(),
        "Strong Hire"
    );
}

#[test]
fn test_demo_plan_mvp() {
    let (stdout, _, code) = run_cli(&["demo", "plan", "mvp"]);
    assert_eq!(code, 0, "demo plan failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let plan = &parsed.as_array().unwrap()[0];
    assert_eq!(plan["total_ms"].as_u64().unwrap(), 3600);
    assert_eq!(plan["entries"][0]["offset_ms"].as_u64().unwrap(), 500);
}

#[test]
fn test_demo_run_compressed() {
    // time-scale 50 compresses the mvp run to ~75ms of wall clock.
    let (stdout, _, code) = run_cli(&["demo", "run", "--tracks", "mvp", "--time-scale", "50"]);
    assert_eq!(code, 0, "demo run failed");
    assert!(stdout.contains("TrackStarted"));
    assert!(stdout.contains("TrackCompleted"));

    let activations = stdout
        .lines()
        .filter(|l| l.contains("EventActivated"))
        .count();
    assert_eq!(activations, 4);
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["demo"]["time_scale"].is_number());
}

#[test]
fn test_completions_bash() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("demoflow"));
}
