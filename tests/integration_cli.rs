use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("flapwing-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("flapwing-cli");
    }

    path
}

#[test]
fn test_cli_simulate_basic() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "simulate",
            "--frequency", "150",
            "--pitch-deg", "45",
            "--t-end", "0.03",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("SIMULATION") || stdout.contains("Lift"),
        "Should contain simulation output"
    );
}

#[test]
fn test_cli_simulate_json_output() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "simulate",
            "--frequency", "150",
            "--pitch-deg", "45",
            "--t-end", "0.01",
            "--output", "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should parse");
    let t = parsed["t"].as_array().expect("Should contain a time channel");
    // 0.01 s at the default 1e-4 step: 101 samples including both endpoints
    assert_eq!(t.len(), 101);
    assert!(parsed["lift"].as_array().is_some());
    assert!(parsed["eta"].as_array().is_some());
}

#[test]
fn test_cli_simulate_csv_output() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "simulate",
            "--t-end", "0.001",
            "--output", "csv",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("t,lift,drag,power,eta,theta_deg,x_pos"),
        "First line should be the CSV header"
    );
    // Header plus 11 samples
    assert_eq!(stdout.lines().count(), 12);
}

#[test]
fn test_cli_sweep_pitch() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "sweep",
            "--axis", "pitch",
            "--base", "45",
            "--step", "15",
            "--t-end", "0.01",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("15 deg"), "Should list the lowest sweep value");
    assert!(stdout.contains("75 deg"), "Should list the highest sweep value");
}

#[test]
fn test_cli_sweep_frequency_json() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "sweep",
            "--axis", "frequency",
            "--base", "150",
            "--step", "50",
            "--t-end", "0.01",
            "--output", "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should parse");
    let points = parsed.as_array().expect("Should be an array of sweep points");
    assert_eq!(points.len(), 5);
    assert_eq!(points[0]["value"].as_f64(), Some(50.0));
    assert_eq!(points[4]["value"].as_f64(), Some(250.0));
}

#[test]
fn test_cli_sweep_stroke() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "sweep",
            "--axis", "stroke",
            "--base", "0.003",
            "--step", "0.001",
            "--t-end", "0.01",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
}

#[test]
fn test_cli_sweep_unknown_axis_fails() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "sweep",
            "--axis", "amplitude",
            "--base", "1.0",
            "--step", "0.1",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Unknown axis should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown sweep axis"),
        "Error should name the axis problem"
    );
}

#[test]
fn test_cli_info() {
    let output = Command::new(get_cli_binary())
        .args(&["info"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FLAPWING ENGINE"));
}
