use std::process::{Command, Output};

/// Run the binary with an empty config directory so a user's own config
/// file cannot change the output.
fn windzone(args: &[&str]) -> Output {
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    Command::new(env!("CARGO_BIN_EXE_windzone"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_table() {
    let output = windzone(&["--center", "-33.8688,151.2093", "--height", "10"]);
    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Lag Distance: 200.0m"));
    assert!(stdout.contains("Averaging Distance: 500.0m"));
    assert!(stdout.contains("Total Assessment Radius: 700.0m"));
    assert!(stdout.contains("Grid Rings (m): 300, 400, 500, 600"));
}

#[test]
fn test_cli_json() {
    let output = windzone(&["-c", "-33.8688, 151.2093", "-z", "25", "-o", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["zone"]["total_radius"], 1500.0);
    assert_eq!(value["rings"].as_array().unwrap().len(), 9);
    assert_eq!(value["labels"][7]["direction"], "NW");
}

#[test]
fn test_cli_csv_with_label_factor() {
    let output = windzone(&[
        "--center", "0,0", "--height", "25", "--output", "csv", "--label-factor", "1.5",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("kind,name,bearing_deg,distance_m,lat,lon\n"));
    assert!(stdout.contains("\nlabel,N,0,2250,"));
}

#[test]
fn test_cli_rejects_negative_height() {
    let output = windzone(&["--center", "-33.8688,151.2093", "--height", "-5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Lat, Lon"));
    assert!(stderr.contains("negative"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_rejects_malformed_center() {
    let output = windzone(&["--center", "-33.8688 151.2093", "--height", "10"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_requires_inputs() {
    let output = windzone(&["--height", "10"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_init_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("windzone.toml");
    let output = windzone(&["--init-config", "--config", path.to_str().unwrap()]);
    assert!(output.status.success());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("label_distance_factor = 1.2"));

    // The written file is usable straight away
    let output = windzone(&[
        "--config", path.to_str().unwrap(), "--center", "10,10", "--height", "5",
    ]);
    assert!(output.status.success());
}
