// tests/cli_init.rs
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Get the path to the built binary
fn get_binary_path() -> PathBuf {
    // Build the binary first
    let build_status = Command::new("cargo")
        .args(["build", "--quiet"])
        .status()
        .expect("Failed to build");
    assert!(build_status.success(), "Build failed");

    // Return the path to the debug binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("azup");
    path
}

#[test]
fn test_init_creates_settings() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join(".azup.toml");
    let binary = get_binary_path();

    let output = Command::new(&binary)
        .args(["init", "--name", "demo"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run command");

    assert!(
        output.status.success(),
        "Command failed: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(settings_path.exists(), "Settings file not created");

    let content = fs::read_to_string(&settings_path).unwrap();
    assert!(content.contains("app_name = \"demo\""));
    assert!(content.contains("resource_group_name = \"demo-rg\""));
    assert!(content.contains("insights_name = \"demo-insights\""));
}

#[test]
fn test_init_generates_a_name_when_omitted() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join(".azup.toml");
    let binary = get_binary_path();

    let output = Command::new(&binary)
        .args(["init"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let content = fs::read_to_string(&settings_path).unwrap();
    assert!(content.contains("app_name = "));
    assert!(content.contains("-rg\""));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join(".azup.toml");
    fs::write(&settings_path, "existing").unwrap();
    let binary = get_binary_path();

    let output = Command::new(&binary)
        .args(["init", "--name", "demo"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run command");

    assert!(!output.status.success(), "Should have failed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("already exists") || stderr.contains("force"),
        "Expected error about existing file or force flag, got: {}",
        stderr
    );
}

#[test]
fn test_reset_removes_settings() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join(".azup.toml");
    let binary = get_binary_path();

    let output = Command::new(&binary)
        .args(["init", "--name", "demo"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run command");
    assert!(output.status.success());
    assert!(settings_path.exists());

    let output = Command::new(&binary)
        .args(["reset"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run command");
    assert!(output.status.success());
    assert!(!settings_path.exists(), "Settings file should be gone");
}
