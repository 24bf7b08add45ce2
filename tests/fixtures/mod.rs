//! Shared helpers for end-to-end CLI tests.
#![allow(dead_code)] // Not every test file uses every helper

use std::path::Path;
use std::process::{Command, Output};

/// Path to the chromawheel binary
pub fn chromawheel_bin() -> String {
    std::env::var("CARGO_BIN_EXE_chromawheel")
        .unwrap_or_else(|_| "target/release/chromawheel".to_string())
}

/// Creates a Command whose configuration lives in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(chromawheel_bin());
    cmd.env("CHROMAWHEEL_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command against an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command and parses its stdout as JSON, asserting success.
pub fn run_json(args: &[&str], config_dir: &Path) -> serde_json::Value {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// Writes a config.toml into `config_dir`.
pub fn write_config(config_dir: &Path, content: &str) {
    std::fs::create_dir_all(config_dir).expect("create config dir");
    std::fs::write(config_dir.join("config.toml"), content).expect("write config");
}

/// Hex strings of a palette's colors.
pub fn hexes(palette: &serde_json::Value) -> Vec<String> {
    palette["colors"]
        .as_array()
        .expect("colors should be an array")
        .iter()
        .map(|c| c["hex"].as_str().expect("hex string").to_string())
        .collect()
}
