//! End-to-end tests for `chromawheel harmonies`.

mod fixtures;
use fixtures::*;

use tempfile::TempDir;

#[test]
fn test_harmonies_json_lists_every_rule() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["harmonies", "--json"], dir.path());
    let list = result.as_array().expect("Should be an array");

    let names: Vec<&str> = list.iter().map(|h| h["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "analogous",
            "complementary",
            "triadic",
            "split-complementary",
            "tetradic",
            "monochromatic"
        ]
    );

    let counts: Vec<u64> = list.iter().map(|h| h["colors"].as_u64().unwrap()).collect();
    assert_eq!(counts, vec![3, 2, 3, 3, 4, 5]);
}

#[test]
fn test_harmonies_offsets() {
    let dir = TempDir::new().unwrap();
    let result = run_json(&["harmonies", "--json"], dir.path());
    let list = result.as_array().unwrap();

    let split = list
        .iter()
        .find(|h| h["name"] == "split-complementary")
        .unwrap();
    assert_eq!(split["offsets"], serde_json::json!([0.0, 150.0, 210.0]));

    // Tonal harmonies have no hue offsets
    let mono = list.iter().find(|h| h["name"] == "monochromatic").unwrap();
    assert!(mono.get("offsets").is_none());
}

#[test]
fn test_harmonies_human_output() {
    let dir = TempDir::new().unwrap();
    let output = run(&["harmonies"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("triadic"));
    assert!(stdout.contains("+120°"));
    assert!(stdout.contains("saturation/lightness steps"));
}
