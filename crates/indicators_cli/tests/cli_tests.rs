use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the indicators binary
#[allow(deprecated)]
fn indicators() -> Command {
    Command::cargo_bin("indicators").expect("Failed to find indicators binary")
}

/// Extracts the JSON document from output that may start with log lines
fn json_output(output: &[u8]) -> serde_json::Value {
    let output_str = String::from_utf8_lossy(output);
    let json_start = output_str.find('{').expect("Should contain JSON object");
    serde_json::from_str(&output_str[json_start..]).expect("Output should be valid JSON")
}

// ============================================================================
// show command tests
// ============================================================================

#[test]
fn test_show_sphere_yaml() {
    indicators()
        .arg("show")
        .arg("sphere")
        .assert()
        .success()
        .stdout(predicate::str::contains("water_liters_per_person_per_day"))
        .stdout(predicate::str::contains("between_inclusive"))
        .stdout(predicate::str::contains("female"));
}

#[test]
fn test_show_is_case_insensitive() {
    indicators()
        .arg("show")
        .arg("IPC")
        .assert()
        .success()
        .stdout(predicate::str::contains("ipc_phase"))
        .stdout(predicate::str::contains("fcs"));
}

#[test]
fn test_show_json() {
    let output = indicators()
        .arg("show")
        .arg("ipc")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json_output(&output);
    assert_eq!(value["numeric"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["categorical"][0]["column"], "ipc_phase");
    assert_eq!(value["numeric"][0]["op"], "between_inclusive");
}

#[test]
fn test_show_unknown_standard() {
    indicators()
        .arg("show")
        .arg("who")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown standard"));
}

#[test]
fn test_show_unsupported_format() {
    indicators()
        .arg("show")
        .arg("sphere")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output format"));
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_yaml() {
    indicators()
        .arg("check")
        .arg(fixture_path("camp_wash.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Standards file is valid"))
        .stdout(predicate::str::contains("shelter_type"))
        .stdout(predicate::str::contains("flags < 20"))
        .stdout(predicate::str::contains("flags not in [0, 100]"));
}

#[test]
fn test_check_valid_toml() {
    indicators()
        .arg("check")
        .arg(fixture_path("nutrition.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("gam_rate"))
        .stdout(predicate::str::contains("flags >= 15"));
}

#[test]
fn test_check_json_output() {
    let output = indicators()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("camp_wash.yml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json_output(&output);
    assert_eq!(value["valid"], true);
    assert_eq!(value["summary"]["rule_count"], 3);
    assert_eq!(value["numeric"][0]["rule"], "< 20");
    assert_eq!(value["categorical"][0]["rule"], "not in");
}

#[test]
fn test_check_malformed_threshold_fails() {
    indicators()
        .arg("check")
        .arg(fixture_path("malformed_threshold.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Malformed threshold"))
        .stdout(predicate::str::contains("fcs"));
}

#[test]
fn test_check_malformed_threshold_json() {
    let output = indicators()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("malformed_threshold.yml"))
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let value = json_output(&output);
    assert_eq!(value["valid"], false);
    assert_eq!(value["summary"]["error_count"], 1);
    assert!(value["numeric"][0]["rule"].is_null());
}

#[test]
fn test_check_unknown_operator() {
    indicators()
        .arg("check")
        .arg(fixture_path("unknown_operator.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("=>"));
}

#[test]
fn test_check_unsupported_extension() {
    indicators()
        .arg("check")
        .arg(fixture_path("rules.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_check_missing_file() {
    indicators()
        .arg("check")
        .arg("nonexistent.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// global flags
// ============================================================================

#[test]
fn test_verbose_flag_accepted() {
    indicators()
        .arg("--verbose")
        .arg("show")
        .arg("sphere")
        .assert()
        .success();
}

#[test]
fn test_help_lists_commands() {
    indicators()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("check"));
}
