//! CLI integration tests
//!
//! Drive the built `survey` binary against a scratch data directory and
//! check stdout, exit status and what lands on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use survey_core::catalog;
use tempfile::TempDir;

fn survey(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_survey"))
        .current_dir(dir)
        .args(["--data-dir", "data", "--out-dir", "out", "--log-profile", "test"])
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn complete_submission() -> Vec<String> {
    let mut args = vec!["submit".to_string()];
    for key in catalog::required_keys() {
        args.push("--field".to_string());
        args.push(format!("{}=Agree", key));
    }
    args
}

fn submit_complete(dir: &Path) -> Output {
    let args = complete_submission();
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    survey(dir, &refs)
}

fn stored_records(dir: &Path) -> Vec<serde_json::Value> {
    let raw = fs::read_to_string(dir.join("data/school_survey_responses.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_submit_stores_response() {
    let temp_dir = TempDir::new().unwrap();

    let output = submit_complete(temp_dir.path());

    assert!(
        output.status.success(),
        "submit should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Response recorded"));
    assert!(stdout.contains("Age Range: Agree"));
    assert_eq!(stored_records(temp_dir.path()).len(), 1);
}

#[test]
fn test_repeated_field_becomes_multi_select() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = complete_submission();
    args.extend(["--field".to_string(), "favoriteSubjects=Art".to_string()]);
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = survey(temp_dir.path(), &refs);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Favorite Subjects: Agree, Art"));
    let records = stored_records(temp_dir.path());
    assert_eq!(
        records[0]["data"]["favoriteSubjects"],
        serde_json::json!(["Agree", "Art"])
    );
}

#[test]
fn test_incomplete_submission_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = survey(temp_dir.path(), &["submit", "--field", "age=15-17"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("ERR_VALIDATION_FAILED"));
    assert!(stderr.contains("favoriteSubjects: Please select at least one option"));
    assert!(stderr.contains("grade: Please select an option"));
    assert!(!temp_dir.path().join("data/school_survey_responses.json").exists());
}

#[test]
fn test_export_all_on_empty_store_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = survey(temp_dir.path(), &["export-all"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No survey responses found. Please submit some surveys first."));
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_export_all_writes_workbook() {
    let temp_dir = TempDir::new().unwrap();
    submit_complete(temp_dir.path());
    submit_complete(temp_dir.path());

    let output = survey(temp_dir.path(), &["export-all"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Exported 2 response(s)"));
    let files: Vec<_> = fs::read_dir(temp_dir.path().join("out"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("All_Survey_Responses_"));
    assert!(files[0].ends_with(".xlsx"));
}

#[test]
fn test_export_single_by_id() {
    let temp_dir = TempDir::new().unwrap();
    submit_complete(temp_dir.path());
    let id = stored_records(temp_dir.path())[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let output = survey(temp_dir.path(), &["export", "--id", id.as_str()]);

    assert!(output.status.success());
    let files: Vec<_> = fs::read_dir(temp_dir.path().join("out"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(files[0].starts_with("School_Life_Survey_"));

    let missing = survey(temp_dir.path(), &["export", "--id", "nope"]);
    assert!(!missing.status.success());
    assert!(String::from_utf8_lossy(&missing.stderr).contains("ERR_NOT_FOUND"));
}

#[test]
fn test_stats_reports_count() {
    let temp_dir = TempDir::new().unwrap();

    let empty = survey(temp_dir.path(), &["stats"]);
    assert!(String::from_utf8_lossy(&empty.stdout).contains("Total responses: 0"));
    assert!(String::from_utf8_lossy(&empty.stdout).contains("Latest response: none"));

    submit_complete(temp_dir.path());
    let one = survey(temp_dir.path(), &["stats"]);
    let stdout = String::from_utf8_lossy(&one.stdout);
    assert!(stdout.contains("Total responses: 1"));
    assert!(stdout.contains("UTC"));
}

#[test]
fn test_clear_requires_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    submit_complete(temp_dir.path());

    // stdin is closed, so the prompt reads EOF and declines
    let declined = survey(temp_dir.path(), &["clear"]);
    assert!(!declined.status.success());
    assert!(String::from_utf8_lossy(&declined.stderr).contains("ERR_CONFIRMATION_REQUIRED"));
    assert_eq!(stored_records(temp_dir.path()).len(), 1);

    let confirmed = survey(temp_dir.path(), &["clear", "--yes"]);
    assert!(confirmed.status.success());
    assert!(String::from_utf8_lossy(&confirmed.stdout).contains("Cleared 1 response(s)"));
    assert!(!temp_dir.path().join("data/school_survey_responses.json").exists());
}

#[test]
fn test_config_file_sets_storage_key_and_outbox() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("survey.toml"),
        r#"
storage_key = "pilot_responses"
admin_email = "admin@example.org"
required = ["age"]
"#,
    )
    .unwrap();

    let output = survey(
        temp_dir.path(),
        &["--config", "survey.toml", "submit", "--field", "age=15-17"],
    );

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(temp_dir.path().join("data/pilot_responses.json").exists());
    let outbox: Vec<_> = fs::read_dir(temp_dir.path().join("data/outbox"))
        .unwrap()
        .collect();
    assert_eq!(outbox.len(), 1);
}
