mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn verify_reports_unresolved_see_also() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    common::write_project(dir.path(), common::ENTRIES)?;

    #[allow(deprecated)]
    let assert = Command::cargo_bin("entrywiki")?
        .current_dir(dir.path())
        .args(["verify", "--json"])
        .assert()
        .success();

    let value: Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["entries"], 3);
    assert_eq!(value["errors"], 0);
    let codes: Vec<&str> = value["diagnostics"]
        .as_array()
        .expect("diagnostics array")
        .iter()
        .filter_map(|d| d["code"].as_str())
        .collect();
    assert!(codes.contains(&"see_also.unresolved"));

    Ok(())
}

#[test]
fn verify_fails_on_empty_title() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    common::write_project(
        dir.path(),
        r#"[{"title": "Ok", "content": []}, {"title": "  ", "content": []}]"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("entrywiki")?
        .current_dir(dir.path())
        .arg("verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error(s) found"));

    Ok(())
}

#[test]
fn verify_warns_on_duplicate_title() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    common::write_project(
        dir.path(),
        r#"[{"title": "Twin", "content": []}, {"title": "Twin", "content": ["second"]}]"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("entrywiki")?
        .current_dir(dir.path())
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("entry.duplicate_title"));

    Ok(())
}
