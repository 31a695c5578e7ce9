use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

#[test]
fn init_scaffolds_a_buildable_project() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("wiki");

    #[allow(deprecated)]
    Command::cargo_bin("entrywiki")?
        .arg("init")
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("entrywiki.yml").exists());
    assert!(root.join("data/entries.json").exists());
    assert!(root.join("static/style.css").exists());

    #[allow(deprecated)]
    Command::cargo_bin("entrywiki")?
        .current_dir(&root)
        .arg("build")
        .assert()
        .success();

    assert!(root.join("dist/pages/Virgo/index.html").exists());
    Ok(())
}

#[test]
fn init_keeps_existing_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("entrywiki.yml"), "site:\n  title: Mine\n")?;

    #[allow(deprecated)]
    Command::cargo_bin("entrywiki")?
        .arg("init")
        .arg(dir.path())
        .assert()
        .success();

    let config = fs::read_to_string(dir.path().join("entrywiki.yml"))?;
    assert_eq!(config, "site:\n  title: Mine\n");
    Ok(())
}
