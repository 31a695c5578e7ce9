//! Init command implementation.

use super::build::extract_embedded_static;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../entrywiki.yml.example");

/// Initialize a new entrywiki project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    scaffold_data(root)?;
    scaffold_static(root)?;

    println!("✓ entrywiki initialized in {:?}", root);
    println!("  - Edit entrywiki.yml to customize site metadata");
    println!("  - Add entries to data/entries.json, then run `entrywiki build`");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("entrywiki.yml");
    if config_path.exists() {
        println!("entrywiki.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn scaffold_data(root: &Path) -> Result<()> {
    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).with_context(|| format!("Failed to create {:?}", data_dir))?;

    let entries = data_dir.join("entries.json");
    if !entries.exists() {
        fs::write(&entries, sample_entries())
            .with_context(|| format!("Failed to write {:?}", entries))?;
        println!("Created {:?}", entries);
    }
    Ok(())
}

/// Copy the default assets so they can be customized in place
fn scaffold_static(root: &Path) -> Result<()> {
    let static_dir = root.join("static");
    if static_dir.exists() {
        return Ok(());
    }

    fs::create_dir_all(&static_dir)
        .with_context(|| format!("Failed to create {:?}", static_dir))?;
    extract_embedded_static(&static_dir)?;
    println!("Created {:?}", static_dir);
    Ok(())
}

fn sample_entries() -> &'static str {
    r#"[
  {
    "title": "Virgo",
    "summary": "One of the two founding groups.",
    "aliases": ["The Maidens"],
    "category": "Groups",
    "content": [
      "Virgo and Virtus are two groups that share a city.",
      "<p class=\"note\">Pre-formed HTML blocks are copied as they are.</p>"
    ],
    "see_also": ["Virtus"]
  },
  {
    "title": "Virtus",
    "summary": "Rival of Virgo.",
    "category": ["Groups", "Organizations"],
    "content": ["Virtus was founded after Virgo."]
  }
]
"#
}
