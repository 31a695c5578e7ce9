use std::fs;
use std::path::Path;

pub const CONFIG: &str = r#"
site:
  title: "Test Wiki"
  author: "Tester"
  description: "Desc"
paths:
  data: "data/entries.json"
  output: "dist"
base_url: "/"
"#;

pub const ENTRIES: &str = r#"[
  {
    "title": "Virgo",
    "summary": "A founding group",
    "aliases": ["The Maidens"],
    "category": "Groups",
    "content": ["Virgo and Virtus share a city."],
    "see_also": ["Virtus", "Nowhere"]
  },
  {
    "title": "Virtus",
    "summary": "Rival of Virgo",
    "category": ["Groups", "Rivals"],
    "content": ["<div class=\"box\">Virgo</div>"]
  },
  {
    "title": "Lone Entry",
    "content": []
  }
]"#;

/// Lay out a project with the given entries under `root`
pub fn write_project(root: &Path, entries: &str) -> std::io::Result<()> {
    fs::write(root.join("entrywiki.yml"), CONFIG)?;
    fs::create_dir_all(root.join("data"))?;
    fs::write(root.join("data/entries.json"), entries)?;
    Ok(())
}
