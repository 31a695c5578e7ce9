//! Content model structs for entries, categories, and the site index.

use crate::registry::TitleRegistry;
use serde::{Deserialize, Deserializer, Serialize};

/// One block of entry content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentBlock {
    /// Plain text, escaped and linkified on render
    Text(String),
    /// Pre-formed HTML fragment, emitted verbatim
    Html(String),
}

impl ContentBlock {
    /// Classify a raw block: anything starting with a markup delimiter is HTML
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.trim_start().starts_with('<') {
            ContentBlock::Html(raw)
        } else {
            ContentBlock::Text(raw)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ContentBlock::Text(s) | ContentBlock::Html(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ContentBlock::from_raw)
    }
}

/// Category field of an entry: a single name or a list of names
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Categories {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl Categories {
    /// Non-blank category names in declaration order, without repeats
    pub fn names(&self) -> Vec<&str> {
        let raw: Vec<&str> = match self {
            Categories::None => Vec::new(),
            Categories::One(name) => vec![name.as_str()],
            Categories::Many(names) => names.iter().map(String::as_str).collect(),
        };

        let mut names: Vec<&str> = Vec::with_capacity(raw.len());
        for name in raw.into_iter().map(str::trim) {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// A single wiki entry as loaded from the entry collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub content: Vec<ContentBlock>,

    #[serde(default)]
    pub category: Categories,

    #[serde(default)]
    pub see_also: Vec<String>,
}

impl Entry {
    /// Summary text, if present and not blank
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// An accepted entry with its resolved location in the site
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub entry: Entry,
    pub slug: String,
    pub url: String,
    /// Category names after defaulting (never empty)
    pub categories: Vec<String>,
}

impl Page {
    /// Relative output path for this page (no leading slash)
    pub fn output_rel_path(&self) -> String {
        format!("pages/{}/index.html", self.slug)
    }
}

/// A category with the indices of its member pages in `SiteIndex::pages`
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub members: Vec<usize>,
}

impl Category {
    /// Relative output path for this category page (no leading slash)
    pub fn output_rel_path(&self) -> String {
        format!("categories/{}/index.html", self.slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A problem found while building the site index
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub entry: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &str, entry: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, code, entry, message)
    }

    pub fn warning(code: &str, entry: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, code, entry, message)
    }

    pub fn info(code: &str, entry: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Info, code, entry, message)
    }

    fn new(
        severity: DiagnosticSeverity,
        code: &str,
        entry: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity,
            entry: entry.map(str::to_string),
        }
    }
}

/// Complete site index: pages sorted by title, categories sorted by name
#[derive(Debug)]
pub struct SiteIndex {
    pub pages: Vec<Page>,
    pub categories: Vec<Category>,
    pub registry: TitleRegistry,
    pub diagnostics: Vec<Diagnostic>,
}

impl SiteIndex {
    /// Find a page by its exact title
    pub fn find_by_title(&self, title: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.entry.title == title)
    }

    /// Find a category by name
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Member pages of a category, in title order
    pub fn members<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a Page> + 'a {
        category.members.iter().filter_map(|&idx| self.pages.get(idx))
    }

    pub fn count(&self, severity: DiagnosticSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_block_classification() {
        assert_eq!(
            ContentBlock::from_raw("plain <b> text"),
            ContentBlock::Text("plain <b> text".into())
        );
        assert_eq!(
            ContentBlock::from_raw("  <ul><li>x</li></ul>"),
            ContentBlock::Html("  <ul><li>x</li></ul>".into())
        );
    }

    #[test]
    fn test_entry_deserialize_minimal() {
        let entry: Entry = serde_json::from_str(r#"{"title": "Virgo"}"#).unwrap();
        assert_eq!(entry.title, "Virgo");
        assert!(entry.summary().is_none());
        assert!(entry.content.is_empty());
        assert_eq!(entry.category, Categories::None);
    }

    #[test]
    fn test_entry_deserialize_full() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "title": "Virgo",
                "summary": "A group",
                "aliases": ["處女座"],
                "content": ["Hello", "<p>raw</p>"],
                "category": ["團體", "組織"],
                "see_also": ["Virtus"],
                "extra": 42
            }"#,
        )
        .unwrap();

        assert_eq!(entry.summary(), Some("A group"));
        assert_eq!(entry.aliases, vec!["處女座"]);
        assert_eq!(
            entry.content,
            vec![
                ContentBlock::Text("Hello".into()),
                ContentBlock::Html("<p>raw</p>".into())
            ]
        );
        assert_eq!(entry.category.names(), vec!["團體", "組織"]);
        assert_eq!(entry.see_also, vec!["Virtus"]);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Categories::One("人物".into()).names(), vec!["人物"]);
        assert_eq!(
            Categories::Many(vec!["a".into(), " ".into(), "b".into(), "a ".into()]).names(),
            vec!["a", "b"]
        );
        assert!(Categories::One("  ".into()).names().is_empty());
        assert!(Categories::None.names().is_empty());
    }

    #[test]
    fn test_category_null_is_none() {
        let entry: Entry =
            serde_json::from_str(r#"{"title": "X", "category": null}"#).unwrap();
        assert_eq!(entry.category, Categories::None);
    }
}
