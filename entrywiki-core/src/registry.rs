//! Title registry: the immutable title → URL map used for linkification.

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use thiserror::Error;

/// Compiled alternation size limit; the default is too small for large collections
const PATTERN_SIZE_LIMIT: usize = 64 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Failed to compile title pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Collects title → URL pairs before the registry is frozen.
///
/// The first insert of a title wins; later inserts of the same title are
/// ignored so the result does not depend on anything but insertion order.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    urls: HashMap<String, String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a title. Returns `Ok(false)` if the title was already present.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<bool, RegistryError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RegistryError::EmptyTitle);
        }

        if self.urls.contains_key(&title) {
            return Ok(false);
        }

        self.urls.insert(title, url.into());
        Ok(true)
    }

    /// URL already registered for a title
    pub fn get(&self, title: &str) -> Option<&str> {
        self.urls.get(title).map(String::as_str)
    }

    /// Freeze the registry and compile the matcher
    pub fn build(self) -> Result<TitleRegistry, RegistryError> {
        let pattern = compile_pattern(&self.urls)?;

        tracing::debug!("Compiled title registry with {} titles", self.urls.len());

        Ok(TitleRegistry {
            urls: self.urls,
            pattern,
        })
    }
}

/// One alternation over all titles, longest first, so the leftmost-first
/// match at any position is the longest title starting there
fn compile_pattern(urls: &HashMap<String, String>) -> Result<Option<Regex>, RegistryError> {
    if urls.is_empty() {
        return Ok(None);
    }

    let mut titles: Vec<&str> = urls.keys().map(String::as_str).collect();
    titles.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = titles
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = RegexBuilder::new(&alternation)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?;
    Ok(Some(pattern))
}

/// Immutable mapping from entry title to destination URL
#[derive(Debug, Clone, Default)]
pub struct TitleRegistry {
    urls: HashMap<String, String>,
    pattern: Option<Regex>,
}

impl TitleRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from pairs in order (first occurrence of a title wins)
    pub fn from_pairs<I, T, U>(pairs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (T, U)>,
        T: Into<String>,
        U: Into<String>,
    {
        let mut builder = RegistryBuilder::new();
        for (title, url) in pairs {
            builder.insert(title, url)?;
        }
        builder.build()
    }

    /// URL for an exact title
    pub fn get(&self, title: &str) -> Option<&str> {
        self.urls.get(title).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Matcher over all titles, longest alternatives first
    pub(crate) fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insert_wins() {
        let mut builder = TitleRegistry::builder();
        assert!(builder.insert("Virgo", "/pages/virgo/").unwrap());
        assert!(!builder.insert("Virgo", "/pages/other/").unwrap());
        let registry = builder.build().unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Virgo"), Some("/pages/virgo/"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut builder = TitleRegistry::builder();
        assert!(matches!(
            builder.insert("", "/x/"),
            Err(RegistryError::EmptyTitle)
        ));
        assert!(matches!(
            builder.insert("  ", "/x/"),
            Err(RegistryError::EmptyTitle)
        ));
    }

    #[test]
    fn test_empty_registry_has_no_pattern() {
        let registry = TitleRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
        assert!(registry.pattern().is_none());
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let registry = TitleRegistry::from_pairs([("C++ (lang)", "/c/"), ("a.b", "/ab/")]).unwrap();
        let pattern = registry.pattern().unwrap();

        assert!(pattern.is_match("about C++ (lang) today"));
        assert!(!pattern.is_match("axb"));
        assert!(!pattern.is_match("CC (lang)"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = TitleRegistry::from_pairs([("Virgo", "/v/")]).unwrap();
        assert_eq!(registry.get("virgo"), None);
    }
}
