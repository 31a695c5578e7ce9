//! Search index generation and scored lookup over entries.

use crate::models::SiteIndex;
use serde::{Deserialize, Serialize};

/// One record of `search-index.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub title: String,
    pub title_lc: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub aliases_lc: Vec<String>,
    #[serde(default)]
    pub summary: String,
    pub url: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Build the search index for every page, in title order
pub fn build_search_index(site_index: &SiteIndex) -> Vec<SearchEntry> {
    site_index
        .pages
        .iter()
        .map(|page| {
            let entry = &page.entry;
            SearchEntry {
                title: entry.title.clone(),
                title_lc: entry.title.to_lowercase(),
                aliases: entry.aliases.clone(),
                aliases_lc: entry.aliases.iter().map(|a| a.to_lowercase()).collect(),
                summary: entry.summary().unwrap_or_default().to_string(),
                url: page.url.clone(),
                categories: page.categories.clone(),
            }
        })
        .collect()
}

/// Rank entries against a case-insensitive query, best first.
///
/// Exact title match scores 10, a title substring 5, an alias substring 3
/// and a summary substring 1. Ties keep index order.
pub fn perform_search<'a>(entries: &'a [SearchEntry], query: &str) -> Vec<(&'a SearchEntry, u32)> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<(&SearchEntry, u32)> = entries
        .iter()
        .filter_map(|entry| {
            let mut score = 0;

            if entry.title_lc == query_lower {
                score += 10;
            } else if entry.title_lc.contains(&query_lower) {
                score += 5;
            }

            if entry.aliases_lc.iter().any(|a| a.contains(&query_lower)) {
                score += 3;
            }

            if entry.summary.to_lowercase().contains(&query_lower) {
                score += 1;
            }

            (score > 0).then_some((entry, score))
        })
        .collect();

    results.sort_by(|a, b| b.1.cmp(&a.1));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, aliases: &[&str], summary: &str) -> SearchEntry {
        SearchEntry {
            title: title.to_string(),
            title_lc: title.to_lowercase(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            aliases_lc: aliases.iter().map(|a| a.to_lowercase()).collect(),
            summary: summary.to_string(),
            url: format!("/pages/{}/", title),
            categories: Vec::new(),
        }
    }

    #[test]
    fn test_exact_title_ranks_first() {
        let entries = vec![
            entry("Virgo Prime", &[], ""),
            entry("Leo", &[], "rival of virgo"),
            entry("Virgo", &[], ""),
        ];
        let results = perform_search(&entries, "VIRGO");

        let titles: Vec<&str> = results.iter().map(|(e, _)| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Virgo", "Virgo Prime", "Leo"]);
        assert_eq!(results[0].1, 10);
    }

    #[test]
    fn test_alias_match() {
        let entries = vec![entry("Virgo", &["處女座"], "")];
        let results = perform_search(&entries, "處女");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, 3);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let entries = vec![entry("Virgo", &[], "")];
        assert!(perform_search(&entries, "  ").is_empty());
        assert!(perform_search(&entries, "leo").is_empty());
    }
}
