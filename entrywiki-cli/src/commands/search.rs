//! Search command implementation
use anyhow::{bail, Context, Result};
use entrywiki_core::{perform_search, Config, SearchEntry};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub limit: usize,
    pub json: bool,
}

#[derive(Serialize)]
struct SearchResult<'a> {
    title: &'a str,
    url: &'a str,
    summary: &'a str,
    categories: &'a [String],
    score: u32,
}

/// Search the built search index
pub fn search_site(config_path: &Path, query: &str, opts: SearchOptions) -> Result<()> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    let index_path = config.output_dir().join("search-index.json");

    if !index_path.exists() {
        bail!("Search index not found. Run `entrywiki build` first.");
    }

    let index_json = fs::read_to_string(&index_path).context("Failed to read search index")?;
    let entries: Vec<SearchEntry> =
        serde_json::from_str(&index_json).context("Failed to parse search index")?;

    let results = perform_search(&entries, query);

    if opts.json {
        let json_results: Vec<SearchResult> = results
            .iter()
            .take(opts.limit)
            .map(|(entry, score)| SearchResult {
                title: &entry.title,
                url: &entry.url,
                summary: &entry.summary,
                categories: &entry.categories,
                score: *score,
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&json_results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found for '{}'", query);
        return Ok(());
    }

    println!("Found {} results for '{}':\n", results.len(), query);
    for (entry, _score) in results.iter().take(opts.limit) {
        print_search_result(entry);
    }

    if results.len() > opts.limit {
        println!("  ... and {} more results", results.len() - opts.limit);
    }

    Ok(())
}

fn print_search_result(entry: &SearchEntry) {
    println!("{}", entry.title);
    println!("  {}", entry.url);
    if !entry.summary.is_empty() {
        println!("  {}", entry.summary);
    }
    println!();
}
