//! Site building logic: entries in, validated site index out.
//!
//! Nothing here writes to disk. The builder turns the loaded entry collection
//! into pages, categories, and the frozen title registry that rendering reads.

use crate::{
    config::Config,
    models::*,
    registry::{RegistryError, TitleRegistry},
    slug::slugify,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid entry collection: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Title registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Duplicate slug '{slug}' for '{first}' and '{second}'")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

/// Read and parse the entry collection (a JSON array of entries)
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, BuildError> {
    let contents = fs::read_to_string(path)?;
    let entries: Vec<Entry> = serde_json::from_str(&contents)?;
    tracing::info!("Loaded {} entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Main site builder
pub struct SiteBuilder {
    config: Config,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the configured entry collection and build the site index
    pub fn build(&self) -> Result<SiteIndex, BuildError> {
        let entries = load_entries(&self.config.data_path())?;
        self.build_from_entries(entries)
    }

    /// Build the site index from already loaded entries
    pub fn build_from_entries(&self, entries: Vec<Entry>) -> Result<SiteIndex, BuildError> {
        let base_url = self.config.normalized_base_url();
        let mut diagnostics = Vec::new();

        let mut pages = accept_entries(entries, &base_url, &self.config, &mut diagnostics)?;
        pages.sort_by(|a, b| a.entry.title.cmp(&b.entry.title));

        let registry = self.build_registry(&pages, &mut diagnostics)?;
        let categories = group_categories(&pages, &base_url, &mut diagnostics);

        for page in &pages {
            for target in &page.entry.see_also {
                if registry.get(target).is_none() {
                    diagnostics.push(Diagnostic::info(
                        "see_also.unresolved",
                        Some(&page.entry.title),
                        format!("See-also target '{}' is not an entry", target),
                    ));
                }
            }
        }

        tracing::info!(
            "Built site index with {} pages in {} categories",
            pages.len(),
            categories.len()
        );

        Ok(SiteIndex {
            pages,
            categories,
            registry,
            diagnostics,
        })
    }

    /// Titles first, then aliases if enabled, so a title always wins over an alias
    fn build_registry(
        &self,
        pages: &[Page],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<TitleRegistry, BuildError> {
        let mut builder = TitleRegistry::builder();
        for page in pages {
            builder.insert(page.entry.title.as_str(), page.url.as_str())?;
        }

        if self.config.link_aliases {
            for page in pages {
                for alias in &page.entry.aliases {
                    if alias.trim().is_empty() {
                        continue;
                    }
                    if let Some(existing) = builder.get(alias) {
                        if existing != page.url {
                            diagnostics.push(Diagnostic::warning(
                                "alias.conflict",
                                Some(&page.entry.title),
                                format!("Alias '{}' already links to {}", alias, existing),
                            ));
                        }
                        continue;
                    }
                    builder.insert(alias.as_str(), page.url.as_str())?;
                }
            }
        }

        Ok(builder.build()?)
    }
}

/// Drop entries that cannot be published and resolve slugs and URLs for the rest
fn accept_entries(
    entries: Vec<Entry>,
    base_url: &str,
    config: &Config,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<Page>, BuildError> {
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut slug_owner: HashMap<String, String> = HashMap::new();
    let mut pages = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.title.trim().is_empty() {
            tracing::warn!("Skipping entry with empty title");
            diagnostics.push(Diagnostic::error(
                "entry.empty_title",
                None,
                "Entry has an empty title and was skipped",
            ));
            continue;
        }

        if !seen_titles.insert(entry.title.clone()) {
            tracing::warn!("Duplicate title: {}", entry.title);
            diagnostics.push(Diagnostic::warning(
                "entry.duplicate_title",
                Some(&entry.title),
                "Title already used by an earlier entry; this entry was skipped",
            ));
            continue;
        }

        let slug = slugify(&entry.title);
        if slug.is_empty() {
            diagnostics.push(Diagnostic::error(
                "entry.empty_slug",
                Some(&entry.title),
                "Title produces an empty slug and was skipped",
            ));
            continue;
        }

        if let Some(first) = slug_owner.get(&slug) {
            return Err(BuildError::DuplicateSlug {
                slug,
                first: first.clone(),
                second: entry.title,
            });
        }
        slug_owner.insert(slug.clone(), entry.title.clone());

        let mut categories: Vec<String> = entry
            .category
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        if categories.is_empty() {
            categories.push(config.uncategorized_label.clone());
        }

        let url = format!("{}pages/{}/", base_url, slug);
        pages.push(Page {
            entry,
            slug,
            url,
            categories,
        });
    }

    Ok(pages)
}

/// Group pages by category name; members keep the page (title) order
fn group_categories(
    pages: &[Page],
    base_url: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Category> {
    let mut members: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, page) in pages.iter().enumerate() {
        for name in &page.categories {
            members.entry(name.as_str()).or_default().push(idx);
        }
    }

    let mut slug_owner: HashMap<String, &str> = HashMap::new();
    let mut categories = Vec::with_capacity(members.len());

    for (name, members) in members {
        let slug = slugify(name);
        if slug.is_empty() {
            diagnostics.push(Diagnostic::error(
                "category.empty_slug",
                None,
                format!("Category '{}' produces an empty slug; no page written", name),
            ));
            continue;
        }

        if let Some(first) = slug_owner.get(&slug) {
            tracing::warn!("Category slug '{}' is shared by '{}' and '{}'", slug, first, name);
            diagnostics.push(Diagnostic::error(
                "category.duplicate_slug",
                None,
                format!(
                    "Category '{}' has the same slug '{}' as '{}'; no page written",
                    name, slug, first
                ),
            ));
            continue;
        }
        slug_owner.insert(slug.clone(), name);

        categories.push(Category {
            name: name.to_string(),
            url: format!("{}categories/{}/", base_url, slug),
            slug,
            members,
        });
    }

    categories
}
