//! Build command implementation.

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use entrywiki_core::{build_search_index, Config, DiagnosticSeverity, SiteBuilder, SiteIndex};
use entrywiki_render::PageRenderer;
use include_dir::{include_dir, Dir};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

// Embed the default stylesheet and search script so a bare project still builds
static STATIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/../static");

const SEARCH_INDEX_FILENAME: &str = "search-index.json";

/// Build the static site (writes output) and discard the in-memory index
pub fn build_site(config_path: &Path) -> Result<()> {
    tracing::info!("Loading config from {:?}", config_path);
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    build_site_with_config(&config).map(|_| ())
}

/// Build the site from an already loaded config, writing output and returning the index.
pub fn build_site_with_config(config: &Config) -> Result<SiteIndex> {
    tracing::info!("Building site: {}", config.site.title);

    let site_index = SiteBuilder::new(config.clone())
        .build()
        .context("Failed to build site")?;

    for diag in &site_index.diagnostics {
        match diag.severity {
            DiagnosticSeverity::Error | DiagnosticSeverity::Warning => {
                tracing::warn!("{}: {}", diag.code, diag.message)
            }
            DiagnosticSeverity::Info => tracing::debug!("{}: {}", diag.code, diag.message),
        }
    }

    let output_dir = config.output_dir();
    prepare_output_dir(config, &output_dir)?;

    copy_assets(config, &output_dir)?;

    let renderer = PageRenderer::new(config, &site_index, chrono::Utc::now().year());

    // Render entry pages in parallel; the index and registry are only read
    let entry_pages: Vec<(String, String)> = site_index
        .pages
        .par_iter()
        .map(|page| {
            renderer
                .entry_page(page)
                .map(|html| (page.output_rel_path(), html))
                .with_context(|| format!("Failed to render entry {:?}", page.entry.title))
        })
        .collect::<Result<_>>()?;

    for (rel_path, html) in &entry_pages {
        write_output(&output_dir, rel_path, html)?;
    }
    tracing::info!("Rendered {} entry pages", entry_pages.len());

    for category in &site_index.categories {
        let html = renderer
            .category_page(category)
            .with_context(|| format!("Failed to render category {:?}", category.name))?;
        write_output(&output_dir, &category.output_rel_path(), &html)?;
    }

    let html = renderer
        .categories_page()
        .context("Failed to render category list")?;
    write_output(&output_dir, "categories/index.html", &html)?;
    tracing::info!("Rendered {} category pages", site_index.categories.len());

    let html = renderer.home_page().context("Failed to render home page")?;
    write_output(&output_dir, "index.html", &html)?;

    generate_search_index(&output_dir, &site_index)?;

    tracing::info!("✓ Built {} pages", site_index.pages.len());
    tracing::info!("✓ Output written to {:?}", output_dir);

    Ok(site_index)
}

/// Remove a previous build (when enabled) and make sure the directory exists
fn prepare_output_dir(config: &Config, output_dir: &Path) -> Result<()> {
    if config.clean_output && output_dir.exists() {
        if is_inside(&config.data_path(), output_dir) || is_inside(&config.static_dir(), output_dir) {
            bail!(
                "Refusing to clean {:?}: it contains the entry data or static assets",
                output_dir
            );
        }
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("Failed to clean output directory {:?}", output_dir))?;
        tracing::debug!("Removed previous output in {:?}", output_dir);
    }

    fs::create_dir_all(output_dir).context("Failed to create output directory")?;
    Ok(())
}

/// Compare resolved paths so `.` or `..` in either side cannot hide containment
fn is_inside(path: &Path, dir: &Path) -> bool {
    match (fs::canonicalize(path), fs::canonicalize(dir)) {
        (Ok(path), Ok(dir)) => path.starts_with(dir),
        _ => false,
    }
}

fn write_output(output_dir: &Path, rel_path: &str, contents: &str) -> Result<()> {
    let path = output_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(&path, contents).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

/// Generate search-index.json for the client-side search box
fn generate_search_index(output_dir: &Path, site_index: &SiteIndex) -> Result<()> {
    let index = build_search_index(site_index);
    let json = serde_json::to_string_pretty(&index).context("Failed to serialize search index")?;
    write_output(output_dir, SEARCH_INDEX_FILENAME, &json)?;

    tracing::info!(
        "Generated {} with {} entries",
        SEARCH_INDEX_FILENAME,
        index.len()
    );
    Ok(())
}

/// Copy static assets to the output root
fn copy_assets(config: &Config, output_dir: &Path) -> Result<()> {
    let static_dir = config.static_dir();
    if static_dir.exists() {
        copy_dir(&static_dir, output_dir)?;
        tracing::info!("Copied assets from {:?}", static_dir);
    } else {
        extract_embedded_static(output_dir)?;
        tracing::info!("Copied assets from embedded static bundle");
    }
    Ok(())
}

fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy {:?} to {:?}", entry.path(), target))?;
    }
    Ok(())
}

/// Write the embedded static bundle into `dest`
pub fn extract_embedded_static(dest: &Path) -> Result<()> {
    for entry in STATIC_ASSETS.entries() {
        extract_entry(entry, dest)?;
    }
    Ok(())
}

fn extract_entry(entry: &include_dir::DirEntry, dest: &Path) -> Result<()> {
    match entry {
        include_dir::DirEntry::Dir(dir) => {
            for sub_entry in dir.entries() {
                extract_entry(sub_entry, dest)?;
            }
        }
        include_dir::DirEntry::File(file) => {
            let target = dest.join(file.path());
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, file.contents())
                .with_context(|| format!("Failed to write embedded static file to {:?}", target))?;
        }
    }
    Ok(())
}
