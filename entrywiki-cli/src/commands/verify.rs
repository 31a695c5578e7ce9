//! Verify the entry collection and emit diagnostics.

use anyhow::{bail, Context, Result};
use entrywiki_core::{Config, Diagnostic, DiagnosticSeverity, SiteBuilder};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct VerificationSummary<'a> {
    entries: usize,
    categories: usize,
    errors: usize,
    warnings: usize,
    infos: usize,
    diagnostics: &'a [Diagnostic],
}

/// Run the build pipeline without rendering output and surface diagnostics.
pub fn verify_site(config_path: &Path, json: bool) -> Result<()> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    let site_index = SiteBuilder::new(config)
        .build()
        .context("Failed to build site for verification")?;

    let summary = VerificationSummary {
        entries: site_index.pages.len(),
        categories: site_index.categories.len(),
        errors: site_index.count(DiagnosticSeverity::Error),
        warnings: site_index.count(DiagnosticSeverity::Warning),
        infos: site_index.count(DiagnosticSeverity::Info),
        diagnostics: &site_index.diagnostics,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Verification complete: {} entries, {} categories, {} errors, {} warnings, {} info",
            summary.entries, summary.categories, summary.errors, summary.warnings, summary.infos
        );
        for diag in summary.diagnostics {
            let entry = diag
                .entry
                .as_deref()
                .map(|s| format!(" [{}]", s))
                .unwrap_or_default();
            println!("- {:?} {}{}: {}", diag.severity, diag.code, entry, diag.message);
        }
    }

    if summary.errors > 0 {
        bail!("{} error(s) found in the entry collection", summary.errors);
    }

    Ok(())
}
