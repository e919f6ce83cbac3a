#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Extraction pipeline producing the 2D-Doc field catalog.
//!
//! Wires the pieces together for one run: a [`TextSource`] produces the
//! specification text, [`twoddoc_extract`] turns it into a
//! [`FieldCatalog`], and [`output`] writes the catalog to its destination.
//! Runs are described by a [`config::CatalogConfig`].

pub mod config;
pub mod output;

use twoddoc_catalog_models::FieldCatalog;
use twoddoc_extract::SkippedCandidate;
use twoddoc_pdf::{SourceError, TextSource};

pub use config::{CatalogConfig, SourceConfig, default_config, load_config, parse_config_toml};
pub use output::{write_catalog, write_catalog_to};

/// Errors that abort an extraction run.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The specification text could not be obtained.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The run configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Serializing the catalog failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Strict mode is on and some candidate blocks did not complete.
    #[error(
        "{} candidate field block(s) did not complete: {}",
        .skipped.len(),
        summarize(.skipped)
    )]
    Strict {
        /// Every abandoned candidate, in source order.
        skipped: Vec<SkippedCandidate>,
    },
}

fn summarize(skipped: &[SkippedCandidate]) -> String {
    skipped
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Runs the extraction described by `config` and returns the catalog.
///
/// Does not write the catalog; see [`write_catalog_to`].
///
/// # Errors
///
/// Returns [`CatalogError`] if the text cannot be obtained or strict mode
/// rejects the scan.
pub fn run(config: &CatalogConfig) -> Result<FieldCatalog, CatalogError> {
    let source = config.source.build();
    run_with_source(source.as_ref(), config.strict)
}

/// Fetches the text from `source` and extracts the catalog.
///
/// An empty catalog is logged as a warning, never an error: it usually
/// means the wrong document or a changed layout, but it is a valid result.
///
/// # Errors
///
/// Returns [`CatalogError::Source`] if the source fails, or
/// [`CatalogError::Strict`] if `strict` is set and any candidate block was
/// abandoned.
pub fn run_with_source(
    source: &dyn TextSource,
    strict: bool,
) -> Result<FieldCatalog, CatalogError> {
    log::info!("Reading specification text from {}", source.describe());

    let text = source.fetch_source()?;
    let report = twoddoc_extract::extract_with_report(&text);

    for candidate in &report.skipped {
        log::debug!("Skipped {candidate}");
    }

    if strict && !report.skipped.is_empty() {
        return Err(CatalogError::Strict {
            skipped: report.skipped,
        });
    }

    if report.is_empty() {
        log::warn!(
            "No field blocks found in {} ({} bytes of text); was it converted with -layout?",
            source.describe(),
            text.len()
        );
    }

    let duplicates = report.catalog.duplicate_ids();
    if !duplicates.is_empty() {
        log::warn!("Duplicate field ids in catalog: {}", duplicates.join(", "));
    }

    log::info!(
        "Extracted {} field records ({} candidate blocks skipped)",
        report.catalog.len(),
        report.skipped.len()
    );

    Ok(report.catalog)
}
