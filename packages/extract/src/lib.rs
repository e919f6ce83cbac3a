#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Field block extraction for the 2D-Doc specification text.
//!
//! The 2D-Doc technical specification describes every data field in a
//! fixed-layout block (id and name, `Taille Min`, `Taille Max`, `Type`,
//! `Description` plus indented continuation lines). Once the PDF has been
//! converted with `pdftotext -layout`, those blocks are recognizable purely
//! from their indentation. This crate scans the text line by line and turns
//! each complete block into a [`FieldRecord`].
//!
//! Anything that is not a complete block (page headers, footers, prose,
//! truncated blocks) is ignored. [`extract_with_report`] additionally lists
//! the candidate blocks that were abandoned, for callers that want to be
//! strict about it.

pub mod grammar;
pub mod normalize;
pub mod scanner;

use strum_macros::Display;

pub use scanner::Scanner;
pub use twoddoc_catalog_models::{FieldCatalog, FieldRecord};

/// The part of a field block that was missing when a candidate was
/// abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Expectation {
    /// The `Taille Min` line.
    #[strum(serialize = "Taille Min line")]
    MinSize,
    /// The `Taille Max` line.
    #[strum(serialize = "Taille Max line")]
    MaxSize,
    /// The `Type` line.
    #[strum(serialize = "Type line")]
    ValueType,
    /// The `Description` line.
    #[strum(serialize = "Description line")]
    Description,
}

/// A start line whose block did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCandidate {
    /// 1-based line number of the start line.
    pub line: usize,
    /// Identifier read from the start line.
    pub id: String,
    /// What was expected but not found.
    pub expected: Expectation,
}

impl std::fmt::Display for SkippedCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "candidate field {} at line {}: missing {}",
            self.id, self.line, self.expected
        )
    }
}

/// Result of a scan: the catalog plus every abandoned candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Records from complete blocks, in source order.
    pub catalog: FieldCatalog,
    /// Candidate starts that did not produce a record, in source order.
    pub skipped: Vec<SkippedCandidate>,
}

impl ExtractReport {
    /// Whether the scan produced no record at all.
    ///
    /// Not an error, but usually means the input was the wrong document or
    /// its layout changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

/// Extracts the ordered field catalog from the document text.
///
/// Pure and deterministic: the same text always yields the same catalog.
/// Blocks that do not match the full layout are silently omitted.
#[must_use]
pub fn extract(text: &str) -> FieldCatalog {
    extract_with_report(text).catalog
}

/// Like [`extract`], but also reports every abandoned candidate block.
#[must_use]
pub fn extract_with_report(text: &str) -> ExtractReport {
    let mut scanner = Scanner::new();

    for (idx, line) in text.lines().enumerate() {
        scanner.feed(idx + 1, line);
    }

    let report = scanner.finish();

    log::debug!(
        "Extracted {} field records ({} candidates skipped)",
        report.catalog.len(),
        report.skipped.len()
    );

    report
}
