#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Text source adapter for the 2D-Doc specification.
//!
//! The 2D-Doc technical specification is published as a PDF. Field blocks
//! are only recognizable once the PDF has been rendered to text with its
//! column layout preserved, which is what `pdftotext -layout` does. This
//! crate hides where that text comes from behind the [`TextSource`] trait:
//!
//! - [`PdftotextSource`] runs the external converter over the document
//! - [`TextFileSource`] reads text that was converted beforehand
//! - [`StaticText`] wraps a string already in memory
//!
//! Conversion failures are fatal and never retried.

pub mod pdftotext;
pub mod text_file;

use std::process::ExitStatus;

pub use pdftotext::{DEFAULT_ARGS, DEFAULT_PROGRAM, PdftotextSource, expand_input_template};
pub use text_file::TextFileSource;

/// The external conversion tool could not produce the text.
#[derive(Debug, thiserror::Error)]
pub enum ExternalToolError {
    /// The converter could not be started (not installed, not executable).
    #[error("failed to run {program} (is it installed?): {source}")]
    Unavailable {
        /// Program that was invoked.
        program: String,
        /// Spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The converter ran but exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        /// Program that was invoked.
        program: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Trimmed standard error output.
        stderr: String,
    },
}

/// Errors produced while obtaining the document text.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The external conversion step failed.
    #[error(transparent)]
    ExternalTool(#[from] ExternalToolError),

    /// The text was not valid UTF-8.
    #[error("document text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Reading a text file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that yields the full text rendering of the specification.
pub trait TextSource {
    /// Produces the whole document text as one string.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the text cannot be obtained. No partial
    /// text is ever returned.
    fn fetch_source(&self) -> Result<String, SourceError>;

    /// Short label used in log messages.
    fn describe(&self) -> String;
}

/// A [`TextSource`] over text already held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticText(pub String);

impl StaticText {
    /// Wraps the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl TextSource for StaticText {
    fn fetch_source(&self) -> Result<String, SourceError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory text ({} bytes)", self.0.len())
    }
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn fetch_source(&self) -> Result<String, SourceError> {
        (**self).fetch_source()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
