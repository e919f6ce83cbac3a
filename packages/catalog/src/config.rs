//! Run configuration.
//!
//! A run is described by a small TOML file: where the specification text
//! comes from, where the catalog goes, and whether abandoned candidate
//! blocks should fail the run. A default configuration is embedded at
//! compile time via [`include_str!`].
//!
//! ```toml
//! output = "data/generated/structure.json"
//! strict = false
//!
//! [source]
//! type = "pdftotext"
//! document = "doc/specification.pdf"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use twoddoc_pdf::{PdftotextSource, StaticText, TextFileSource, TextSource};

use crate::CatalogError;

const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// A complete extraction run definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Where the specification text comes from.
    pub source: SourceConfig,
    /// Destination of the catalog. `None` writes to standard output.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Fail the run when any candidate block is abandoned.
    #[serde(default)]
    pub strict: bool,
}

/// How to obtain the specification text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Convert a PDF with an external converter.
    Pdftotext {
        /// The PDF to convert.
        document: PathBuf,
        /// Converter executable. Defaults to `pdftotext`.
        #[serde(default)]
        program: Option<String>,
        /// Argument template; `{input}` is replaced with `document`.
        /// Defaults to `["-layout", "{input}", "-"]`.
        #[serde(default)]
        args: Option<Vec<String>>,
    },
    /// Read text that was converted beforehand.
    TextFile {
        /// Path to the text file.
        path: PathBuf,
    },
    /// Use the given text as is.
    Inline {
        /// The document text.
        text: String,
    },
}

impl SourceConfig {
    /// Builds the [`TextSource`] this configuration describes.
    #[must_use]
    pub fn build(&self) -> Box<dyn TextSource> {
        match self {
            Self::Pdftotext {
                document,
                program,
                args,
            } => {
                let mut source = PdftotextSource::new(document);
                if let Some(program) = program {
                    source = source.with_program(program);
                }
                if let Some(args) = args {
                    source = source.with_args(args.iter().cloned());
                }
                Box::new(source)
            }
            Self::TextFile { path } => Box::new(TextFileSource::new(path)),
            Self::Inline { text } => Box::new(StaticText::new(text.as_str())),
        }
    }
}

/// Parses a run configuration from a TOML string.
///
/// # Errors
///
/// Returns [`CatalogError::Config`] if the TOML is malformed or does not
/// describe a valid run.
pub fn parse_config_toml(toml_str: &str) -> Result<CatalogConfig, CatalogError> {
    Ok(toml::de::from_str(toml_str)?)
}

/// Loads a run configuration from a TOML file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read, or
/// [`CatalogError::Config`] if it does not parse.
pub fn load_config(path: &Path) -> Result<CatalogConfig, CatalogError> {
    let toml_str = std::fs::read_to_string(path)?;
    log::debug!("Loaded configuration from {}", path.display());
    parse_config_toml(&toml_str)
}

/// Returns the configuration embedded in the binary.
///
/// # Errors
///
/// Returns [`CatalogError::Config`] if the embedded TOML is invalid.
pub fn default_config() -> Result<CatalogConfig, CatalogError> {
    parse_config_toml(DEFAULT_CONFIG_TOML)
}
