#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI tool for extracting the 2D-Doc field catalog.
//!
//! Converts the 2D-Doc technical specification to text (via `pdftotext`
//! unless a pre-converted text file is given), extracts every field block,
//! and writes the catalog as pretty-printed JSON.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use twoddoc_catalog::{CatalogConfig, CatalogError, SourceConfig};
use twoddoc_pdf::TextSource as _;

#[derive(Parser)]
#[command(name = "twoddoc_catalog", about = "2D-Doc field catalog extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the field catalog and write it as JSON
    Extract {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file (overrides the configuration)
        #[arg(long, short, conflicts_with = "stdout")]
        output: Option<PathBuf>,
        /// Write the catalog to standard output instead of a file
        #[arg(long)]
        stdout: bool,
        /// Fail if any candidate field block is incomplete
        #[arg(long)]
        strict: bool,
    },
    /// Print the specification text the extractor would see
    Text {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Default)]
struct SourceArgs {
    /// Run configuration file (TOML); the built-in configuration is used
    /// when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// PDF to convert with pdftotext
    #[arg(long, conflicts_with = "text")]
    document: Option<PathBuf>,
    /// Text file already converted with `pdftotext -layout`
    #[arg(long)]
    text: Option<PathBuf>,
}

impl SourceArgs {
    /// Loads the configuration and applies the source overrides.
    fn resolve(&self) -> Result<CatalogConfig, CatalogError> {
        let mut config = match &self.config {
            Some(path) => twoddoc_catalog::load_config(path)?,
            None => twoddoc_catalog::default_config()?,
        };

        if let Some(document) = &self.document {
            config.source = match config.source {
                SourceConfig::Pdftotext { program, args, .. } => SourceConfig::Pdftotext {
                    document: document.clone(),
                    program,
                    args,
                },
                _ => SourceConfig::Pdftotext {
                    document: document.clone(),
                    program: None,
                    args: None,
                },
            };
        } else if let Some(path) = &self.text {
            config.source = SourceConfig::TextFile { path: path.clone() };
        }

        Ok(config)
    }
}

/// Resolves the configuration for `extract`, applying the output and strict
/// flags on top of the source overrides.
fn extract_config(
    source: &SourceArgs,
    output: Option<PathBuf>,
    stdout: bool,
    strict: bool,
) -> Result<CatalogConfig, CatalogError> {
    let mut config = source.resolve()?;
    if output.is_some() {
        config.output = output;
    } else if stdout {
        config.output = None;
    }
    config.strict |= strict;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            source,
            output,
            stdout,
            strict,
        } => {
            let config = extract_config(&source, output, stdout, strict)?;
            let catalog = twoddoc_catalog::run(&config)?;
            twoddoc_catalog::write_catalog_to(&catalog, config.output.as_deref())?;
        }
        Commands::Text { source } => {
            let config = source.resolve()?;
            let text = config.source.build().fetch_source()?;
            print!("{text}");
        }
    }

    Ok(())
}
