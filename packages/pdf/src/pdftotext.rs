//! External `pdftotext` conversion.
//!
//! Runs the converter once over the document and captures its standard
//! output. The argument list is a template: every `{input}` placeholder is
//! replaced with the document path, so other converters with a different
//! command line can be plugged in through configuration.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{ExternalToolError, SourceError, TextSource};

/// Converter invoked when none is configured.
pub const DEFAULT_PROGRAM: &str = "pdftotext";

/// Converter arguments used when none are configured. `-layout` keeps the
/// column positions the field grammar depends on; `-` sends the text to
/// standard output.
pub const DEFAULT_ARGS: &[&str] = &["-layout", "{input}", "-"];

/// Replaces `{input}` placeholders in each argument with `input`.
///
/// # Example
///
/// ```
/// use twoddoc_pdf::expand_input_template;
///
/// let args = expand_input_template(&["-layout", "{input}", "-"], "spec.pdf");
/// assert_eq!(args, vec!["-layout", "spec.pdf", "-"]);
/// ```
#[must_use]
pub fn expand_input_template<S: AsRef<str>>(args: &[S], input: &str) -> Vec<String> {
    args.iter()
        .map(|arg| arg.as_ref().replace("{input}", input))
        .collect()
}

/// A [`TextSource`] that converts a PDF with an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdftotextSource {
    document: PathBuf,
    program: String,
    args: Vec<String>,
}

impl PdftotextSource {
    /// Converts `document` with `pdftotext -layout <document> -`.
    #[must_use]
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            program: DEFAULT_PROGRAM.to_owned(),
            args: DEFAULT_ARGS.iter().map(|&a| a.to_owned()).collect(),
        }
    }

    /// Uses a different converter executable.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replaces the argument template.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// The document being converted.
    #[must_use]
    pub fn document(&self) -> &Path {
        &self.document
    }

    /// The converter executable.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the converter, with the template expanded.
    #[must_use]
    pub fn resolved_args(&self) -> Vec<String> {
        expand_input_template(&self.args, &self.document.to_string_lossy())
    }
}

impl TextSource for PdftotextSource {
    fn fetch_source(&self) -> Result<String, SourceError> {
        let args = self.resolved_args();

        log::debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| ExternalToolError::Unavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExternalToolError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            }
            .into());
        }

        let text = String::from_utf8(output.stdout)?;

        log::debug!(
            "Converted {} to {} bytes of text",
            self.document.display(),
            text.len()
        );

        Ok(text)
    }

    fn describe(&self) -> String {
        format!("{} via {}", self.document.display(), self.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_command_line_keeps_layout_and_writes_to_stdout() {
        let source = PdftotextSource::new("doc/specification.pdf");
        assert_eq!(source.program(), "pdftotext");
        assert_eq!(
            source.resolved_args(),
            vec!["-layout", "doc/specification.pdf", "-"]
        );
    }

    #[test]
    fn expands_every_placeholder() {
        let args = expand_input_template(&["{input}", "--name={input}.txt", "-q"], "a.pdf");
        assert_eq!(args, vec!["a.pdf", "--name=a.pdf.txt", "-q"]);
    }

    #[test]
    fn missing_program_is_unavailable() {
        let source =
            PdftotextSource::new("spec.pdf").with_program("twoddoc-no-such-converter-binary");
        let err = source.fetch_source().unwrap_err();
        assert!(matches!(
            err,
            SourceError::ExternalTool(ExternalToolError::Unavailable { .. })
        ));
        assert!(err.to_string().contains("twoddoc-no-such-converter-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure_with_stderr() {
        let source = PdftotextSource::new("spec.pdf")
            .with_program("sh")
            .with_args(["-c", "echo 'Syntax Error: no such file' >&2; exit 3"]);
        match source.fetch_source().unwrap_err() {
            SourceError::ExternalTool(ExternalToolError::Failed {
                program,
                status,
                stderr,
            }) => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "Syntax Error: no such file");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn returns_converter_stdout() {
        let tmp = std::env::temp_dir().join("twoddoc_pdf_converter_test");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let document = tmp.join("rendered.txt");
        fs::write(&document, "AB   Sample Field\n     Taille Min.. 1\n").unwrap();

        let source = PdftotextSource::new(&document)
            .with_program("cat")
            .with_args(["{input}"]);
        assert_eq!(
            source.fetch_source().unwrap(),
            "AB   Sample Field\n     Taille Min.. 1\n"
        );

        // Cleanup
        let _ = fs::remove_dir_all(&tmp);
    }
}
