//! Pre-converted text input.

use std::path::{Path, PathBuf};

use crate::{SourceError, TextSource};

/// A [`TextSource`] reading a text file produced earlier by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for TextFileSource {
    fn fetch_source(&self) -> Result<String, SourceError> {
        let bytes = std::fs::read(&self.path)?;
        let text = String::from_utf8(bytes)?;

        log::debug!("Read {} bytes of text from {}", text.len(), self.path.display());

        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_whole_file() {
        let tmp = std::env::temp_dir().join("twoddoc_pdf_text_file_test");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let path = tmp.join("spec.txt");
        fs::write(&path, "10   Adresse ligne 1\n").unwrap();

        let source = TextFileSource::new(&path);
        assert_eq!(source.fetch_source().unwrap(), "10   Adresse ligne 1\n");

        fs::write(&path, [0xc3, 0x28]).unwrap();
        assert!(matches!(
            source.fetch_source().unwrap_err(),
            SourceError::InvalidUtf8(_)
        ));

        // Cleanup
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = TextFileSource::new("/nonexistent/twoddoc/spec.txt");
        assert!(matches!(
            source.fetch_source().unwrap_err(),
            SourceError::Io(_)
        ));
    }
}
