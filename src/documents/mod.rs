// Input documents — discovery and loading.

pub mod locator;

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::DocumentError;
use crate::text::stopwords::StopWords;
use crate::text::tokenizer::{tokenize, TokenSequence};

/// Logical filename of the first essay.
pub const FIRST_ESSAY: &str = "essay1.txt";
/// Logical filename of the second essay.
pub const SECOND_ESSAY: &str = "essay2.txt";

/// A logical document and where the locator found it (if anywhere).
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub path: Option<PathBuf>,
}

impl Document {
    /// Resolve `name` once through the locator.
    pub fn locate(name: &str, locator: &locator::Locator) -> Self {
        let path = locator.find(name);
        match &path {
            Some(p) => info!(document = name, path = %p.display(), "Document located"),
            None => warn!(document = name, "Document not found"),
        }
        Self {
            name: name.to_string(),
            path,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Read and tokenize the document.
    ///
    /// Absence is `NotFound`, an unreadable or non-UTF-8 file is
    /// `ReadFailure`, and an empty file is an empty sequence.
    pub fn load_tokens(&self, stop_words: &StopWords) -> Result<TokenSequence, DocumentError> {
        let path = self.path.as_ref().ok_or_else(|| DocumentError::NotFound {
            name: self.name.clone(),
        })?;

        let text = fs::read_to_string(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Failed to read document");
            DocumentError::ReadFailure {
                path: path.clone(),
                source,
            }
        })?;

        let tokens = tokenize(&text, stop_words);
        info!(document = %self.name, tokens = tokens.len(), "Document tokenized");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_not_found() {
        let doc = Document {
            name: "essay1.txt".to_string(),
            path: None,
        };
        let err = doc.load_tokens(&StopWords::classic()).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound { .. }));
    }

    #[test]
    fn test_empty_file_is_empty_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay1.txt");
        std::fs::write(&path, "").unwrap();
        let doc = Document {
            name: "essay1.txt".to_string(),
            path: Some(path),
        };
        let tokens = doc.load_tokens(&StopWords::classic()).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay1.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let doc = Document {
            name: "essay1.txt".to_string(),
            path: Some(path),
        };
        let err = doc.load_tokens(&StopWords::classic()).unwrap_err();
        assert!(matches!(err, DocumentError::ReadFailure { .. }));
    }

    #[test]
    fn test_directory_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document {
            name: "essay1.txt".to_string(),
            path: Some(dir.path().to_path_buf()),
        };
        let err = doc.load_tokens(&StopWords::classic()).unwrap_err();
        assert!(matches!(err, DocumentError::ReadFailure { .. }));
    }
}
