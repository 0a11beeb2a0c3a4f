//! Document ingestion: the text-supplying collaborator for the core.
//!
//! The extraction engine consumes page-ordered text only; this module is
//! where file formats end. Plain-text documents use form feeds as page
//! breaks; PDFs go through `pdf-extract`.

use std::fs;
use std::path::Path;

use partscare_core::{DocumentSource, SourceError};

/// File-backed document source for `.txt` and `.pdf` inputs.
pub struct FileSource {
    extensions: Vec<String>,
}

impl FileSource {
    pub fn new(extensions: &[String]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

impl DocumentSource for FileSource {
    fn eligible(&self, path: &Path) -> bool {
        self.extensions.contains(&extension(path))
    }

    fn pages(&self, path: &Path) -> Result<Vec<String>, SourceError> {
        match extension(path).as_str() {
            "txt" => {
                let text = fs::read_to_string(path)?;
                Ok(text.split('\x0c').map(|page| page.to_string()).collect())
            }
            "pdf" => pdf_extract::extract_text_by_pages(path)
                .map_err(|e| SourceError::Read(e.to_string())),
            other => Err(SourceError::Unsupported(other.to_string())),
        }
    }
}
