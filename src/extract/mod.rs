//! Text extraction from local documents.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors from text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No extractor exists for the file's format.
    #[error("Unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The file could not be read.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads a document as plain text.
///
/// Everything except PDF is treated as UTF-8 text, with invalid byte
/// sequences replaced rather than rejected. PDFs fail with
/// [`ExtractError::UnsupportedFormat`]; convert them to text first.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    if has_extension(path, "pdf") {
        return Err(ExtractError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    debug!(path = %path.display(), bytes = bytes.len(), "Extracted text");

    Ok(text)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
}
