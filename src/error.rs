//! Error types for the Quillon library.
//!
//! All fallible operations in Quillon return [`Result`], whose error type is
//! the [`QuillonError`] enum. Corpus- and matrix-level lookups deliberately do
//! *not* error: unseen terms degrade to zero/empty so the per-candidate
//! extraction path stays exception-free. Errors are reserved for
//! document-level failures (unprocessable input), configuration problems
//! (invalid tokenizer patterns) and ordering violations (extracting with an
//! untrained classifier).
//!
//! # Examples
//!
//! ```
//! use quillon::error::{QuillonError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QuillonError::document_unprocessable("empty input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Quillon operations.
#[derive(Error, Debug)]
pub enum QuillonError {
    /// The document cannot be tokenized or featurized at all (e.g. empty or
    /// blank input). No partial results are produced for such a document.
    #[error("Document unprocessable: {0}")]
    DocumentUnprocessable(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A classifier-based scorer was asked to predict before being trained.
    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    /// A required feature is missing from a candidate, which indicates a
    /// stage-ordering bug rather than bad input.
    #[error("Missing feature: {0}")]
    MissingFeature(String),

    /// I/O errors (model import/export)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with QuillonError.
pub type Result<T> = std::result::Result<T, QuillonError>;

impl QuillonError {
    /// Create a new document-unprocessable error.
    pub fn document_unprocessable<S: Into<String>>(msg: S) -> Self {
        QuillonError::DocumentUnprocessable(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        QuillonError::Analysis(msg.into())
    }

    /// Create a new classifier-unavailable error.
    pub fn classifier_unavailable<S: Into<String>>(msg: S) -> Self {
        QuillonError::ClassifierUnavailable(msg.into())
    }

    /// Create a new missing-feature error.
    pub fn missing_feature<S: Into<String>>(msg: S) -> Self {
        QuillonError::MissingFeature(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QuillonError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = QuillonError::document_unprocessable("blank document");
        assert_eq!(error.to_string(), "Document unprocessable: blank document");

        let error = QuillonError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = QuillonError::classifier_unavailable("not trained");
        assert_eq!(error.to_string(), "Classifier unavailable: not trained");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let quillon_error = QuillonError::from(io_error);

        match quillon_error {
            QuillonError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
