//! Cyclescan error types.
//!
//! All errors are typed and fatal to the run: there is no per-file
//! skip-and-continue. A detected cycle is NOT an error — it flows through
//! [`crate::traverse::TraversalStatus`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cyclescan operations.
#[derive(Error, Debug)]
pub enum CycleScanError {
    /// I/O error during file operations.
    #[error("I/O error for path {path}: {source}")]
    Io {
        /// The file path that caused the I/O error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line matched as a reference directive but no extraction pattern
    /// captured a path.
    #[error("Cannot extract referenced path from {file} line {line_no}: {text:?}")]
    CannotExtract {
        /// The file containing the offending reference line.
        file: PathBuf,
        /// Line number of the reference line (0-based).
        line_no: usize,
        /// The filtered text of the reference line.
        text: String,
    },

    /// Language tag has no extractor variant.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The language variant exists but the requested capability is
    /// intentionally unimplemented.
    #[error("{operation} is not implemented for language '{language}'")]
    NotSupported {
        /// The language tag.
        language: &'static str,
        /// The capability that was requested.
        operation: &'static str,
    },

    /// A path was resolved against an empty search-path list.
    #[error("Empty search-path list given")]
    EmptySearchPath,

    /// A referenced file was not found in any search path.
    #[error("Did not find referenced file in any search path: {relative}")]
    SearchPathExhausted {
        /// The relative path that was looked up.
        relative: PathBuf,
    },

    /// Language could not be determined for a file.
    #[error("Cannot detect language for {path}: {message}")]
    LanguageDetection {
        /// The file whose language was requested.
        path: PathBuf,
        /// Why detection failed.
        message: String,
    },

    /// Maximum search depth below the allowed minimum of 1.
    #[error("Maximum search depth must be at least 1, got {0}")]
    InvalidMaxDepth(u64),

    /// Report serialization failure.
    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for CycleScanError {
    fn from(err: std::io::Error) -> Self {
        CycleScanError::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Result type alias for cyclescan operations.
pub type Result<T> = std::result::Result<T, CycleScanError>;
