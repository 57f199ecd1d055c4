//! Traversal configuration.
//!
//! One [`Config`] is built per run and stays immutable for the lifetime of
//! the traversal. It is echoed back verbatim in the final report for audit
//! display.

use std::path::PathBuf;

use serde::Serialize;

use crate::detect::Language;
use crate::error::{CycleScanError, Result};

/// Immutable configuration for one traversal.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Source file the search starts on.
    pub start_file: PathBuf,

    /// Ordered list of directories to look up relative reference paths in.
    pub search_paths: Vec<PathBuf>,

    /// Language of the start file (selects the extractor variant).
    pub language: Language,

    /// Maximum search depth before giving up. Always >= 1.
    pub max_depth: usize,
}

impl Config {
    /// Build a configuration, validating the depth bound.
    ///
    /// The CLI already enforces `max_depth >= 1` via clap; this re-validates
    /// for library callers constructing a [`Config`] directly.
    pub fn new(
        start_file: PathBuf,
        search_paths: Vec<PathBuf>,
        language: Language,
        max_depth: usize,
    ) -> Result<Self> {
        if max_depth < 1 {
            return Err(CycleScanError::InvalidMaxDepth(max_depth as u64));
        }
        Ok(Config {
            start_file,
            search_paths,
            language,
            max_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_depth_rejected() {
        let err = Config::new(PathBuf::from("a.c"), vec![PathBuf::from(".")], Language::C, 0)
            .unwrap_err();
        assert!(matches!(err, CycleScanError::InvalidMaxDepth(0)));
    }

    #[test]
    fn test_minimum_depth_accepted() {
        let config =
            Config::new(PathBuf::from("a.c"), vec![PathBuf::from(".")], Language::C, 1).unwrap();
        assert_eq!(config.max_depth, 1);
    }
}
