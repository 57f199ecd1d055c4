//! Ruby reference extraction: placeholder variant.
//!
//! `require`/`require_relative` handling is not decided yet. Every
//! extraction request fails fast with [`CycleScanError::NotSupported`].

use std::path::Path;

use crate::detect::Language;
use crate::error::{CycleScanError, Result};
use crate::extract::{ReferenceExtractor, SourceLine};

/// The Ruby extractor variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyExtractor;

impl ReferenceExtractor for RubyExtractor {
    fn language(&self) -> Language {
        Language::Ruby
    }

    fn is_reference_line(&self, _filtered_text: &str) -> Result<bool> {
        Err(CycleScanError::NotSupported {
            language: self.language().as_str(),
            operation: "reference matching",
        })
    }

    fn extract_reference_path(&self, _file: &Path, _line: &SourceLine) -> Result<String> {
        Err(CycleScanError::NotSupported {
            language: self.language().as_str(),
            operation: "reference extraction",
        })
    }
}
