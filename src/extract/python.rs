//! Python reference extraction: placeholder variant.
//!
//! Python `import` resolution needs module-to-file mapping rules that are
//! not decided yet. The variant exists so the language tag dispatches, and
//! every extraction request fails fast with
//! [`CycleScanError::NotSupported`].

use std::path::Path;

use crate::detect::Language;
use crate::error::{CycleScanError, Result};
use crate::extract::{ReferenceExtractor, SourceLine};

/// The Python extractor variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExtractor;

impl ReferenceExtractor for PythonExtractor {
    fn language(&self) -> Language {
        Language::Python
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
