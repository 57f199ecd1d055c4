//! C++ reference extraction: contract defined, extraction unimplemented.
//!
//! The comment filter and system-include directories are in place, but the
//! directive matching rules for C++ (module imports, `#include` with
//! header-unit semantics) have not been decided. Every extraction request
//! fails fast with [`CycleScanError::NotSupported`] rather than silently
//! matching nothing.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Language;
use crate::error::{CycleScanError, Result};
use crate::extract::{strip_line_comments, ReferenceExtractor, SourceLine};
use crate::resolve::find_in_search_paths;

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*$").unwrap());

/// Fixed system include directories for C++ header lookup.
///
/// Dormant capability, same standing as the C variant's list.
// TODO: Probe at runtime with: echo | cpp -xc++ -Wp,-v - 2>&1 | grep " /usr"
pub const SYSTEM_INCLUDE_DIRS: &[&str] = &[
    "/usr/include/c++/6",
    "/usr/include/x86_64-linux-gnu/c++/6",
    "/usr/include/c++/6/backward",
    "/usr/lib/gcc/x86_64-linux-gnu/6/include",
    "/usr/local/include",
    "/usr/lib/gcc/x86_64-linux-gnu/6/include-fixed",
    "/usr/include/x86_64-linux-gnu",
    "/usr/include",
];

/// Resolve a system header name against the fixed include directories.
///
/// Not wired into the traversal; exposed for future `#include <...>`
/// support.
pub fn resolve_system_include(relative_path: &str) -> Result<PathBuf> {
    let dirs: Vec<PathBuf> = SYSTEM_INCLUDE_DIRS.iter().map(PathBuf::from).collect();
    find_in_search_paths(&dirs, Path::new(relative_path))
}

/// The C++ extractor variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppExtractor;

impl ReferenceExtractor for CppExtractor {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn filter_inactive(&self, lines: Vec<SourceLine>) -> Vec<SourceLine> {
        strip_line_comments(lines, &LINE_COMMENT)
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
