//! C reference extraction: `#include "..."` directives.
//!
//! Only project-local includes (`#include "..."`) are followed. System
//! includes (`#include <...>`) have a defined resolution strategy (see
//! [`resolve_system_include`]) that the traversal does not invoke yet.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Language;
use crate::error::{CycleScanError, Result};
use crate::extract::{capture_first, matches_any, strip_line_comments, ReferenceExtractor, SourceLine};
use crate::resolve::find_in_search_paths;

/// Line-comment marker to end of line.
// TODO: Detect multiline comments.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*$").unwrap());

/// Reference-directive patterns, anchored at line start.
static REFERENCE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![Regex::new(r#"^#include ""#).unwrap()]);

/// Ordered capture patterns for the referenced path literal.
static EXTRACT_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![Regex::new(r#".*["<](.*)[">].*"#).unwrap()]);

/// Fixed system include directories for `#include <...>` lookup.
///
/// Dormant capability: defined for forward compatibility with system-header
/// resolution, never invoked by the default traversal.
// TODO: Probe at runtime with: echo | gcc -E -Wp,-v - 2>&1 | grep " /usr"
pub const SYSTEM_INCLUDE_DIRS: &[&str] = &[
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

/// The C extractor variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CExtractor;

impl ReferenceExtractor for CExtractor {
    fn language(&self) -> Language {
        Language::C
    }

    fn filter_inactive(&self, lines: Vec<SourceLine>) -> Vec<SourceLine> {
        strip_line_comments(lines, &LINE_COMMENT)
    }

    fn is_reference_line(&self, filtered_text: &str) -> Result<bool> {
        Ok(matches_any(filtered_text, &REFERENCE_PATTERNS))
    }

    fn extract_reference_path(&self, file: &Path, line: &SourceLine) -> Result<String> {
        capture_first(&line.filtered_text, &EXTRACT_PATTERNS).ok_or_else(|| {
            CycleScanError::CannotExtract {
                file: file.to_path_buf(),
                line_no: line.line_no,
                text: line.filtered_text.clone(),
            }
        })
    }
}
