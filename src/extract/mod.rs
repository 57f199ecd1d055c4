//! Reference extraction from source files.
//!
//! This module provides per-language extraction of reference directives:
//! - C: `#include "..."` directives
//! - C++: contract defined, extraction intentionally unimplemented
//! - Shell: `source ...` and `. ...` directives
//! - Python, Ruby: placeholder variants with no extraction behavior yet
//!
//! Matching is deliberately textual and single-line: line comments are
//! stripped, block comments are NOT recognized. A directive inside a block
//! comment is still treated as active. This is a stated limitation of the
//! scanner, not a bug.

pub mod c;
pub mod cpp;
pub mod python;
pub mod ruby;
pub mod shell;

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::Config;
use crate::detect::Language;
use crate::error::{CycleScanError, Result};

/// One line of a source file, read once and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Stable 0-based input order.
    pub line_no: usize,

    /// The line exactly as read.
    pub raw_text: String,

    /// `raw_text` with language-specific inactive spans (line comments)
    /// removed.
    pub filtered_text: String,
}

/// A single reference directive resolved against the search context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The path literal as written in the directive.
    pub relative_path: String,

    /// The resolved path handed to the traversal.
    pub absolute_path: PathBuf,
}

/// Per-language reference extraction capability set.
///
/// Variants that have no working extraction yet must fail with an explicit
/// [`CycleScanError::NotSupported`] at the moment extraction is requested,
/// never surface a generic missing-capability failure deep in the call
/// stack.
pub trait ReferenceExtractor {
    /// The language this variant handles.
    fn language(&self) -> Language;

    /// Strip inactive text (line comments) into `filtered_text`.
    ///
    /// The default keeps every line fully active; working variants override
    /// this with their line-comment marker.
    fn filter_inactive(&self, lines: Vec<SourceLine>) -> Vec<SourceLine> {
        lines
    }

    /// Whether a filtered line is a reference directive.
    fn is_reference_line(&self, filtered_text: &str) -> Result<bool>;

    /// Extract the referenced path literal from a reference line.
    ///
    /// Tries an ordered list of capture patterns; the first successful
    /// capture wins. Fails with [`CycleScanError::CannotExtract`] if none
    /// match.
    fn extract_reference_path(&self, file: &Path, line: &SourceLine) -> Result<String>;

    /// Resolve an extracted path against the search context.
    ///
    /// The default is identity: the path literal is handed to the traversal
    /// unresolved and opened as-is.
    fn resolve_path(&self, relative_path: &str, _config: &Config) -> Result<PathBuf> {
        Ok(PathBuf::from(relative_path))
    }

    /// Read a file and produce its outgoing references, in file order.
    ///
    /// Any extraction or filesystem failure propagates unrecovered and
    /// aborts the whole traversal.
    fn get_references(&self, file: &Path, config: &Config) -> Result<Vec<Reference>> {
        let lines = read_source_lines(file)?;
        let lines = self.filter_inactive(lines);

        let mut references = Vec::new();
        for line in &lines {
            if !self.is_reference_line(&line.filtered_text)? {
                continue;
            }
            let relative_path = self.extract_reference_path(file, line)?;
            let absolute_path = self.resolve_path(&relative_path, config)?;
            references.push(Reference {
                relative_path,
                absolute_path,
            });
        }
        Ok(references)
    }
}

/// Select the extractor variant for a language.
pub fn extractor_for(language: Language) -> Box<dyn ReferenceExtractor> {
    match language {
        Language::C => Box::new(c::CExtractor),
        Language::Cpp => Box::new(cpp::CppExtractor),
        Language::Shell => Box::new(shell::ShellExtractor),
        Language::Python => Box::new(python::PythonExtractor),
        Language::Ruby => Box::new(ruby::RubyExtractor),
    }
}

/// Read a whole file into [`SourceLine`]s, one blocking pass.
///
/// `filtered_text` starts out equal to `raw_text`; filtering happens in a
/// separate step so the raw line survives for diagnostics.
pub fn read_source_lines(file: &Path) -> Result<Vec<SourceLine>> {
    let content = fs::read_to_string(file).map_err(|source| CycleScanError::Io {
        path: file.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .enumerate()
        .map(|(line_no, text)| SourceLine {
            line_no,
            raw_text: text.to_string(),
            filtered_text: text.to_string(),
        })
        .collect())
}

/// True iff the text matches at least one pattern in the list.
pub fn matches_any(text: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(text))
}

/// Try each capture pattern in order; the first successful capture group
/// wins, even if a later pattern would also match.
pub fn capture_first(text: &str, patterns: &[Regex]) -> Option<String> {
    for pattern in patterns {
        if let Some(captures) = pattern.captures(text) {
            if let Some(group) = captures.get(1) {
                return Some(group.as_str().to_string());
            }
        }
    }
    None
}

/// Strip everything from the comment marker to end of line into
/// `filtered_text`, leaving `raw_text` untouched.
pub fn strip_line_comments(lines: Vec<SourceLine>, comment: &Regex) -> Vec<SourceLine> {
    lines
        .into_iter()
        .map(|line| SourceLine {
            filtered_text: comment.replace(&line.raw_text, "").into_owned(),
            ..line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_precedence_first_pattern_wins() {
        let patterns = vec![
            Regex::new(r"^include (\w+)").unwrap(),
            Regex::new(r"include (\w+\.\w+)").unwrap(),
        ];
        // Both patterns match; the first capture must win.
        assert_eq!(
            capture_first("include util.sh", &patterns),
            Some("util".to_string())
        );
    }

    #[test]
    fn test_capture_falls_through_to_later_pattern() {
        let patterns = vec![
            Regex::new(r"^source (\S+)").unwrap(),
            Regex::new(r"^\. (\S+)").unwrap(),
        ];
        assert_eq!(
            capture_first(". helpers.sh", &patterns),
            Some("helpers.sh".to_string())
        );
    }

    #[test]
    fn test_capture_none_when_no_pattern_matches() {
        let patterns = vec![Regex::new(r"^source (\S+)").unwrap()];
        assert_eq!(capture_first("echo hi", &patterns), None);
    }

    #[test]
    fn test_matches_any() {
        let patterns = vec![
            Regex::new(r"^source ").unwrap(),
            Regex::new(r"^\. ").unwrap(),
        ];
        assert!(matches_any("source lib.sh", &patterns));
        assert!(matches_any(". lib.sh", &patterns));
        assert!(!matches_any("  source lib.sh", &patterns));
    }

    #[test]
    fn test_strip_line_comments_preserves_raw_text() {
        let comment = Regex::new(r"//.*$").unwrap();
        let lines = vec![SourceLine {
            line_no: 0,
            raw_text: "int x; // counter".to_string(),
            filtered_text: "int x; // counter".to_string(),
        }];
        let filtered = strip_line_comments(lines, &comment);
        assert_eq!(filtered[0].raw_text, "int x; // counter");
        assert_eq!(filtered[0].filtered_text, "int x; ");
        assert_eq!(filtered[0].line_no, 0);
    }
}
