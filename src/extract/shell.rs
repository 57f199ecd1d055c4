//! Shell reference extraction: `source ...` and `. ...` directives.
//!
//! Extracted paths get light cleanup: a `${VAR}/` prefix is stripped and
//! double quotes are removed. There is no general variable expansion — a
//! path the shell would compute at runtime cannot be followed statically.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Language;
use crate::error::{CycleScanError, Result};
use crate::extract::{capture_first, matches_any, strip_line_comments, ReferenceExtractor, SourceLine};

/// Line-comment marker to end of line.
// TODO: Detect multiline (heredoc) inactive regions.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#.*$").unwrap());

/// Reference-directive patterns, anchored at line start.
static REFERENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^source ").unwrap(),
        Regex::new(r"^\. ").unwrap(),
    ]
});

/// Ordered capture patterns: the `source` form is tried before the `.` form.
static EXTRACT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^ *source +(.*)").unwrap(),
        Regex::new(r"^ *\. *(.+)").unwrap(),
    ]
});

/// `${VAR}/` prefixes that cannot be expanded statically.
static VARIABLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{.*\}/").unwrap());

/// The Shell extractor variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExtractor;

impl ReferenceExtractor for ShellExtractor {
    fn language(&self) -> Language {
        Language::Shell
    }

    fn filter_inactive(&self, lines: Vec<SourceLine>) -> Vec<SourceLine> {
        strip_line_comments(lines, &LINE_COMMENT)
    }

    fn is_reference_line(&self, filtered_text: &str) -> Result<bool> {
        Ok(matches_any(filtered_text, &REFERENCE_PATTERNS))
    }

    fn extract_reference_path(&self, file: &Path, line: &SourceLine) -> Result<String> {
        let captured =
            capture_first(&line.filtered_text, &EXTRACT_PATTERNS).ok_or_else(|| {
                CycleScanError::CannotExtract {
                    file: file.to_path_buf(),
                    line_no: line.line_no,
                    text: line.filtered_text.clone(),
                }
            })?;

        let without_variables = VARIABLE_PREFIX.replace_all(&captured, "").replace('"', "");
        Ok(without_variables)
    }
}
