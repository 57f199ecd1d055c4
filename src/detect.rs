//! Language detection from file extensions and shebang lines.
//!
//! Table-driven extension mapping first; extensionless files fall back to
//! sniffing the first line of content. Unknown extensions are an error,
//! never a guess.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CycleScanError, Result};

/// Languages with a reference-extractor variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C (.c, .h)
    C,
    /// C++ (.cpp, .hpp)
    Cpp,
    /// Shell (.sh, or shebang-detected)
    Shell,
    /// Python (.py, or shebang-detected)
    Python,
    /// Ruby (.rb, or shebang-detected)
    Ruby,
}

impl Language {
    /// Convert language to string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Shell => "shell",
            Language::Python => "python",
            Language::Ruby => "ruby",
        }
    }
}

impl FromStr for Language {
    type Err = CycleScanError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "c" => Ok(Language::C),
            "cpp" => Ok(Language::Cpp),
            "shell" => Ok(Language::Shell),
            "python" => Ok(Language::Python),
            "ruby" => Ok(Language::Ruby),
            other => Err(CycleScanError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Detect the language of a file from its extension.
///
/// Extensionless files fall back to [`language_by_content`]. Unknown
/// extensions fail with [`CycleScanError::LanguageDetection`] — a file the
/// tool cannot classify must not be silently skipped.
pub fn detect_language(path: &Path) -> Result<Language> {
    let extension = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext,
        None => return language_by_content(path),
    };

    // Table-driven mapping (case-sensitive)
    let language = match extension {
        // TODO: .h can also belong to a C++ project
        "c" | "h" => Language::C,
        "cpp" | "hpp" => Language::Cpp,
        "sh" => Language::Shell,
        "py" => Language::Python,
        "rb" => Language::Ruby,
        other => {
            return Err(CycleScanError::LanguageDetection {
                path: path.to_path_buf(),
                message: format!("unknown file extension '.{}'", other),
            })
        }
    };

    Ok(language)
}

/// Detect the language of an extensionless file from its first line.
///
/// Recognizes shell shebangs and interpreter names. Only the first line is
/// consulted.
pub fn language_by_content(path: &Path) -> Result<Language> {
    let file = File::open(path).map_err(|source| CycleScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(|source| CycleScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    if first_line.contains("#!/bin/bash") || first_line.contains("#!/bin/sh") {
        return Ok(Language::Shell);
    }
    if first_line.contains("python") {
        return Ok(Language::Python);
    }
    if first_line.contains("ruby") {
        return Ok(Language::Ruby);
    }

    Err(CycleScanError::LanguageDetection {
        path: path.to_path_buf(),
        message: "no extension and no recognizable shebang line".to_string(),
    })
}
