//! Ordered search-path lookup for referenced files.
//!
//! The default traversal resolves paths by identity; this lookup backs the
//! dormant system-include capability of the C-family extractors and any
//! future variant that resolves references against a directory list.

use std::path::{Path, PathBuf};

use crate::error::{CycleScanError, Result};

/// Find a relative path in an ordered list of directories.
///
/// The first directory containing the file wins. An empty list is an error,
/// not a no-op: a caller that configured no search paths has a broken
/// configuration and must hear about it.
pub fn find_in_search_paths(search_paths: &[PathBuf], relative_path: &Path) -> Result<PathBuf> {
    if search_paths.is_empty() {
        return Err(CycleScanError::EmptySearchPath);
    }

    for search_path in search_paths {
        let candidate = search_path.join(relative_path);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(CycleScanError::SearchPathExhausted {
        relative: relative_path.to_path_buf(),
    })
}
