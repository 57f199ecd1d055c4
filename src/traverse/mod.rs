//! Depth-first traversal of the reference graph with cycle detection.
//!
//! Cycle detection is path-sensitive, not global-visited-sensitive: only
//! the files on the current root-to-node path count as "seen". A diamond-
//! shaped (non-cyclic) graph is therefore explored once per path reaching
//! a shared node — an accepted cost. Global memoization would need to
//! distinguish "on current path" from "fully explored, acyclic", which
//! this design does not implement.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::extract::ReferenceExtractor;

/// Terminal outcome of a traversal.
///
/// `CycleFound` and `DepthExceeded` propagate identically (short-circuit,
/// backtrace) but stay distinct for reporting. Neither is an error: both
/// flow through the ordinary return channel so a complete report can be
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStatus {
    /// No cycle anywhere in the reference graph.
    Clean,
    /// A file on the current traversal path was referenced again.
    CycleFound,
    /// The configured maximum search depth was exceeded.
    DepthExceeded,
}

impl TraversalStatus {
    /// Status identifier used in report output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalStatus::Clean => "clean",
            TraversalStatus::CycleFound => "cycle_found",
            TraversalStatus::DepthExceeded => "depth_exceeded",
        }
    }
}

/// Terminal result of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    /// The outcome.
    pub status: TraversalStatus,

    /// Route from the point of detection back to the start file, built
    /// bottom-up as the stack unwinds. Empty iff `status` is `Clean`.
    pub backtrace: Vec<PathBuf>,
}

/// Statistics accumulated across the whole traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Number of file visits, counting re-visits on distinct paths.
    pub files_checked: usize,

    /// Deepest recursion depth reached (start file is depth 0).
    pub max_depth_reached: usize,
}

/// Depth-first cycle detector over one extractor and one configuration.
pub struct CycleDetector<'a> {
    extractor: &'a dyn ReferenceExtractor,
    config: &'a Config,
}

impl<'a> CycleDetector<'a> {
    /// Create a detector for one traversal.
    pub fn new(extractor: &'a dyn ReferenceExtractor, config: &'a Config) -> Self {
        CycleDetector { extractor, config }
    }

    /// Traverse the reference graph rooted at the configured start file.
    ///
    /// Extraction and filesystem errors abort the run; a detected cycle or
    /// depth overrun is an ordinary result.
    pub fn run(&self) -> Result<(TraversalResult, TraversalStats)> {
        let mut path = HashSet::new();
        let mut backtrace = Vec::new();
        let mut stats = TraversalStats::default();

        let status = self.follow(
            &self.config.start_file,
            &mut path,
            &mut backtrace,
            &mut stats,
            0,
        )?;

        Ok((TraversalResult { status, backtrace }, stats))
    }

    /// One traversal frame, evaluated in this exact order:
    /// stats update, cycle check, depth check, expand, recurse per child.
    ///
    /// `path` holds only the files on the active recursion stack: the
    /// current file is inserted before its children are explored and
    /// removed afterwards, so siblings never observe each other's subtrees.
    fn follow(
        &self,
        file: &Path,
        path: &mut HashSet<PathBuf>,
        backtrace: &mut Vec<PathBuf>,
        stats: &mut TraversalStats,
        depth: usize,
    ) -> Result<TraversalStatus> {
        stats.files_checked += 1;
        stats.max_depth_reached = stats.max_depth_reached.max(depth);
        log::debug!("checking {} at depth {}", file.display(), depth);

        if path.contains(file) {
            log::warn!("cycle found at {}", file.display());
            backtrace.push(file.to_path_buf());
            return Ok(TraversalStatus::CycleFound);
        }

        if depth > self.config.max_depth {
            log::warn!(
                "maximum search depth {} exceeded at {}",
                self.config.max_depth,
                file.display()
            );
            backtrace.push(file.to_path_buf());
            return Ok(TraversalStatus::DepthExceeded);
        }

        let references = self.extractor.get_references(file, self.config)?;

        path.insert(file.to_path_buf());
        for reference in &references {
            let status = self.follow(
                &reference.absolute_path,
                path,
                backtrace,
                stats,
                depth + 1,
            )?;
            if status != TraversalStatus::Clean {
                // Short-circuit: no further siblings once a failure is found.
                backtrace.push(file.to_path_buf());
                path.remove(file);
                return Ok(status);
            }
        }
        path.remove(file);

        Ok(TraversalStatus::Clean)
    }
}
