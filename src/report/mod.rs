//! Report rendering for traversal results.
//!
//! Two renderings of the same record: a JSON object for tooling and a
//! multi-section human-readable report. The configuration is passed through
//! verbatim for audit display.

use std::fmt::Write;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::traverse::{TraversalResult, TraversalStats};

/// The complete record produced by one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Traversal outcome and backtrace.
    pub result: TraversalResult,

    /// The configuration the run was started with.
    pub config: Config,

    /// Traversal statistics.
    pub stats: TraversalStats,
}

impl Report {
    /// Render as a pretty-printed JSON object.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a human-readable multi-section report.
    pub fn render_human(&self) -> String {
        let mut out = String::new();

        section_header(&mut out, "result");
        key_value(&mut out, "Status", self.result.status.as_str());
        key_value(
            &mut out,
            "Backtrace",
            &format!("{:?}", self.result.backtrace),
        );

        section_header(&mut out, "global options");
        key_value(
            &mut out,
            "Start filename",
            &self.config.start_file.display().to_string(),
        );
        key_value(&mut out, "Language", self.config.language.as_str());
        key_value(
            &mut out,
            "Maximum search depth",
            &self.config.max_depth.to_string(),
        );
        key_value(
            &mut out,
            "Search path list",
            &format!("{:?}", self.config.search_paths),
        );

        section_header(&mut out, "statistics");
        key_value(
            &mut out,
            "Number of checked files",
            &self.stats.files_checked.to_string(),
        );
        key_value(
            &mut out,
            "Highest occurred search depth",
            &self.stats.max_depth_reached.to_string(),
        );

        out
    }
}

fn section_header(out: &mut String, name: &str) {
    // String's fmt::Write never fails.
    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", name.to_uppercase());
    let _ = writeln!(out, "{}", "-".repeat(72));
}

fn key_value(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "{:<30}{}", format!("{}:", key), value);
}
