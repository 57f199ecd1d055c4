//! Cyclescan: reference-cycle detector for include/import/source graphs.
//!
//! This library scans a start file and every file it references (via
//! `#include`, `source`, and similar directives), follows the reference
//! graph depth-first, and detects dependency loops before they break a
//! build or an interpreter run.

#![warn(missing_docs)]
// env_logger is used by src/main.rs (binary), not this library
#![expect(unused_crate_dependencies)]

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod report;
pub mod resolve;
pub mod traverse;

/// Re-export common error types for convenience.
pub use error::{CycleScanError, Result};

/// Re-export the traversal entry points for convenience.
pub use traverse::{CycleDetector, TraversalResult, TraversalStats, TraversalStatus};

/// Cyclescan version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
