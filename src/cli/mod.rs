//! Command-line interface for cyclescan.
//!
//! This module handles argument parsing only. NO traversal logic is
//! performed here.

use clap::Parser;

/// Cyclescan: reference-cycle detector for include/import/source graphs.
#[derive(Parser, Debug)]
#[command(name = "cyclescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source filename to start the search on.
    pub file: std::path::PathBuf,

    /// Additional include path to look up relative source filenames.
    /// Can be used multiple times to add more than one path.
    #[arg(
        short = 'i',
        long = "include-path",
        value_name = "INCLUDE_PATH",
        action = clap::ArgAction::Append,
        default_value = "."
    )]
    pub include_paths: Vec<std::path::PathBuf>,

    /// Maximum search depth before giving up. The default is already
    /// insanely high.
    #[arg(
        short = 's',
        long = "max-depth",
        value_name = "SEARCH_DEPTH",
        default_value_t = 500,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_depth: u64,

    /// Print the report as a JSON object instead of a human-readable format.
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Language of the start file (auto-detect from extension or shebang
    /// by default).
    #[arg(long, value_name = "LANG")]
    pub language: Option<Language>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Programming language, as selectable on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Language {
    /// C (.c, .h)
    C,
    /// C++ (.cpp, .hpp)
    Cpp,
    /// Shell (.sh)
    Shell,
    /// Python (.py)
    Python,
    /// Ruby (.rb)
    Ruby,
}

impl Language {
    /// Convert to the core detection Language.
    pub fn to_detect_language(self) -> crate::detect::Language {
        match self {
            Language::C => crate::detect::Language::C,
            Language::Cpp => crate::detect::Language::Cpp,
            Language::Shell => crate::detect::Language::Shell,
            Language::Python => crate::detect::Language::Python,
            Language::Ruby => crate::detect::Language::Ruby,
        }
    }
}

/// Parse command-line arguments.
///
/// This function is the entry point for CLI argument parsing.
/// It returns the parsed Cli struct or exits on error.
pub fn parse_args() -> Cli {
    Cli::parse()
}
