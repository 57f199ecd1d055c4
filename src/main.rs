//! Cyclescan CLI binary
//!
//! This is the main entry point for the cyclescan command-line interface.
//! The CLI is a thin adapter over the library APIs - NO logic is implemented
//! here.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = cyclescan::cli::parse_args();

    // Initialize logger if verbose
    if cli.verbose {
        env_logger::init();
    }

    // A cycle or depth overrun is a normal, successful report; only the
    // errors in CycleScanError are hard failures.
    match run(cli) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Execute one scan.
///
/// This function is a thin adapter that:
/// 1. Determines the language of the start file
/// 2. Selects the matching reference extractor
/// 3. Runs the depth-first cycle detection
/// 4. Renders the report in the requested format
///
/// All logic is delegated to the library APIs.
fn run(cli: cyclescan::cli::Cli) -> cyclescan::Result<String> {
    use cyclescan::config::Config;
    use cyclescan::detect::detect_language;
    use cyclescan::extract::extractor_for;
    use cyclescan::report::Report;
    use cyclescan::CycleDetector;

    // Step 1: language, from the flag or by detection
    let language = match cli.language {
        Some(language) => language.to_detect_language(),
        None => detect_language(&cli.file)?,
    };

    // Step 2: extractor variant for the language
    let extractor = extractor_for(language);

    // Step 3: traversal configuration
    let config = Config::new(
        cli.file,
        cli.include_paths,
        language,
        cli.max_depth as usize,
    )?;

    // Step 4: run the traversal
    let detector = CycleDetector::new(extractor.as_ref(), &config);
    let (result, stats) = detector.run()?;

    // Step 5: render
    let report = Report {
        result,
        config,
        stats,
    };
    if cli.json {
        report.render_json()
    } else {
        Ok(report.render_human())
    }
}
