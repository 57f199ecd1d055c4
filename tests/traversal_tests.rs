//! Cycle detection traversal tests.
//!
//! Fixtures are real files in a tempdir; references are written with
//! absolute paths so the default identity resolution can open them
//! regardless of the process working directory.

use std::fs;
use std::path::{Path, PathBuf};

use cyclescan::config::Config;
use cyclescan::detect::Language;
use cyclescan::extract::extractor_for;
use cyclescan::{CycleDetector, CycleScanError, TraversalResult, TraversalStats, TraversalStatus};

/// Write a C file referencing the given absolute paths, in order.
fn write_c_file(dir: &Path, name: &str, includes: &[&PathBuf]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::new();
    for include in includes {
        content.push_str(&format!("#include \"{}\"\n", include.display()));
    }
    content.push_str("int value;\n");
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn scan(
    start: &Path,
    language: Language,
    max_depth: usize,
) -> cyclescan::Result<(TraversalResult, TraversalStats)> {
    let config = Config::new(
        start.to_path_buf(),
        vec![PathBuf::from(".")],
        language,
        max_depth,
    )?;
    let extractor = extractor_for(language);
    CycleDetector::new(extractor.as_ref(), &config).run()
}

#[test]
fn test_acyclic_chain_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let c = write_c_file(dir.path(), "c.c", &[]);
    let b = write_c_file(dir.path(), "b.c", &[&c]);
    let a = write_c_file(dir.path(), "a.c", &[&b]);

    let (result, stats) = scan(&a, Language::C, 500).unwrap();

    assert_eq!(result.status, TraversalStatus::Clean);
    assert!(result.backtrace.is_empty());
    assert_eq!(stats.files_checked, 3);
    assert_eq!(stats.max_depth_reached, 2);
}

#[test]
fn test_self_reference_is_a_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.c");
    fs::write(&a, format!("#include \"{}\"\n", a.display())).unwrap();

    let (result, stats) = scan(&a, Language::C, 500).unwrap();

    assert_eq!(result.status, TraversalStatus::CycleFound);
    // Detection frame appends, then the original call appends on unwind.
    assert_eq!(result.backtrace, vec![a.clone(), a]);
    assert_eq!(stats.files_checked, 2);
}

#[test]
fn test_two_node_cycle_backtrace_order() {
    let dir = tempfile::tempdir().unwrap();
    let a_path = dir.path().join("a.c");
    let b_path = dir.path().join("b.c");
    fs::write(&a_path, format!("#include \"{}\"\n", b_path.display())).unwrap();
    fs::write(&b_path, format!("#include \"{}\"\n", a_path.display())).unwrap();

    let (result, _) = scan(&a_path, Language::C, 500).unwrap();

    assert_eq!(result.status, TraversalStatus::CycleFound);
    // Bottom-up: repeat detected at A, then B unwinds, then the start file.
    assert_eq!(result.backtrace, vec![a_path.clone(), b_path, a_path]);
}

#[test]
fn test_chain_longer_than_max_depth_is_depth_exceeded() {
    let dir = tempfile::tempdir().unwrap();
    let e = write_c_file(dir.path(), "e.c", &[]);
    let d = write_c_file(dir.path(), "d.c", &[&e]);
    let c = write_c_file(dir.path(), "c.c", &[&d]);
    let b = write_c_file(dir.path(), "b.c", &[&c]);
    let a = write_c_file(dir.path(), "a.c", &[&b]);

    let (result, stats) = scan(&a, Language::C, 3).unwrap();

    assert_eq!(result.status, TraversalStatus::DepthExceeded);
    assert_eq!(result.backtrace, vec![e, d, c, b, a]);
    assert_eq!(stats.max_depth_reached, 4);
    assert_eq!(stats.files_checked, 5);
}

#[test]
fn test_diamond_graph_revisits_shared_node() {
    let dir = tempfile::tempdir().unwrap();
    let d = write_c_file(dir.path(), "d.c", &[]);
    let b = write_c_file(dir.path(), "b.c", &[&d]);
    let c = write_c_file(dir.path(), "c.c", &[&d]);
    let a = write_c_file(dir.path(), "a.c", &[&b, &c]);

    let (result, stats) = scan(&a, Language::C, 500).unwrap();

    assert_eq!(result.status, TraversalStatus::Clean);
    // D is checked once via B and once via C: path-sensitive, not memoized.
    assert_eq!(stats.files_checked, 5);
    assert_eq!(stats.max_depth_reached, 2);
}

#[test]
fn test_traversal_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let b = dir.path().join("b.c");
    let a = dir.path().join("a.c");
    fs::write(&a, format!("#include \"{}\"\n", b.display())).unwrap();
    fs::write(&b, format!("#include \"{}\"\n", a.display())).unwrap();

    let (first, first_stats) = scan(&a, Language::C, 500).unwrap();
    let (second, second_stats) = scan(&a, Language::C, 500).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_stats, second_stats);
}

#[test]
fn test_missing_file_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.c");
    let a = write_c_file(dir.path(), "a.c", &[&missing]);

    let err = scan(&a, Language::C, 500).unwrap_err();
    assert!(matches!(err, CycleScanError::Io { path, .. } if path == missing));
}

#[test]
fn test_unextractable_reference_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.c");
    // Matches the reference pattern but has no closing delimiter.
    fs::write(&a, "#include \"broken\n").unwrap();

    let err = scan(&a, Language::C, 500).unwrap_err();
    assert!(matches!(err, CycleScanError::CannotExtract { line_no: 0, .. }));
}

#[test]
fn test_cycle_short_circuits_before_later_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never-read.c");
    let a_path = dir.path().join("a.c");
    let b_path = dir.path().join("b.c");
    // A references B (which cycles back) before a file that does not exist.
    fs::write(
        &a_path,
        format!(
            "#include \"{}\"\n#include \"{}\"\n",
            b_path.display(),
            missing.display()
        ),
    )
    .unwrap();
    fs::write(&b_path, format!("#include \"{}\"\n", a_path.display())).unwrap();

    // The cycle is found first, so the missing sibling is never opened.
    let (result, _) = scan(&a_path, Language::C, 500).unwrap();
    assert_eq!(result.status, TraversalStatus::CycleFound);
}

#[test]
fn test_commented_out_include_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.c");
    fs::write(&a, format!("// #include \"{}\"\nint x;\n", a.display())).unwrap();

    let (result, stats) = scan(&a, Language::C, 500).unwrap();
    assert_eq!(result.status, TraversalStatus::Clean);
    assert_eq!(stats.files_checked, 1);
}

#[test]
fn test_include_inside_block_comment_is_still_followed() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.c");
    let b = dir.path().join("b.c");
    // Block comments are not recognized: the directive stays active.
    fs::write(
        &a,
        format!("/*\n#include \"{}\"\n*/\nint x;\n", b.display()),
    )
    .unwrap();
    fs::write(&b, format!("#include \"{}\"\n", a.display())).unwrap();

    let (result, _) = scan(&a, Language::C, 500).unwrap();
    assert_eq!(result.status, TraversalStatus::CycleFound);
}

#[test]
fn test_shell_source_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.sh");
    let b = dir.path().join("b.sh");
    fs::write(&a, format!("#!/bin/bash\nsource \"{}\"\n", b.display())).unwrap();
    fs::write(&b, format!("#!/bin/bash\n. {}\n", a.display())).unwrap();

    let (result, _) = scan(&a, Language::Shell, 500).unwrap();
    assert_eq!(result.status, TraversalStatus::CycleFound);
    assert_eq!(result.backtrace, vec![a.clone(), b, a]);
}

#[test]
fn test_max_depth_one_allows_one_hop() {
    let dir = tempfile::tempdir().unwrap();
    let b = write_c_file(dir.path(), "b.c", &[]);
    let a = write_c_file(dir.path(), "a.c", &[&b]);

    let (result, stats) = scan(&a, Language::C, 1).unwrap();
    assert_eq!(result.status, TraversalStatus::Clean);
    assert_eq!(stats.max_depth_reached, 1);
}
