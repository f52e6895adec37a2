//! Purist core library - JavaScript anti-pattern detection
//!
//! Parses a JavaScript source unit and performs a single traversal that flags
//! loops, impure functions, needless block bodies, and pass-through wrappers.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - One traversal per source unit; findings kept in traversal order
// - No global mutable state; scope/capture state is owned per run
// - No randomness, clocks, threads, or async
// - Identical input yields identical findings

pub mod analysis;
pub mod findings;
pub mod parser;
pub mod report;
pub mod scope;
pub mod visitor;

pub use findings::{Finding, RuleKind};
pub use report::{render_json, render_text, FindingReport};
pub use visitor::analyze_module;

use anyhow::{Context, Result};
use swc_common::{sync::Lrc, SourceMap};

/// Analyze a JavaScript file or directory tree.
///
/// Any error (unreadable file, parse failure) aborts the whole run with no
/// partial results.
pub fn analyze(path: &std::path::Path) -> Result<Vec<FindingReport>> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let cm: Lrc<SourceMap> = Default::default();
    let mut all_reports = Vec::new();

    // Collect JavaScript files
    let source_files = collect_source_files(path)?;

    // Analyze each file
    for file_path in source_files {
        let reports = analysis::analyze_file(&file_path, &cm)
            .with_context(|| format!("Failed to analyze file: {}", file_path.display()))?;
        all_reports.extend(reports);
    }

    Ok(all_reports)
}

/// Analyze JavaScript source text supplied directly instead of a file.
pub fn analyze_source(src: &str, filename: &str) -> Result<Vec<FindingReport>> {
    let cm: Lrc<SourceMap> = Default::default();
    analysis::analyze_str(src, filename, &cm)
}

/// Check if a file is a supported source file
fn is_supported_source_file(filename: &str) -> bool {
    // JavaScript files (.js, .mjs, .cjs)
    filename.ends_with(".js") || filename.ends_with(".mjs") || filename.ends_with(".cjs")
}

/// Collect all JavaScript files from a path (file or directory)
///
/// Supported extensions: .js, .mjs, .cjs
fn collect_source_files(path: &std::path::Path) -> Result<Vec<std::path::PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
            if is_supported_source_file(filename) {
                files.push(path.to_path_buf());
            }
        }
    } else if path.is_dir() {
        collect_source_files_recursive(path, &mut files)?;
    }

    // Sort files for deterministic order
    files.sort();

    Ok(files)
}

/// Recursively collect JavaScript files from a directory
fn collect_source_files_recursive(
    dir: &std::path::Path,
    files: &mut Vec<std::path::PathBuf>,
) -> Result<()> {
    use std::ffi::OsStr;

    for entry_result in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry: std::fs::DirEntry = entry_result?;
        let path = entry.path();

        if path.is_dir() {
            // Skip node_modules and other common non-source directories
            if let Some(name) = path.file_name().and_then(|n: &OsStr| n.to_str()) {
                if name == "node_modules" || name.starts_with('.') {
                    continue;
                }
            }
            collect_source_files_recursive(&path, files)?;
        } else if path.is_file() {
            if let Some(filename) = path.file_name().and_then(|n: &OsStr| n.to_str()) {
                if is_supported_source_file(filename) {
                    files.push(path);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn analyze_reports_file_and_location() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("loops.js");
        fs::write(&file, "while (true) {}\n").unwrap();

        let reports = analyze(&file).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].rule, "DontUseLoops");
        assert_eq!(reports[0].line, 1);
        assert_eq!(reports[0].col, 0);
        assert!(reports[0].file.ends_with("loops.js"));
    }

    #[test]
    fn analyze_directory_visits_files_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.js"), "while (x) {}\n").unwrap();
        fs::write(dir.path().join("a.js"), "do {} while (x);\n").unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules").join("dep.js"), "for (;;) {}\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "for (;;) {}\n").unwrap();

        let reports = analyze(dir.path()).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].file.ends_with("a.js"));
        assert!(reports[1].file.ends_with("b.js"));
    }

    #[test]
    fn analyze_missing_path_is_an_error() {
        let result = analyze(std::path::Path::new("/no/such/path.js"));
        assert!(result.is_err());
    }

    #[test]
    fn analyze_aborts_on_parse_error_with_no_partial_results() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "while (x) {}\n").unwrap();
        fs::write(dir.path().join("b.js"), "const = ;\n").unwrap();

        let result = analyze(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn analyze_source_accepts_in_memory_text() {
        let reports = analyze_source("for (;;) {}", "inline.js").unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].rule, "DontUseLoops");
        assert_eq!(reports[0].file, "inline.js");
    }

    #[test]
    fn analyze_source_with_no_matches_is_empty() {
        let reports = analyze_source("const x = 1;", "inline.js").unwrap();
        assert!(reports.is_empty());
    }
}
