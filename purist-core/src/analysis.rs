//! Analysis orchestration - ties together parsing, traversal, and reporting

use crate::parser;
use crate::report::FindingReport;
use crate::visitor;
use anyhow::{Context, Result};
use std::path::Path;
use swc_common::{sync::Lrc, SourceMap};

/// Analyze a single JavaScript file
pub fn analyze_file(path: &Path, source_map: &Lrc<SourceMap>) -> Result<Vec<FindingReport>> {
    // Read file
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let file = path.to_string_lossy();
    analyze_str(&src, &file, source_map)
}

/// Analyze in-memory JavaScript source
pub fn analyze_str(
    src: &str,
    filename: &str,
    source_map: &Lrc<SourceMap>,
) -> Result<Vec<FindingReport>> {
    // Parse source
    let module = parser::parse_javascript(src, source_map, filename)?;

    // Walk the tree once; findings arrive in traversal order
    let findings = visitor::analyze_module(&module);

    Ok(findings
        .iter()
        .map(|finding| FindingReport::new(finding, filename, source_map))
        .collect())
}
