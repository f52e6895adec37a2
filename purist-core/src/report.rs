//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Findings keep traversal order; rendering never re-sorts
//! - Byte-for-byte identical output across runs

use crate::findings::Finding;
use serde::{Deserialize, Serialize};
use swc_common::SourceMap;

/// One finding resolved to a source location, ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct FindingReport {
    pub file: String,
    pub rule: String,
    pub line: u32,
    pub col: u32,
}

impl FindingReport {
    /// Resolve a finding's span against the source map
    pub fn new(finding: &Finding, file: &str, source_map: &SourceMap) -> Self {
        let loc = source_map.lookup_char_pos(finding.span.lo);
        FindingReport {
            file: file.to_string(),
            rule: finding.kind.as_str().to_string(),
            line: loc.line as u32,
            col: loc.col_display as u32,
        }
    }
}

/// Render reports as text output
pub fn render_text(reports: &[FindingReport]) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "{:<28} {:<28} {:<6} {}\n",
        "RULE", "FILE", "LINE", "COL"
    ));

    for report in reports {
        output.push_str(&format!(
            "{:<28} {:<28} {:<6} {}\n",
            report.rule,
            truncate_or_pad(&report.file, 28),
            report.line,
            report.col,
        ));
    }

    output
}

/// Render reports as JSON output
pub fn render_json(reports: &[FindingReport]) -> String {
    // Use serde_json with sorted keys for deterministic output
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}

/// Truncate or pad string to fixed width
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.len() > width {
        format!("{}...", &s[..width.saturating_sub(3)])
    } else {
        format!("{:<width$}", s, width = width)
    }
}
