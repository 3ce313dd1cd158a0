use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use enroll_model::RunReport;

/// Render the human-readable run report: one line per malformed row
/// in encounter order (cell values, then the defect list), followed
/// by the accepted and rejected counts.
pub fn render_text_report(report: &RunReport) -> String {
    let mut out = String::new();
    for record in &report.malformed {
        let cells: Vec<&str> = record
            .cells
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(""))
            .collect();
        let defects: Vec<String> = record
            .defects
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(out, "{} -- {}", cells.join(", "), defects.join("; "));
    }
    let _ = writeln!(out, "accepted: {}", report.accepted_count());
    let _ = writeln!(out, "rejected: {}", report.rejected_count());
    out
}

pub fn write_text_report(path: &Path, report: &RunReport) -> Result<()> {
    fs::write(path, render_text_report(report))
        .with_context(|| format!("write report: {}", path.display()))
}
