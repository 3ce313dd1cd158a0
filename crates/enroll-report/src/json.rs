use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use enroll_model::RunReport;

/// Write the run report as JSON for machine consumption.
pub fn write_json_report(path: &Path, report: &RunReport) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("write json report: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)
        .with_context(|| format!("serialize json report: {}", path.display()))?;
    Ok(())
}
