use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use enroll_model::{OUTPUT_FIELDS, RunReport};

/// Write the accepted rows as a delimited file with the fixed output
/// header order. Absent cells are written empty.
pub fn write_accepted_csv(path: &Path, report: &RunReport) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("write accepted: {}", path.display()))?;
    writer.write_record(OUTPUT_FIELDS.iter().map(|field| field.as_str()))?;
    for cells in &report.accepted {
        writer.write_record(cells.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush accepted: {}", path.display()))?;
    Ok(())
}
