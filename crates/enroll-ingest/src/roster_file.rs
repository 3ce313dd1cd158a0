use std::path::Path;

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use tracing::debug;

use enroll_model::{RosterRow, RowId};

/// A roster file split into its header record and data rows.
#[derive(Debug, Clone)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub rows: Vec<RosterRow>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// An empty cell reads as absent, matching the source format's nil
/// semantics for unquoted empty fields.
fn read_cell(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Read a delimited roster file: first non-blank record is the
/// header, every following record becomes one `RosterRow`.
///
/// Rows are padded or truncated to the header width; fully blank
/// records are skipped. Row ids are assigned sequentially in
/// encounter order.
pub fn read_roster(path: &Path) -> Result<RosterTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read roster: {}", path.display()))?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut next_ordinal = 1u64;
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(header_row) => {
                let mut cells = Vec::with_capacity(header_row.len());
                for position in 0..header_row.len() {
                    cells.push(record.get(position).and_then(read_cell));
                }
                rows.push(RosterRow::new(RowId::new(next_ordinal), cells));
                next_ordinal += 1;
            }
        }
    }

    let headers = headers.ok_or_else(|| anyhow!("empty roster: {}", path.display()))?;
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read roster file"
    );
    Ok(RosterTable { headers, rows })
}
