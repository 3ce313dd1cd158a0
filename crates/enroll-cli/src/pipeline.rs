//! Roster processing pipeline with explicit stages.
//!
//! 1. **Ingest**: read the roster file into a header and data rows
//! 2. **Resolve**: build the header index (fatal when mandatory
//!    columns are absent; nothing is written in that case)
//! 3. **Validate**: one pass over the rows in arrival order,
//!    normalizing fields and accumulating defects per row
//! 4. **Output**: write the accepted CSV and the run report(s)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use enroll_ingest::read_roster;
use enroll_model::{DefectLedger, HeaderIndex, MalformedRecord, RunReport};
use enroll_report::{write_accepted_csv, write_json_report, write_text_report};
use enroll_validate::validate_row;

/// Which run report files to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Both,
}

impl ReportFormat {
    fn wants_text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::Both)
    }

    fn wants_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

/// Output configuration for one run.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub report_format: ReportFormat,
    pub dry_run: bool,
}

/// Result of one roster run.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: RunReport,
    pub accepted_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub json_report_path: Option<PathBuf>,
}

/// Run the full pipeline over one roster file.
///
/// A missing mandatory column aborts before any row is validated and
/// before any output file or directory is created.
pub fn process_roster(input: &Path, config: &OutputConfig) -> Result<RunOutcome> {
    let span = info_span!("roster", file = %input.display());
    let _guard = span.enter();

    let table = read_roster(input)?;
    let index = HeaderIndex::resolve(&table.headers)
        .with_context(|| format!("resolve header: {}", input.display()))?;
    debug!(rows = table.rows.len(), "header resolved");

    let mut ledger = DefectLedger::new();
    let mut accepted = Vec::new();
    let mut malformed = Vec::new();
    let total_rows = table.rows.len();
    for mut row in table.rows {
        let defects = validate_row(&index, &mut row);
        // Every row gets a ledger entry, defects or not; the entry
        // is keyed by row identity, so duplicate-content rows stay
        // distinct.
        ledger.record(row.id).extend(defects);
        if ledger.is_clean(row.id) {
            accepted.push(row.to_output(&index));
        } else {
            malformed.push(MalformedRecord {
                row: row.id,
                cells: row.to_output(&index),
                defects: ledger.defects(row.id).unwrap_or(&[]).to_vec(),
            });
        }
    }
    let report = RunReport {
        accepted,
        malformed,
        total_rows,
    };
    info!(
        rows = ledger.len(),
        accepted = report.accepted_count(),
        rejected = ledger.malformed_count(),
        "roster validated"
    );

    if config.dry_run {
        return Ok(RunOutcome {
            report,
            accepted_path: None,
            report_path: None,
            json_report_path: None,
        });
    }

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("create output dir: {}", config.output_dir.display()))?;
    let accepted_path = config.output_dir.join("accepted.csv");
    write_accepted_csv(&accepted_path, &report)?;
    let report_path = if config.report_format.wants_text() {
        let path = config.output_dir.join("report.txt");
        write_text_report(&path, &report)?;
        Some(path)
    } else {
        None
    };
    let json_report_path = if config.report_format.wants_json() {
        let path = config.output_dir.join("report.json");
        write_json_report(&path, &report)?;
        Some(path)
    } else {
        None
    };

    Ok(RunOutcome {
        report,
        accepted_path: Some(accepted_path),
        report_path,
        json_report_path,
    })
}
