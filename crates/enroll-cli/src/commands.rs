use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;
use tracing::info;

use enroll_cli::pipeline::{OutputConfig, ReportFormat, RunOutcome, process_roster};
use enroll_model::{DATE_FIELDS, MANDATORY_FIELDS, OUTPUT_FIELDS, PHONE_FIELD};

use crate::cli::{ProcessArgs, ReportFormatArg};
use crate::summary::apply_table_style;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Rules"]);
    apply_table_style(&mut table);
    for field in OUTPUT_FIELDS {
        let mut rules = Vec::new();
        if MANDATORY_FIELDS.contains(&field) {
            rules.push("mandatory");
        }
        if field == PHONE_FIELD {
            rules.push("phone");
        }
        if DATE_FIELDS.contains(&field) {
            rules.push("date");
        }
        table.add_row(vec![field.as_str().to_string(), rules.join(", ")]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<RunOutcome> {
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.roster_file
            .parent()
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
            .join("output")
    });
    let config = OutputConfig {
        output_dir,
        report_format: match args.report_format {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Json => ReportFormat::Json,
            ReportFormatArg::Both => ReportFormat::Both,
        },
        dry_run: args.dry_run,
    };
    if args.dry_run {
        info!("dry run: no output files will be written");
    }
    process_roster(&args.roster_file, &config)
}
