//! Run report writers: normalized accepted-records CSV, text report,
//! and JSON report.

pub mod accepted;
pub mod json;
pub mod text;

pub use accepted::write_accepted_csv;
pub use json::write_json_report;
pub use text::{render_text_report, write_text_report};
