use serde::{Deserialize, Serialize};

use crate::defect::Defect;
use crate::ids::RowId;

/// A malformed row as it appears in the run report: identity, cells
/// projected into output column order, and the defects it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedRecord {
    pub row: RowId,
    pub cells: Vec<Option<String>>,
    pub defects: Vec<Defect>,
}

/// Terminal result of one roster run, handed to the report writers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Accepted rows in input order, cells in output column order.
    pub accepted: Vec<Vec<Option<String>>>,
    /// Malformed rows in encounter order.
    pub malformed: Vec<MalformedRecord>,
    /// Total data rows processed.
    pub total_rows: usize,
}

impl RunReport {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.malformed.len()
    }
}
