use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::FieldName;
use crate::ids::RowId;

/// Reason text for a mandatory field that is absent or empty.
pub const REASON_MISSING: &str = "is missing";
/// Reason text for a phone number with fewer than 10 digits.
pub const REASON_PHONE_TOO_SHORT: &str = "is less than 10 digits";
/// Reason text for a date that does not fit any recognized shape.
pub const REASON_DATE_MALFORMED: &str = "is malformed.";

/// One recorded validation failure on a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defect {
    pub field: FieldName,
    pub reason: String,
}

impl Defect {
    pub fn new(field: FieldName, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Per-row defect accumulation, keyed by row identity.
///
/// Every processed row gets an entry, even when its defect list stays
/// empty; a row is malformed iff its entry is non-empty. `RowId`s are
/// sequential, so map order is encounter order.
#[derive(Debug, Default, Clone)]
pub struct DefectLedger {
    entries: BTreeMap<RowId, Vec<Defect>>,
}

impl DefectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create the defect list for a row.
    pub fn record(&mut self, id: RowId) -> &mut Vec<Defect> {
        self.entries.entry(id).or_default()
    }

    pub fn defects(&self, id: RowId) -> Option<&[Defect]> {
        self.entries.get(&id).map(Vec::as_slice)
    }

    /// True when the row was processed and accumulated no defects.
    pub fn is_clean(&self, id: RowId) -> bool {
        self.entries
            .get(&id)
            .is_some_and(|defects| defects.is_empty())
    }

    /// Number of rows processed (clean rows included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows carrying at least one defect.
    pub fn malformed_count(&self) -> usize {
        self.entries
            .values()
            .filter(|defects| !defects.is_empty())
            .count()
    }
}
