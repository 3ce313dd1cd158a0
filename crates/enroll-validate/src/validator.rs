//! Per-row validation orchestration.

use tracing::trace;

use enroll_model::{
    DATE_FIELDS, Defect, HeaderIndex, MANDATORY_FIELDS, PHONE_FIELD, REASON_MISSING, RosterRow,
};

use crate::date::normalize_date;
use crate::phone::normalize_phone;

/// Validate and normalize one row in place, returning every defect it
/// accumulated.
///
/// Stages run in a fixed order: trim all cells, mandatory-field
/// presence check, phone normalization, then date normalization over
/// each date field. Trimming must precede the content checks; the
/// checks themselves are independent and all of their defects are
/// collected, not just the first.
pub fn validate_row(index: &HeaderIndex, row: &mut RosterRow) -> Vec<Defect> {
    row.trim_cells();
    let mut defects = Vec::new();

    for field in MANDATORY_FIELDS {
        if row.get(index, field).is_none() {
            defects.push(Defect::new(field, REASON_MISSING));
        }
    }

    // Normalizers skip absent cells and columns missing from the
    // header; the mandatory check above already covers those.
    if let Some(raw) = row.get(index, PHONE_FIELD).map(String::from) {
        let (value, reason) = normalize_phone(&raw);
        if let Some(reason) = reason {
            defects.push(Defect::new(PHONE_FIELD, reason));
        }
        row.set(index, PHONE_FIELD, value);
    }

    for field in DATE_FIELDS {
        if let Some(raw) = row.get(index, field).map(String::from) {
            let (value, reason) = normalize_date(&raw);
            if let Some(reason) = reason {
                defects.push(Defect::new(field, reason));
            }
            row.set(index, field, value);
        }
    }

    trace!(row = %row.id, defects = defects.len(), "validated row");
    defects
}
