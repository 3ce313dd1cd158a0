use std::collections::BTreeMap;

use crate::error::ModelError;
use crate::fields::{FieldName, MANDATORY_FIELDS};

/// Column positions resolved from the header record.
///
/// Built once per file and immutable afterwards. Construction fails
/// when any mandatory column is absent, naming every missing column.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    positions: BTreeMap<FieldName, usize>,
}

impl HeaderIndex {
    /// Resolve the header record into field positions.
    ///
    /// Header cells are trimmed, BOM-stripped, and matched
    /// case-insensitively; unknown columns are ignored. The first
    /// occurrence of a duplicated column wins.
    pub fn resolve(headers: &[String]) -> Result<Self, ModelError> {
        let mut positions = BTreeMap::new();
        for (position, raw) in headers.iter().enumerate() {
            let cleaned = raw.trim().trim_matches('\u{feff}');
            if let Some(field) = FieldName::parse(cleaned) {
                positions.entry(field).or_insert(position);
            }
        }
        let missing: Vec<String> = MANDATORY_FIELDS
            .iter()
            .filter(|field| !positions.contains_key(*field))
            .map(|field| field.as_str().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ModelError::MissingColumns(missing));
        }
        Ok(Self { positions })
    }

    pub fn position(&self, field: FieldName) -> Option<usize> {
        self.positions.get(&field).copied()
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.positions.contains_key(&field)
    }
}
