//! The fixed column vocabulary of an enrollment roster.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A known roster column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FirstName,
    LastName,
    Dob,
    MemberId,
    EffectiveDate,
    ExpiryDate,
    PhoneNumber,
}

impl FieldName {
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::LastName => "last_name",
            FieldName::Dob => "dob",
            FieldName::MemberId => "member_id",
            FieldName::EffectiveDate => "effective_date",
            FieldName::ExpiryDate => "expiry_date",
            FieldName::PhoneNumber => "phone_number",
        }
    }

    /// Match a header cell against the vocabulary, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.to_ascii_lowercase();
        OUTPUT_FIELDS
            .iter()
            .copied()
            .find(|field| field.as_str() == lowered)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Columns that must be present in the header and non-empty per row.
pub const MANDATORY_FIELDS: [FieldName; 6] = [
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::Dob,
    FieldName::MemberId,
    FieldName::EffectiveDate,
    FieldName::PhoneNumber,
];

/// Columns normalized as dates when present. `expiry_date` is
/// normalized but not mandatory.
pub const DATE_FIELDS: [FieldName; 3] = [
    FieldName::Dob,
    FieldName::EffectiveDate,
    FieldName::ExpiryDate,
];

/// The column normalized as a phone number.
pub const PHONE_FIELD: FieldName = FieldName::PhoneNumber;

/// Fixed column order for the accepted-records output file.
pub const OUTPUT_FIELDS: [FieldName; 7] = [
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::Dob,
    FieldName::MemberId,
    FieldName::EffectiveDate,
    FieldName::ExpiryDate,
    FieldName::PhoneNumber,
];
