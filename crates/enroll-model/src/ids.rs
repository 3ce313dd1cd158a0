use std::fmt;

/// A synthetic per-row identity token, assigned at read time.
///
/// Ledger keys are row identity, never row content: two rows with
/// identical cell values get distinct ids. The value is the 1-based
/// ordinal of the data row in encounter order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct RowId(u64);

impl RowId {
    pub fn new(ordinal: u64) -> Self {
        Self(ordinal)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
