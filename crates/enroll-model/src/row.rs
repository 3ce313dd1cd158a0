use crate::fields::{FieldName, OUTPUT_FIELDS};
use crate::header::HeaderIndex;
use crate::ids::RowId;

/// One data row: an ordered sequence of optional cell values in file
/// column order.
///
/// Cells are overwritten in place by the normalization stages; the id
/// stays stable so defects remain associated with the row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterRow {
    pub id: RowId,
    pub cells: Vec<Option<String>>,
}

impl RosterRow {
    pub fn new(id: RowId, cells: Vec<Option<String>>) -> Self {
        Self { id, cells }
    }

    /// Value of a field, or `None` when the cell is absent or the
    /// column is not in the header.
    pub fn get(&self, index: &HeaderIndex, field: FieldName) -> Option<&str> {
        let position = index.position(field)?;
        self.cells.get(position)?.as_deref()
    }

    /// Overwrite a field's cell. A no-op when the column is not in
    /// the header.
    pub fn set(&mut self, index: &HeaderIndex, field: FieldName, value: String) {
        if let Some(position) = index.position(field)
            && let Some(cell) = self.cells.get_mut(position)
        {
            *cell = Some(value);
        }
    }

    /// Strip leading/trailing whitespace from every present cell.
    /// Cells that trim to empty become absent; absent cells stay
    /// absent.
    pub fn trim_cells(&mut self) {
        for cell in &mut self.cells {
            if let Some(value) = cell.take() {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    *cell = Some(trimmed.to_string());
                }
            }
        }
    }

    /// Project the row into the fixed output column order. Fields
    /// absent from the header project to `None`.
    pub fn to_output(&self, index: &HeaderIndex) -> Vec<Option<String>> {
        OUTPUT_FIELDS
            .iter()
            .map(|field| self.get(index, *field).map(String::from))
            .collect()
    }
}
