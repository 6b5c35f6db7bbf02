//! Row views for the user list
//!
//! `render` is a pure function of the record sequence: the front-end calls
//! it on every redraw and rows are keyed by record id, never by position.

use crate::store::{Record, RecordId};

/// Label of the per-row delete control
pub const DELETE_LABEL: &str = "Delete";

/// Rendered representation of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Key of the row, the record's id
    pub key: RecordId,
    /// "Name: <name>"
    pub name_line: String,
    /// "Age: <age>"
    pub age_line: String,
    /// "Favourite Colour: <colour>"
    pub colour_line: String,
    /// Delete control bound to `key`
    pub delete: DeleteControl,
}

/// Delete control of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteControl {
    /// Button caption
    pub label: &'static str,
    /// Record removed when the control is activated
    pub target: RecordId,
}

impl RowView {
    /// Build the row for a single record
    pub fn from_record(record: &Record) -> Self {
        Self {
            key: record.id.clone(),
            name_line: format!("Name: {}", record.name),
            age_line: format!("Age: {}", record.age),
            colour_line: format!("Favourite Colour: {}", record.favourite_colour),
            delete: DeleteControl {
                label: DELETE_LABEL,
                target: record.id.clone(),
            },
        }
    }

    /// Text lines of the row, top to bottom
    pub fn lines(&self) -> [&str; 3] {
        [self.name_line.as_str(), self.age_line.as_str(), self.colour_line.as_str()]
    }
}

/// One row per record, in store order
pub fn render(records: &[Record]) -> Vec<RowView> {
    records.iter().map(RowView::from_record).collect()
}
