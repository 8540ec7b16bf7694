//! A single form row: one value per schema field.

use crate::schema::{FieldName, PageSchema};
use std::collections::BTreeMap;

/// Stable handle for a row, used as the render key and for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: RowId,
    values: BTreeMap<FieldName, String>,
}

impl Row {
    /// A blank row holding every field of the schema.
    pub fn blank(id: RowId, schema: &PageSchema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|spec| (spec.name, String::new()))
            .collect();
        Self { id, values }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// Value of a field, empty when the row has no such field.
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn has(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    /// Overwrite a field the row already has. Returns true if the value changed.
    pub fn set(&mut self, field: FieldName, value: &str) -> bool {
        match self.values.get_mut(&field) {
            Some(current) if current != value => {
                value.clone_into(current);
                true
            }
            _ => false,
        }
    }

    pub fn values(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// The first `n` UTF-16 code units of `value`.
///
/// Matches how the browser slices input values. A surrogate pair split at
/// the boundary decodes to U+FFFD.
pub fn utf16_prefix(value: &str, n: usize) -> String {
    let units: Vec<u16> = value.encode_utf16().take(n).collect();
    String::from_utf16_lossy(&units)
}
