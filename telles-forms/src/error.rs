//! Error type shared by the form controllers.

use crate::row::RowId;
use crate::schema::FieldName;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The anchor row carries the shared values and cannot be removed.
    AnchorRemoval,
    UnknownRow(RowId),
    /// Synchronized fields on non-anchor rows only follow the anchor.
    FieldLocked(FieldName),
    UnknownField(String),
    DuplicateField(FieldName),
    EmptySchema,
    InvalidDay { year: i32, month: u32, day: u32 },
    NoDateSelected,
    MissingRedirectUrl,
    MissingRequired { row: usize, field: FieldName },
    Snapshot(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::AnchorRemoval => write!(f, "the first row cannot be removed"),
            FormError::UnknownRow(id) => write!(f, "no row with id {}", id.0),
            FormError::FieldLocked(field) => {
                write!(f, "{} is copied from the first row", field.form_name())
            }
            FormError::UnknownField(name) => write!(f, "unknown field: {name}"),
            FormError::DuplicateField(field) => {
                write!(f, "field listed twice in schema: {}", field.form_name())
            }
            FormError::EmptySchema => write!(f, "schema has no fields"),
            FormError::InvalidDay { year, month, day } => {
                write!(f, "invalid date: {year}/{month}/{day}")
            }
            FormError::NoDateSelected => write!(f, "日付を選択してください。"),
            FormError::MissingRedirectUrl => write!(f, "loginUrl が設定されていません"),
            FormError::MissingRequired { row, field } => {
                write!(f, "row {} is missing {}", row + 1, field.form_name())
            }
            FormError::Snapshot(msg) => write!(f, "snapshot error: {msg}"),
        }
    }
}

impl std::error::Error for FormError {}
