//! Core form logic for the Telles attendance and signup pages.
//!
//! Nothing in this crate touches the DOM, so every rule can be exercised
//! with plain `cargo test`. The Dioxus layer in `telles-ui` owns the
//! browser side and calls into these types from event handlers.
//!
//! - `schema`: field names and their sharing policy per page variant
//! - `row_set`: the anchor-driven row controller
//! - `snapshot`: serialized row state and the storage trait it goes through
//! - `calendar`, `clock`, `countdown`, `redirect`: small page utilities
//! - `config`: page configuration read from the mount element

pub mod calendar;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod redirect;
pub mod row;
pub mod row_set;
pub mod schema;
pub mod snapshot;

pub use error::FormError;
pub use row::{Row, RowId};
pub use row_set::{RowSet, ScrollMode};
pub use schema::{FieldName, FieldSpec, PageSchema, PageVariant, SyncPolicy};
