//! Reactive state shared by the page components.
//!
//! Every page provides an `AppState` (config, calendar, error banner). Pages
//! that edit rows also provide a `RowsState` built from their schema, so
//! the calendar and countdown pages carry no rows at all.

use chrono::NaiveDate;
use dioxus::prelude::*;
use telles_forms::calendar::Calendar;
use telles_forms::config::PageConfig;
use telles_forms::{PageSchema, RowSet};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Read once from the mount element's `data-config`
    pub config: Signal<PageConfig>,
    pub calendar: Signal<Calendar>,
    /// Banner text; `None` hides the banner
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new(config: PageConfig, today: NaiveDate) -> Self {
        Self {
            config: Signal::new(config),
            calendar: Signal::new(Calendar::new(today)),
            error_msg: Signal::new(None),
        }
    }

    /// Log and display an error without interrupting the page.
    pub fn report(&mut self, message: impl std::fmt::Display) {
        log::warn!("{message}");
        self.error_msg.set(Some(message.to_string()));
    }
}

/// Form rows of a signup or reset page, anchor first.
#[derive(Clone, Copy)]
pub struct RowsState {
    pub rows: Signal<RowSet>,
}

impl RowsState {
    pub fn new(schema: PageSchema) -> Self {
        Self {
            rows: Signal::new(RowSet::new(schema)),
        }
    }
}
