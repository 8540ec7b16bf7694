//! Reusable Dioxus RSX components for Telles pages.

mod calendar_widget;
mod countdown_notice;
mod error_banner;
mod page_header;
mod row_controls;
mod row_table;

pub use calendar_widget::CalendarWidget;
pub use countdown_notice::CountdownNotice;
pub use error_banner::ErrorBanner;
pub use page_header::{LiveClock, LogoutLink, PageHeader};
pub use row_controls::{RowControls, SubmitButton};
pub use row_table::RowTable;
