//! Attendance Date Picker
//!
//! Shows the current month; the teacher picks a day and confirms, which
//! opens the attendance form for that date
//! (`/attendance_form/?date=2025%E5%B9%B47%E6%9C%8815%E6%97%A5`).

use dioxus::prelude::*;
use telles_ui::browser;
use telles_ui::components::{CalendarWidget, ErrorBanner, PageHeader};
use telles_ui::state::AppState;

const ROOT_ID: &str = "attendance-calendar-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        AppState::new(browser::read_page_config(ROOT_ID), browser::now().date())
    });

    rsx! {
        div {
            style: "max-width: 480px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            PageHeader {}
            ErrorBanner {}
            CalendarWidget {}
        }
    }
}
