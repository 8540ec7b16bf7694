//! Bulk Student Signup
//!
//! A teacher registers several students at once. The first row carries the
//! academic year, department, classroom and course length for the whole
//! batch; every added row shows those locked and inherits the first four
//! characters of the first row's ID, password and attendance number.
//!
//! The app mounts inside the server-rendered `<form>`, so the generated
//! `name[]` inputs submit with it.

use chrono::Datelike;
use dioxus::prelude::*;
use telles_forms::PageSchema;
use telles_ui::browser;
use telles_ui::components::{ErrorBanner, PageHeader, RowControls, RowTable, SubmitButton};
use telles_ui::state::{AppState, RowsState};

const ROOT_ID: &str = "student-signup-root";

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
    let mut rows = use_context_provider(|| RowsState::new(PageSchema::student_signup()));

    // Fill the current year into an empty first row once on mount
    use_effect(move || {
        let year = browser::now().year();
        if rows.rows.write().autofill_academic_year(year) {
            log::info!("academic year defaulted to {year}");
        }
    });

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            PageHeader {}
            ErrorBanner {}
            h2 { "生徒一括登録" }
            RowTable {}
            RowControls {}
            SubmitButton { label: "登録".to_string() }
        }
    }
}
