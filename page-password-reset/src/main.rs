//! Bulk Password Reset
//!
//! One row per student whose password is reset. Rows share nothing; each
//! is filled in by hand and can be deleted except the first.

use dioxus::prelude::*;
use telles_forms::PageSchema;
use telles_ui::browser;
use telles_ui::components::{ErrorBanner, PageHeader, RowControls, RowTable, SubmitButton};
use telles_ui::state::{AppState, RowsState};

const ROOT_ID: &str = "password-reset-root";

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
    use_context_provider(|| RowsState::new(PageSchema::password_reset()));

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            PageHeader {}
            ErrorBanner {}
            h2 { "パスワード再設定" }
            RowTable {}
            RowControls {}
            SubmitButton { label: "再設定".to_string() }
        }
    }
}
