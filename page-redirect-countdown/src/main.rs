//! Signup / Reset Done
//!
//! Confirms the submission and returns to the login page after a few
//! seconds. The target comes from `login_url` in the page config; when it
//! is missing the expiry is logged to the console and the page stays.

use dioxus::prelude::*;
use telles_ui::browser;
use telles_ui::components::CountdownNotice;
use telles_ui::state::AppState;

const ROOT_ID: &str = "redirect-countdown-root";

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
            style: "max-width: 600px; margin: 40px auto; padding: 8px; text-align: center; font-family: system-ui, -apple-system, sans-serif;",
            h2 { "完了しました" }
            CountdownNotice {}
        }
    }
}
