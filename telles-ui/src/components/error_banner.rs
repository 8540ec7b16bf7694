//! Dismissible error banner.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows `AppState::error_msg` until the user closes it.
#[component]
pub fn ErrorBanner() -> Element {
    let mut state = use_context::<AppState>();
    let Some(message) = state.error_msg.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "error-banner",
            style: "display: flex; justify-content: space-between; gap: 8px; padding: 8px 12px; margin-bottom: 12px; color: #B00020; background: #FDECEA; border-left: 4px solid #B00020;",
            span { "{message}" }
            button {
                r#type: "button",
                style: "border: none; background: none; color: inherit; cursor: pointer;",
                onclick: move |_| state.error_msg.set(None),
                "×"
            }
        }
    }
}
