//! Header strip with the live clock and the logout link.

use crate::browser;
use crate::state::AppState;
use dioxus::prelude::*;
use telles_forms::clock::{format_clock, CLOCK_REFRESH_INTERVAL};

const LOGOUT_PROMPT: &str = "本当にログアウトしますか？";

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        div {
            class: "page-header",
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
            LiveClock {}
            LogoutLink {}
        }
    }
}

/// Current date and time, redrawn every minute.
#[component]
pub fn LiveClock() -> Element {
    let state = use_context::<AppState>();
    let style = state.config.read().clock_style;
    let mut now = use_signal(browser::now);

    use_future(move || async move {
        loop {
            gloo_timers::future::sleep(CLOCK_REFRESH_INTERVAL).await;
            now.set(browser::now());
        }
    });

    let text = format_clock(&now(), style);
    rsx! {
        span { id: "datetime", "{text}" }
    }
}

/// Logout link that asks first. Hidden when no logout URL is configured.
#[component]
pub fn LogoutLink() -> Element {
    let state = use_context::<AppState>();
    let Some(url) = state.config.read().logout_url.clone() else {
        return rsx! {};
    };

    rsx! {
        a {
            class: "logout-btn",
            href: "{url}",
            onclick: move |evt: Event<MouseData>| {
                if !browser::confirm(LOGOUT_PROMPT) {
                    evt.prevent_default();
                }
            },
            "ログアウト"
        }
    }
}
