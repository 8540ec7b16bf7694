//! "Moving to the login page in N seconds" notice.

use crate::browser;
use crate::state::AppState;
use dioxus::prelude::*;
use telles_forms::countdown::{Countdown, Tick, COUNTDOWN_TICK};

/// Counts down once per second, then leaves for the configured login URL.
/// Without a URL the expiry is only logged and the page stays put.
#[component]
pub fn CountdownNotice() -> Element {
    let state = use_context::<AppState>();
    let mut countdown = use_signal(|| {
        let config = state.config.read();
        Countdown::new(config.countdown_seconds, config.login_url.clone())
    });

    use_future(move || async move {
        loop {
            gloo_timers::future::sleep(COUNTDOWN_TICK).await;
            let tick = countdown.write().tick();
            match tick {
                Tick::Show(_) => {}
                Tick::Navigate(url) => {
                    browser::navigate(&url);
                    break;
                }
                Tick::Failed(_) | Tick::Stopped => break,
            }
        }
    });

    let remaining = countdown.read().remaining();
    rsx! {
        p {
            id: "countdown",
            span { id: "countdown-number", "{remaining}" }
            " 秒後にログイン画面へ移動します。"
        }
    }
}
