//! Thin wrappers over the browser APIs the pages need.
//!
//! Everything here degrades to a logged no-op when the API is missing, so a
//! page never panics because of its host environment.

use chrono::{Local, NaiveDateTime};
use telles_forms::config::PageConfig;
use telles_forms::snapshot::SnapshotStore;
use wasm_bindgen::JsValue;

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{context}: {err:?}")
}

/// Read `data-config` from the page's mount element.
pub fn read_page_config(root_id: &str) -> PageConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(root_id))
        .and_then(|el| el.get_attribute("data-config"));
    if raw.is_none() {
        log::debug!("#{root_id} has no data-config, using defaults");
    }
    PageConfig::from_attribute(raw.as_deref())
}

/// Local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("no window, cannot navigate to {url}");
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::error!("{}", js_error("navigation failed", e));
    }
}

/// Blocking message box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking yes/no prompt. Anything but an explicit yes counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `sessionStorage` as a snapshot store.
pub struct SessionStore {
    storage: web_sys::Storage,
}

impl SessionStore {
    pub fn open() -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let storage = window
            .session_storage()
            .map_err(|e| js_error("session storage unavailable", e))?
            .ok_or_else(|| anyhow::anyhow!("session storage disabled"))?;
        Ok(Self { storage })
    }
}

impl SnapshotStore for SessionStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| js_error("sessionStorage.getItem", e))
    }

    fn save(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error("sessionStorage.setItem", e))
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_error("sessionStorage.removeItem", e))
    }
}
