//! Buttons under the row table.

use crate::browser::{self, SessionStore};
use crate::state::{AppState, RowsState};
use dioxus::prelude::*;

fn save_rows(state: &AppState, rows: &RowsState) -> anyhow::Result<()> {
    let key = state.config.read().snapshot_key.clone();
    let mut store = SessionStore::open()?;
    rows.rows.read().save_snapshot(&mut store, &key)
}

fn restore_rows(state: &AppState, rows: &mut RowsState) -> anyhow::Result<bool> {
    let key = state.config.read().snapshot_key.clone();
    let store = SessionStore::open()?;
    rows.rows.write().restore_snapshot(&store, &key)
}

/// Add-row button, plus save/restore when snapshots are enabled.
#[component]
pub fn RowControls() -> Element {
    let mut state = use_context::<AppState>();
    let mut rows = use_context::<RowsState>();
    let snapshot_controls = state.config.read().snapshot_controls;

    rsx! {
        div {
            class: "row-controls",
            style: "margin: 8px 0; display: flex; gap: 8px;",
            button {
                r#type: "button",
                id: "add-row-btn",
                onclick: move |_| {
                    rows.rows.write().add_row();
                },
                "行を追加"
            }
            if snapshot_controls {
                button {
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(e) = save_rows(&state, &rows) {
                            state.report(format!("一時保存できませんでした: {e:#}"));
                        }
                    },
                    "一時保存"
                }
                button {
                    r#type: "button",
                    onclick: move |_| match restore_rows(&state, &mut rows) {
                        Ok(true) => state.error_msg.set(None),
                        Ok(false) => log::info!("no saved rows to restore"),
                        Err(e) => state.report(format!("復元できませんでした: {e:#}")),
                    },
                    "復元"
                }
            }
        }
    }
}

/// Submit button that stops the form while a required value is missing.
#[component]
pub fn SubmitButton(label: String) -> Element {
    let mut state = use_context::<AppState>();
    let rows = use_context::<RowsState>();

    rsx! {
        button {
            r#type: "submit",
            class: "submit-btn",
            onclick: move |evt: Event<MouseData>| {
                let checked = rows.rows.read().validate_required();
                match checked {
                    Ok(()) => {
                        let entries = rows.rows.read().form_entries();
                        log::info!("submitting {} field values", entries.len());
                    }
                    Err(e) => {
                        evt.prevent_default();
                        browser::alert(&e.to_string());
                        state.report(e);
                    }
                }
            },
            "{label}"
        }
    }
}
