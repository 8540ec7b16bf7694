//! Repeated form rows for bulk signup and password reset.
//!
//! The anchor row renders editable inputs for every field. Other rows show
//! synchronized fields as disabled text next to a hidden input, so the value
//! still submits, and get a delete button of their own.

use crate::state::{AppState, RowsState};
use dioxus::prelude::*;
use telles_forms::schema::InputKind;
use telles_forms::{FieldName, FieldSpec, PageVariant, Row, RowId, SyncPolicy};

#[component]
pub fn RowTable() -> Element {
    let rows = use_context::<RowsState>().rows.read().clone();
    let entries: Vec<(u64, Row)> = rows
        .rows()
        .iter()
        .map(|row| (row.id().0, row.clone()))
        .collect();
    let body_id = match rows.schema().variant() {
        PageVariant::StudentSignup => "signup-body",
        PageVariant::PasswordReset => "reset-body",
    };
    let body_style = format!(
        "max-height: 420px; overflow-y: {};",
        rows.scroll_mode().overflow_y()
    );

    rsx! {
        div {
            class: "signup-table",
            div {
                class: "signup-row signup-heading",
                for spec in rows.schema().fields() {
                    div { class: "signup-cell signup-wide", {spec.name.label()} }
                }
                div { class: "signup-cell signup-wide" }
            }
            div {
                id: "{body_id}",
                style: "{body_style}",
                for (index, (key, row)) in entries.into_iter().enumerate() {
                    RowView {
                        key: "{key}",
                        row: row,
                        anchor: index == 0,
                    }
                }
            }
        }
    }
}

#[component]
fn RowView(row: Row, anchor: bool) -> Element {
    let mut state = use_context::<AppState>();
    let mut rows = use_context::<RowsState>();
    let fields = rows.rows.read().schema().fields().to_vec();
    let id = row.id();

    rsx! {
        div {
            class: "signup-row",
            for spec in fields {
                div {
                    class: "signup-cell signup-wide",
                    FieldCell {
                        row_id: id,
                        value: row.get(spec.name).to_string(),
                        locked: !anchor && spec.policy == SyncPolicy::Synchronized,
                        spec: spec.clone(),
                    }
                }
            }
            div {
                class: "signup-cell signup-wide",
                if !anchor {
                    button {
                        r#type: "button",
                        class: "remove-row",
                        onclick: move |_| {
                            let result = rows.rows.write().remove_row(id);
                            if let Err(e) = result {
                                state.report(e);
                            }
                        },
                        "削除"
                    }
                }
            }
        }
    }
}

fn options_for(state: &AppState, field: FieldName) -> Vec<String> {
    let config = state.config.read();
    match field {
        FieldName::Department => config.department_options.clone(),
        FieldName::CourseYears => config.course_years_options.clone(),
        _ => Vec::new(),
    }
}

#[component]
fn FieldCell(row_id: RowId, spec: FieldSpec, value: String, locked: bool) -> Element {
    let mut state = use_context::<AppState>();
    let mut rows = use_context::<RowsState>();
    let field = spec.name;
    let name = field.form_name();

    if locked {
        let shown = field.display_value(&value);
        return rsx! {
            input { r#type: "text", value: "{shown}", disabled: true }
            input { r#type: "hidden", name: "{name}", value: "{value}" }
        };
    }

    let mut update = move |new_value: String| {
        let result = rows.rows.write().set_value(row_id, field, &new_value);
        if let Err(e) = result {
            state.report(e);
        }
    };

    let options = options_for(&state, field);
    if spec.input == InputKind::Select && !options.is_empty() {
        return rsx! {
            select {
                name: "{name}",
                required: spec.required,
                onchange: move |evt: Event<FormData>| update(evt.value()),
                option { value: "", selected: value.is_empty(), "選択してください" }
                for opt in options {
                    option {
                        value: "{opt}",
                        selected: opt == value,
                        "{opt}"
                    }
                }
            }
        };
    }

    let input_type = match spec.input {
        InputKind::Password => "password",
        InputKind::Text | InputKind::Select => "text",
    };
    rsx! {
        input {
            r#type: input_type,
            name: "{name}",
            value: "{value}",
            placeholder: field.placeholder(),
            required: spec.required,
            oninput: move |evt: Event<FormData>| update(evt.value()),
        }
    }
}
