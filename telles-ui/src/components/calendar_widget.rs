//! Month calendar for picking the attendance date.

use crate::browser;
use crate::state::AppState;
use dioxus::prelude::*;

const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Month grid with previous/next navigation and a confirm button that
/// redirects to the attendance form with the picked date.
#[component]
pub fn CalendarWidget() -> Element {
    let mut state = use_context::<AppState>();
    let calendar = state.calendar.read().clone();
    let month_label = calendar.view().label();
    let selected_label = calendar.selected_label();
    // 0 marks a padding cell before the 1st or after the last day
    let weeks: Vec<Vec<(u32, bool, bool)>> = calendar
        .view()
        .weeks()
        .iter()
        .map(|week| {
            week.iter()
                .map(|slot| match slot {
                    Some(day) => (*day, calendar.is_today(*day), calendar.is_selected(*day)),
                    None => (0, false, false),
                })
                .collect()
        })
        .collect();

    let on_confirm = move |_: Event<MouseData>| {
        let form_path = state.config.read().attendance_form_path.clone();
        let target = state.calendar.read().confirm(&form_path);
        match target {
            Ok(url) => browser::navigate(&url),
            Err(e) => browser::alert(&e.to_string()),
        }
    };

    rsx! {
        div {
            class: "calendar",
            div {
                class: "calendar-header",
                style: "display: flex; justify-content: space-between; align-items: center;",
                button {
                    id: "prevMonth",
                    r#type: "button",
                    onclick: move |_| state.calendar.write().show_previous_month(),
                    "‹"
                }
                span { id: "currentMonth", "{month_label}" }
                button {
                    id: "nextMonth",
                    r#type: "button",
                    onclick: move |_| state.calendar.write().show_next_month(),
                    "›"
                }
            }
            table {
                class: "calendar-table",
                thead {
                    tr {
                        for name in WEEKDAYS {
                            th { "{name}" }
                        }
                    }
                }
                tbody {
                    id: "calendar-body",
                    for (w, week) in weeks.into_iter().enumerate() {
                        tr {
                            key: "{w}",
                            for (day, today, selected) in week {
                                if day == 0 {
                                    td {}
                                } else {
                                    DayCell { day: day, today: today, selected: selected }
                                }
                            }
                        }
                    }
                }
            }
            p {
                class: "selected-date-row",
                "選択日: "
                span { id: "selected-date", "{selected_label}" }
            }
            button {
                id: "confirm-btn",
                r#type: "button",
                onclick: on_confirm,
                "確定"
            }
        }
    }
}

#[component]
fn DayCell(day: u32, today: bool, selected: bool) -> Element {
    let mut state = use_context::<AppState>();

    let mut classes = Vec::new();
    if today {
        classes.push("today");
    }
    if selected {
        classes.push("selected");
    }
    let class = classes.join(" ");

    rsx! {
        td {
            class: "{class}",
            style: "cursor: pointer; text-align: center;",
            onclick: move |_| {
                let result = state.calendar.write().select_day(day);
                if let Err(e) = result {
                    state.report(e);
                }
            },
            "{day}"
        }
    }
}
