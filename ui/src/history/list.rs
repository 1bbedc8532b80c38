use dioxus::prelude::*;

use super::{entry_label, HistoryState};

/// Clickable list of past comparisons. Selecting an entry asks the parent
/// to fetch and display its full record.
#[component]
pub fn HistoryList(history: Signal<HistoryState>, on_select: EventHandler<i64>) -> Element {
    let state = history();

    rsx! {
        section { class: "history-card",
            div { class: "history-card__header",
                h2 { "Past comparisons" }
                if !state.entries.is_empty() {
                    span { class: "history-card__meta", "{state.entries.len()} recorded" }
                }
            }

            ul { class: "history-list",
                if let Some(message) = state.error.as_ref() {
                    li { class: "history-list__placeholder", "{message}" }
                } else if state.entries.is_empty() {
                    li { class: "history-list__placeholder", "No past comparisons yet." }
                } else {
                    for entry in state.entries.iter() {
                        {
                            let id = entry.id;
                            let label = entry_label(entry);
                            rsx! {
                                li {
                                    key: "{id}",
                                    class: "history-list__item",
                                    title: "Click to view details for comparison #{id}",
                                    onclick: move |_| on_select.call(id),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
