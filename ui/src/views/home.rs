use std::rc::Rc;

use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use futures_util::StreamExt;

use api::client::ApiClient;
use api::models::ComparisonResult;

use crate::compare::{self, CompareEvent, ComparisonForm};
use crate::history::{HistoryList, HistoryState};
use crate::results::ResultsPanel;

/// The single page: comparison form, shared error banner, result views, and
/// the history panel. All remote work funnels through one coroutine, so a
/// submission is handled to completion before the next event is taken.
#[component]
pub fn Home() -> Element {
    let mut item_a = use_signal(String::new);
    let mut item_b = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut result = use_signal(|| Option::<ComparisonResult>::None);
    let mut error_banner = use_signal(|| Option::<String>::None);
    let mut history = use_signal(HistoryState::default);
    let mut results_section = use_signal(|| Option::<Rc<MountedData>>::None);

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<CompareEvent>| async move {
        let client = ApiClient::default();

        while let Some(event) = rx.next().await {
            match event {
                CompareEvent::Submit {
                    item_a: a,
                    item_b: b,
                } => {
                    submitting.set(true);
                    error_banner.set(None);
                    result.set(None);

                    let outcome = client.calculate(&a, &b).await;

                    // Terminal transition, success or failure: the control
                    // never stays disabled and the loading indicator never
                    // sticks.
                    submitting.set(false);

                    match outcome {
                        Ok(record) => {
                            result.set(Some(record));
                            refresh_history(&client, history).await;
                        }
                        Err(err) => {
                            error!("calculation failed: {err}");
                            error_banner.set(Some(compare::user_message(
                                &err,
                                compare::CALCULATION_FALLBACK_MESSAGE,
                            )));
                        }
                    }
                }
                CompareEvent::RefreshHistory => {
                    refresh_history(&client, history).await;
                }
                CompareEvent::OpenEntry { id } => match client.history_entry(id).await {
                    Ok(record) => {
                        error_banner.set(None);
                        item_a.set(record.item_a.clone().unwrap_or_default());
                        item_b.set(record.item_b.clone().unwrap_or_default());
                        result.set(Some(record));

                        if let Some(section) = results_section() {
                            let _ = section.scroll_to(ScrollBehavior::Smooth).await;
                        }
                    }
                    Err(err) => {
                        warn!("loading history entry {id} failed: {err}");
                        let fallback = format!("Failed to load details for {id}");
                        let message = compare::user_message(&err, &fallback);
                        error_banner.set(Some(format!("Could not load details: {message}")));
                    }
                },
            }
        }
    });

    // Initial page load: populate the history list once.
    use_effect(move || {
        coroutine.send(CompareEvent::RefreshHistory);
    });

    let on_submit = move |_| match compare::validate_inputs(&item_a(), &item_b()) {
        Ok((a, b)) => coroutine.send(CompareEvent::Submit {
            item_a: a,
            item_b: b,
        }),
        Err(message) => error_banner.set(Some(message.to_string())),
    };

    let banner = error_banner();
    let current = result();
    let showing_results = banner.is_none() && current.is_some();

    rsx! {
        section { class: "page page-compare",
            h1 { "How Many Fit?" }
            p { class: "page-compare__intro",
                "Name two items and see how many of the first fit inside one of the second."
            }

            ComparisonForm {
                item_a,
                item_b,
                submitting,
                on_submit,
            }

            if let Some(message) = banner {
                div { class: "compare-error", role: "alert", "{message}" }
            }

            // Kept mounted so a history click can always scroll to it.
            section {
                class: if showing_results { "results" } else { "results results--hidden" },
                onmounted: move |evt| results_section.set(Some(evt.data())),
                if let Some(outcome) = current {
                    ResultsPanel { result: outcome }
                }
            }

            HistoryList {
                history,
                on_select: move |id| coroutine.send(CompareEvent::OpenEntry { id }),
            }
        }
    }
}

async fn refresh_history(client: &ApiClient, mut history: Signal<HistoryState>) {
    match client.history().await {
        Ok(entries) => history.set(HistoryState::loaded(entries)),
        Err(err) => {
            warn!("history refresh failed: {err}");
            history.set(HistoryState::failed(compare::HISTORY_FAILURE_MESSAGE));
        }
    }
}
