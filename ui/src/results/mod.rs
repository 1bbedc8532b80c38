mod chart;
pub use chart::RatioBarChart;

mod circles;
pub use circles::ProportionCircles;

use dioxus::prelude::*;

use api::models::ComparisonResult;

use crate::core::format;

/// The three synchronized views of one comparison: summary sentence,
/// horizontal bar chart, and proportional-circle illustration. Rendering is
/// declarative, so every call fully replaces the previous chart subtree.
#[component]
pub fn ResultsPanel(result: ComparisonResult) -> Element {
    let label_a = result.label_a().to_string();
    let label_b = result.label_b().to_string();
    let value = result.value();

    let summary = format::summary_sentence(value, &label_a, &label_b);
    let explanation = result
        .explanation
        .clone()
        .unwrap_or_else(|| "No explanation provided.".to_string());

    rsx! {
        div { class: "results-card",
            div { class: "results-card__header",
                h2 { "Result" }
            }

            p { class: "results-card__summary", "{summary}" }
            p { class: "results-card__explanation", "{explanation}" }

            div { class: "results-card__views",
                div { class: "results-card__chart",
                    h3 { "As a quantity" }
                    RatioBarChart {
                        label_a: label_a.clone(),
                        label_b: label_b.clone(),
                        value,
                    }
                }
                div { class: "results-card__circles",
                    h3 { "As relative area" }
                    ProportionCircles { label_a, label_b, value }
                }
            }
        }
    }
}
