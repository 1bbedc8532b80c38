use dioxus::prelude::*;

/// The two-field comparison form. Validation lives with the caller; the
/// form only suppresses native submission, binds its inputs, and reflects
/// the in-flight state on its controls.
#[component]
pub fn ComparisonForm(
    mut item_a: Signal<String>,
    mut item_b: Signal<String>,
    submitting: Signal<bool>,
    on_submit: EventHandler<()>,
) -> Element {
    let busy = submitting();

    rsx! {
        form { class: "compare-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },

            div { class: "compare-form__field",
                label { r#for: "item-a", "Item A" }
                input {
                    id: "item-a",
                    name: "item_a",
                    r#type: "text",
                    placeholder: "e.g. tennis ball",
                    value: "{item_a}",
                    oninput: move |evt| item_a.set(evt.value()),
                }
            }

            div { class: "compare-form__field",
                label { r#for: "item-b", "Item B" }
                input {
                    id: "item-b",
                    name: "item_b",
                    r#type: "text",
                    placeholder: "e.g. swimming pool",
                    value: "{item_b}",
                    oninput: move |evt| item_b.set(evt.value()),
                }
            }

            div { class: "compare-form__actions",
                button {
                    r#type: "submit",
                    class: "compare-form__submit",
                    disabled: busy,
                    "How many fit?"
                }
                if busy {
                    span { class: "compare-form__loading", "Calculating…" }
                }
            }
        }
    }
}
