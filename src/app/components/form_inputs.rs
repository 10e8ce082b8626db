//! Reusable form input components.

use dioxus::prelude::*;

/// A labeled single-line input.
#[component]
pub fn TextInput(
    /// Input label
    label: &'static str,
    /// Element id, also used by the label
    id: &'static str,
    /// Current value
    value: String,
    /// HTML input type
    #[props(default = "text")]
    input_type: &'static str,
    /// Mark the field as required
    #[props(default = true)]
    required: bool,
    /// Called on every edit
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: id, "{label}" }
            input {
                class: "form-control",
                id: id,
                r#type: input_type,
                required: required,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// A labeled multi-line input.
#[component]
pub fn TextAreaInput(
    /// Input label
    label: &'static str,
    /// Element id, also used by the label
    id: &'static str,
    /// Current value
    value: String,
    /// Called on every edit
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: id, "{label}" }
            textarea {
                class: "form-control",
                id: id,
                rows: "2",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
