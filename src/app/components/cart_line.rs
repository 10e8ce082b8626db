//! A single line in the cart panel with its quantity controls.

use dioxus::prelude::*;

use crate::cart::{CartCommand, LineView};

/// Decrement / quantity / increment / remove controls for one item.
/// Every control emits a command keyed by the item id.
#[component]
pub fn CartLine(line: LineView, on_command: EventHandler<CartCommand>) -> Element {
    let dec_id = line.id.clone();
    let inc_id = line.id.clone();
    let remove_id = line.id.clone();

    rsx! {
        div { class: "card mb-2",
            div { class: "card-body",
                h6 { class: "card-title", "{line.name}" }
                p { class: "card-text text-muted mb-2", "{line.unit_price_label}" }
                div { class: "d-flex justify-content-between align-items-center",
                    div { class: "btn-group", role: "group",
                        button {
                            class: "btn btn-sm btn-outline-danger",
                            "aria-label": "Decrease quantity",
                            onclick: move |_| on_command.call(CartCommand::ChangeQuantity {
                                id: dec_id.clone(),
                                delta: -1,
                            }),
                            i { class: "bi bi-dash" }
                        }
                        button { class: "btn btn-sm btn-outline-secondary", disabled: true,
                            "{line.quantity}"
                        }
                        button {
                            class: "btn btn-sm btn-outline-danger",
                            "aria-label": "Increase quantity",
                            onclick: move |_| on_command.call(CartCommand::ChangeQuantity {
                                id: inc_id.clone(),
                                delta: 1,
                            }),
                            i { class: "bi bi-plus" }
                        }
                    }
                    div {
                        strong { class: "text-danger", "{line.line_total_label}" }
                        button {
                            class: "btn btn-sm btn-link text-danger",
                            "aria-label": "Remove item",
                            onclick: move |_| on_command.call(CartCommand::Remove {
                                id: remove_id.clone(),
                            }),
                            i { class: "bi bi-trash" }
                        }
                    }
                }
            }
        }
    }
}
