//! Checkout dialog collecting delivery details.

use dioxus::prelude::*;

use super::error_alert::ErrorAlert;
use super::form_inputs::{TextAreaInput, TextInput};
use crate::app::cart_context::use_cart;
use crate::app::use_config;
use crate::order::{CheckoutForm, OrderConfirmation};

/// Modal checkout form. A valid submission empties the cart, resets the
/// form and reports the confirmation; an invalid one shows why and leaves
/// the cart alone.
#[component]
pub fn CheckoutDialog(
    /// Whether the dialog is shown
    open: bool,
    /// Called when the dialog is dismissed without ordering
    on_close: EventHandler<()>,
    /// Called after the order is placed
    on_placed: EventHandler<OrderConfirmation>,
) -> Element {
    let cart = use_cart();
    let config = use_config();

    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    if !open {
        return rsx! {};
    }

    let total_label = cart.view().total_label;

    let place_order = move |_: MouseEvent| {
        let form = CheckoutForm {
            name: name(),
            phone: phone(),
            address: address(),
            notes: notes(),
        };
        match cart.place_order(&form, &config) {
            Ok(confirmation) => {
                error.set(None);
                name.set(String::new());
                phone.set(String::new());
                address.set(String::new());
                notes.set(String::new());
                on_placed.call(confirmation);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            id: "checkoutModal",
            class: "modal d-block",
            tabindex: "-1",
            role: "dialog",
            div { class: "modal-dialog modal-dialog-centered",
                div { class: "modal-content",
                    div { class: "modal-header",
                        h5 { class: "modal-title", "Checkout" }
                        button {
                            class: "btn-close",
                            "aria-label": "Close",
                            onclick: move |_| on_close.call(()),
                        }
                    }
                    div { class: "modal-body",
                        if let Some(message) = error() {
                            ErrorAlert {
                                message: message,
                                on_dismiss: move |_| error.set(None),
                            }
                        }
                        form { id: "checkout-form",
                            onsubmit: move |e| e.prevent_default(),
                            TextInput {
                                label: "Full Name",
                                id: "checkout-name",
                                value: name(),
                                on_input: move |v| name.set(v),
                            }
                            TextInput {
                                label: "Phone Number",
                                id: "checkout-phone",
                                input_type: "tel",
                                value: phone(),
                                on_input: move |v| phone.set(v),
                            }
                            TextInput {
                                label: "Delivery Address",
                                id: "checkout-address",
                                value: address(),
                                on_input: move |v| address.set(v),
                            }
                            TextAreaInput {
                                label: "Special Instructions",
                                id: "checkout-notes",
                                value: notes(),
                                on_input: move |v| notes.set(v),
                            }
                        }
                        p { class: "fw-bold mb-0", "Order total: {total_label}" }
                    }
                    div { class: "modal-footer",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            id: "place-order",
                            class: "btn btn-danger",
                            onclick: place_order,
                            "Place Order"
                        }
                    }
                }
            }
        }
        div { class: "modal-backdrop fade show" }
    }
}
