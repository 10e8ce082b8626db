//! Side panel listing the cart contents and total.

use dioxus::prelude::*;

use super::cart_line::CartLine;
use crate::app::cart_context::use_cart;
use crate::cart::CartCommand;

/// Off-canvas cart panel. Renders only from the cart view.
#[component]
pub fn CartPanel(
    /// Whether the panel is shown
    open: bool,
    /// Called when the close button is clicked
    on_close: EventHandler<()>,
    /// Called when "Checkout" is clicked
    on_checkout: EventHandler<()>,
) -> Element {
    let cart = use_cart();
    let view = cart.view();

    let panel_class = if open {
        "offcanvas offcanvas-end show"
    } else {
        "offcanvas offcanvas-end"
    };

    rsx! {
        div {
            id: "cartOffcanvas",
            class: panel_class,
            tabindex: "-1",
            "aria-labelledby": "cartOffcanvasLabel",
            div { class: "offcanvas-header",
                h5 { class: "offcanvas-title", id: "cartOffcanvasLabel",
                    i { class: "bi bi-cart3" }
                    " Your Cart"
                }
                button {
                    class: "btn-close",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                }
            }
            div { class: "offcanvas-body d-flex flex-column",
                div { id: "cart-items", class: "flex-grow-1",
                    if view.is_empty() {
                        p { class: "text-muted text-center", "Your cart is empty" }
                    } else {
                        for line in view.lines.iter().cloned() {
                            CartLine {
                                key: "{line.id}",
                                line: line,
                                on_command: move |command: CartCommand| cart.dispatch(command),
                            }
                        }
                    }
                }
                if !view.is_empty() {
                    div { id: "cart-total", class: "border-top pt-3",
                        div { class: "d-flex justify-content-between mb-3",
                            h5 { "Total:" }
                            h5 { id: "total-price", class: "text-danger", "{view.total_label}" }
                        }
                        button {
                            class: "btn btn-danger w-100",
                            onclick: move |_| on_checkout.call(()),
                            "Checkout"
                        }
                    }
                }
            }
        }
        if open {
            div {
                class: "offcanvas-backdrop fade show",
                onclick: move |_| on_close.call(()),
            }
        }
    }
}
