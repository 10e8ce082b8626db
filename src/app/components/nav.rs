//! Navigation bar with theme toggle and cart button.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::cart_context::use_cart;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// Restaurant name shown as the brand
    pub brand: String,
    /// Called when the cart button is clicked
    pub on_open_cart: EventHandler<()>,
}

/// Top navigation bar. The badge shows the total item count.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let cart = use_cart();
    let item_count = cart.view().item_count;

    rsx! {
        nav { class: "navbar navbar-dark bg-danger sticky-top",
            div { class: "container",
                span { class: "navbar-brand fw-bold",
                    i { class: "bi bi-shop" }
                    " {props.brand}"
                }
                div { class: "d-flex align-items-center gap-2",
                    ThemeToggle {}
                    button {
                        class: "btn btn-light position-relative",
                        onclick: move |_| props.on_open_cart.call(()),
                        i { class: "bi bi-cart3" }
                        " Cart "
                        span {
                            id: "cart-badge",
                            class: "badge rounded-pill bg-dark",
                            "{item_count}"
                        }
                    }
                }
            }
        }
    }
}
