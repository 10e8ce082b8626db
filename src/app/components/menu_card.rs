//! Menu item card with its "Add" button.

use dioxus::prelude::*;

use crate::app::cart_context::use_cart;
use crate::app::timer::sleep_ms;
use crate::app::use_config;
use crate::cart::{format_money, CartCommand};
use crate::menu::MenuItem;

/// One menu entry. Clicking "Add" puts one unit in the cart and briefly
/// shows "Added".
#[component]
pub fn MenuCard(item: MenuItem) -> Element {
    let cart = use_cart();
    let config = use_config();
    let mut just_added = use_signal(|| false);

    let price = format_money(&config.currency_symbol, item.price);
    let feedback_ms = config.added_feedback_ms;

    let add = {
        let item = item.clone();
        move |_: MouseEvent| {
            cart.dispatch(CartCommand::Add {
                id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.price,
            });
            just_added.set(true);
            spawn(async move {
                sleep_ms(feedback_ms).await;
                just_added.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "col-md-6 col-lg-4 menu-item",
            "data-category": "{item.category}",
            div { class: "card h-100 shadow-sm",
                div { class: "card-body d-flex flex-column",
                    h5 { class: "card-title", "{item.name}" }
                    p { class: "card-text text-muted flex-grow-1", "{item.description}" }
                    div { class: "d-flex justify-content-between align-items-center",
                        span { class: "fs-5 fw-bold text-danger", "{price}" }
                        button {
                            class: "btn btn-danger add-to-cart",
                            onclick: add,
                            if just_added() {
                                i { class: "bi bi-check-circle" }
                                " Added"
                            } else {
                                i { class: "bi bi-plus-circle" }
                                " Add"
                            }
                        }
                    }
                }
            }
        }
    }
}
