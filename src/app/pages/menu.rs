//! Menu page: filterable menu grid, cart panel and checkout.

use dioxus::prelude::*;

use crate::app::components::{CartPanel, CategoryFilterBar, CheckoutDialog, Layout, MenuCard};
use crate::menu::{CategoryFilter, Menu};
use crate::order::OrderConfirmation;

const RESTAURANT_NAME: &str = "Bella Cucina";

/// Menu page component.
#[component]
pub fn MenuPage() -> Element {
    let menu = use_hook(Menu::builtin);
    let mut filter = use_signal(CategoryFilter::default);
    let mut cart_open = use_signal(|| false);
    let mut checkout_open = use_signal(|| false);
    let mut confirmation = use_signal(|| None::<OrderConfirmation>);

    let categories = menu.categories();
    let active = filter();
    let visible: Vec<_> = menu.visible(&active).cloned().collect();
    let banner = confirmation().map(|placed| {
        (
            placed.message(),
            format!("Reference {}, {}", placed.reference, placed.total_label),
        )
    });

    rsx! {
        Layout {
            title: RESTAURANT_NAME.to_string(),
            on_open_cart: move |_| cart_open.set(true),

            if let Some((message, detail)) = banner {
                div { class: "alert alert-success d-flex align-items-center", role: "alert",
                    span { class: "flex-grow-1",
                        "{message} "
                        small { class: "text-muted", "{detail}" }
                    }
                    button {
                        class: "btn-close",
                        "aria-label": "Close",
                        onclick: move |_| confirmation.set(None),
                    }
                }
            }

            h2 { class: "text-center mb-3", "Our Menu" }
            CategoryFilterBar {
                categories: categories,
                active: active.clone(),
                on_select: move |selected| filter.set(selected),
            }
            div { class: "row g-4",
                for item in visible {
                    MenuCard { key: "{item.id}", item: item }
                }
            }
        }

        CartPanel {
            open: cart_open(),
            on_close: move |_| cart_open.set(false),
            on_checkout: move |_| checkout_open.set(true),
        }
        CheckoutDialog {
            open: checkout_open(),
            on_close: move |_| checkout_open.set(false),
            on_placed: move |placed| {
                confirmation.set(Some(placed));
                checkout_open.set(false);
                cart_open.set(false);
            },
        }
    }
}
