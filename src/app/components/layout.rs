//! Layout component wrapping the page with stylesheets, nav and footer.

use dioxus::prelude::*;

use super::nav::Nav;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Called when the nav cart button is clicked
    pub on_open_cart: EventHandler<()>,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("MENU_CART_VERSION");
    let git_sha = env!("MENU_CART_GIT_SHA");
    let full_title = format!("{} - Menu Cart", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: BOOTSTRAP_ICONS_CSS }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/cart.css")
        }

        Nav {
            brand: props.title.clone(),
            on_open_cart: props.on_open_cart,
        }
        main { class: "container my-4",
            {props.children}
        }
        footer { class: "container text-center py-3",
            small { class: "text-muted", "Menu Cart v{version} ({git_sha})" }
        }
    }
}
