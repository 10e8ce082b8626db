//! Dioxus web application entry point.
//!
//! This module provides the root App component and the contexts every
//! component shares: widget config, theme and cart.

use dioxus::prelude::*;

pub mod cart_context;
pub mod components;
pub mod pages;
pub mod theme;
pub mod timer;

use crate::config::{load_config, WidgetConfig};
use cart_context::use_cart_provider;
use pages::MenuPage;
use theme::use_theme_provider;

/// Root app component
#[component]
pub fn App() -> Element {
    // Config first: the theme and cart providers read it
    use_context_provider(load_config);

    // Initialize theme context at app root (handles localStorage + data-theme)
    use_theme_provider();

    // Initialize cart context at app root (ledger + rendered view)
    use_cart_provider();

    rsx! {
        MenuPage {}
    }
}

/// Get widget config - use in any component
pub fn use_config() -> WidgetConfig {
    use_context::<WidgetConfig>()
}
