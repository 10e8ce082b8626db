//! Light/dark theme toggle button.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Button that flips between light and dark, labeled with the mode it switches to.
#[component]
pub fn ThemeToggle() -> Element {
    let theme_ctx = use_theme();
    let theme = theme_ctx.get();
    let icon = theme.toggle_icon();
    let label = theme.toggle_label();

    rsx! {
        button {
            id: "theme-toggle",
            class: "btn btn-outline-light btn-sm",
            onclick: move |_| theme_ctx.toggle(),
            i { class: "{icon}" }
            " "
            span { id: "theme-toggle-text", "{label}" }
        }
    }
}
