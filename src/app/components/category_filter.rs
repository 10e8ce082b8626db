//! Category filter buttons for the menu.

use dioxus::prelude::*;

use crate::menu::CategoryFilter;

/// Capitalize a category slug for its button label
fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "All" plus one button per category. Exactly one button is active.
#[component]
pub fn CategoryFilterBar(
    /// Categories in display order
    categories: Vec<String>,
    /// Currently active filter
    active: CategoryFilter,
    /// Called with the newly selected filter
    on_select: EventHandler<CategoryFilter>,
) -> Element {
    let all_class = if active == CategoryFilter::All {
        "btn btn-danger filter-btn active"
    } else {
        "btn btn-outline-danger filter-btn"
    };

    rsx! {
        div { class: "d-flex flex-wrap justify-content-center gap-2 mb-4",
            button {
                class: all_class,
                "data-category": "all",
                onclick: move |_| on_select.call(CategoryFilter::All),
                "All"
            }
            for category in categories.into_iter() {
                {
                    let is_active = active.as_str() == category;
                    let class = if is_active {
                        "btn btn-danger filter-btn active"
                    } else {
                        "btn btn-outline-danger filter-btn"
                    };
                    let label = category_label(&category);
                    let selector = category.clone();
                    rsx! {
                        button {
                            key: "{category}",
                            class: class,
                            "data-category": "{category}",
                            onclick: move |_| on_select.call(CategoryFilter::parse(&selector)),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
