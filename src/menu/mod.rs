//! Menu catalog and category filtering
//!
//! The menu is read-only display data. Filtering decides which entries are
//! shown and never touches the cart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog shipped with the widget
const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// Selector value that shows every category
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Menu catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A dish or drink that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
}

/// Which menu entries are visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` is the show-everything sentinel.
    pub fn parse(selector: &str) -> Self {
        if selector == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(selector.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The catalog embedded at build time. Malformed data yields an empty menu.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_CATALOG) {
            Ok(menu) => menu,
            Err(e) => {
                tracing::error!("Failed to load built-in menu: {}", e);
                Self::default()
            }
        }
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }

    /// Entries shown under `filter`, in catalog order.
    pub fn visible<'a>(&'a self, filter: &'a CategoryFilter) -> impl Iterator<Item = &'a MenuItem> {
        self.items.iter().filter(move |item| filter.matches(item))
    }
}
