//! Commands that drive the ledger and events it reports back.

use serde::{Deserialize, Serialize};

use super::LineItem;

/// Cart controls emit these instead of calling ledger methods directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", content = "params")]
pub enum CartCommand {
    /// Add one unit of a menu item
    Add {
        id: String,
        name: String,
        unit_price: f64,
    },

    /// Drop an item regardless of quantity
    Remove { id: String },

    /// Adjust quantity (positive = more, negative = fewer)
    ChangeQuantity { id: String, delta: i32 },

    /// Empty the cart
    Clear,
}

impl CartCommand {
    /// Id of the item this command targets, if any.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Self::Add { id, .. } | Self::Remove { id } | Self::ChangeQuantity { id, .. } => {
                Some(id.as_str())
            }
            Self::Clear => None,
        }
    }
}

/// What changed in the ledger. Delivered with every notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    ItemAdded { id: String, quantity: u32 },
    QuantityChanged { id: String, quantity: u32 },
    ItemRemoved { id: String },
    Cleared,
}

impl CartEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ItemAdded { .. } => "item_added",
            Self::QuantityChanged { .. } => "quantity_changed",
            Self::ItemRemoved { .. } => "item_removed",
            Self::Cleared => "cleared",
        }
    }
}

/// Receives the ledger contents after every mutation.
///
/// This is the rendering seam: implementations redraw the badge, line items
/// and total from `items`, which is always the post-mutation state.
pub trait CartObserver {
    fn on_cart_changed(&mut self, items: &[LineItem], event: &CartEvent);
}
