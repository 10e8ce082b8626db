//! Render-ready projection of the ledger.
//!
//! Built from the snapshot an observer receives; the UI only ever reads this,
//! never the ledger itself.

use serde::Serialize;

use super::{LineItem, Totals};

/// Format an amount with two decimals, e.g. `$20.50`.
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{currency}{amount:.2}")
}

/// One row in the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// e.g. "$9.50 each"
    pub unit_price_label: String,
    /// e.g. "$19.00"
    pub line_total_label: String,
}

/// Everything the cart badge, panel and total need.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CartView {
    pub item_count: u64,
    pub lines: Vec<LineView>,
    pub total: f64,
    pub total_label: String,
}

impl CartView {
    pub fn build(items: &[LineItem], currency: &str) -> Self {
        let totals = Totals::of(items);
        let lines = items
            .iter()
            .map(|item| LineView {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price_label: format!("{} each", format_money(currency, item.unit_price)),
                line_total_label: format_money(currency, item.line_total()),
            })
            .collect();

        Self {
            item_count: totals.items,
            lines,
            total: totals.cost,
            total_label: format_money(currency, totals.cost),
        }
    }

    /// Empty carts show a placeholder message and hide the total.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, unit_price: f64, quantity: u32) -> LineItem {
        LineItem {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 20.5), "$20.50");
        assert_eq!(format_money("$", 0.0), "$0.00");
        assert_eq!(format_money("€", 3.0), "€3.00");
    }

    #[test]
    fn test_build_view() {
        let items = vec![item("p1", "Pizza", 9.5, 2), item("p2", "Soda", 1.5, 1)];
        let view = CartView::build(&items, "$");

        assert_eq!(view.item_count, 3);
        assert_eq!(view.total_label, "$20.50");
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].unit_price_label, "$9.50 each");
        assert_eq!(view.lines[0].line_total_label, "$19.00");
        assert_eq!(view.lines[1].quantity, 1);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::build(&[], "$");
        assert!(view.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total_label, "$0.00");
    }
}
