//! Cart ledger - the in-memory list of selected menu items
//!
//! The ledger owns every line item and is the only place they change.
//! Each mutating call notifies subscribed observers before it returns,
//! so whatever renders the cart never sees a stale snapshot.

mod events;
mod view;

pub use events::{CartCommand, CartEvent, CartObserver};
pub use view::{format_money, CartView, LineView};

use serde::{Deserialize, Serialize};

/// One distinct menu item in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    /// Price captured when the item was first added
    pub unit_price: f64,
    /// Always >= 1 while the item is in the ledger
    pub quantity: u32,
}

impl LineItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Aggregates derived from the current ledger contents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    /// Sum of all quantities
    pub items: u64,
    /// Sum of unit_price * quantity
    pub cost: f64,
}

impl Totals {
    pub fn of(items: &[LineItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            items: acc.items + u64::from(item.quantity),
            cost: acc.cost + item.line_total(),
        })
    }
}

/// Ordered collection of line items, at most one per id.
#[derive(Default)]
pub struct Ledger {
    items: Vec<LineItem>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Ledger {
    /// Create an empty ledger with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of an item.
    ///
    /// If the id is already present its quantity goes up by one and the
    /// passed name and price are ignored; the original price stands.
    pub fn add(&mut self, id: impl Into<String>, name: impl Into<String>, unit_price: f64) {
        let id = id.into();
        let quantity = match self.items.iter_mut().find(|item| item.id == id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                existing.quantity
            }
            None => {
                self.items.push(LineItem {
                    id: id.clone(),
                    name: name.into(),
                    unit_price,
                    quantity: 1,
                });
                1
            }
        };

        tracing::debug!(id = %id, quantity, "cart item added");
        self.notify(CartEvent::ItemAdded { id, quantity });
    }

    /// Remove an item entirely. Unknown ids are ignored, but observers are
    /// still notified.
    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == before {
            tracing::trace!(id = %id, "remove for item not in cart");
        } else {
            tracing::debug!(id = %id, "cart item removed");
        }
        self.notify(CartEvent::ItemRemoved { id: id.to_string() });
    }

    /// Adjust an item's quantity by `delta`.
    ///
    /// A result of zero or less removes the item. Unknown ids are a silent
    /// no-op and do not notify.
    pub fn change_quantity(&mut self, id: &str, delta: i32) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::trace!(id = %id, delta, "quantity change for item not in cart");
            return;
        };

        let next = i64::from(item.quantity) + i64::from(delta);
        if next <= 0 {
            self.remove(id);
            return;
        }

        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        let quantity = item.quantity;
        tracing::debug!(id = %id, quantity, "cart quantity changed");
        self.notify(CartEvent::QuantityChanged {
            id: id.to_string(),
            quantity,
        });
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.notify(CartEvent::Cleared);
    }

    /// Item count and cost, recomputed from the current items on every call.
    pub fn totals(&self) -> Totals {
        Totals::of(&self.items)
    }

    /// Apply a command emitted by a cart control.
    pub fn dispatch(&mut self, command: CartCommand) {
        tracing::trace!(item = ?command.item_id(), "dispatching cart command");
        match command {
            CartCommand::Add {
                id,
                name,
                unit_price,
            } => self.add(id, name, unit_price),
            CartCommand::Remove { id } => self.remove(&id),
            CartCommand::ChangeQuantity { id, delta } => self.change_quantity(&id, delta),
            CartCommand::Clear => self.clear(),
        }
    }

    fn notify(&mut self, event: CartEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_cart_changed(&self.items, &event);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every notification together with the totals it observed.
    #[derive(Clone, Default)]
    struct Recorder {
        seen: Rc<RefCell<Vec<(CartEvent, Totals)>>>,
    }

    impl CartObserver for Recorder {
        fn on_cart_changed(&mut self, items: &[LineItem], event: &CartEvent) {
            self.seen
                .borrow_mut()
                .push((event.clone(), Totals::of(items)));
        }
    }

    fn pizza_and_soda() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add("p1", "Pizza", 9.5);
        ledger.add("p1", "Pizza", 9.5);
        ledger.add("p2", "Soda", 1.5);
        ledger
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), Totals::default());
    }

    #[test]
    fn test_add_merges_same_id() {
        let ledger = pizza_and_soda();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.items()[0].id, "p1");
        assert_eq!(ledger.items()[0].quantity, 2);
        assert_eq!(ledger.items()[1].id, "p2");
        assert_eq!(ledger.items()[1].quantity, 1);

        let totals = ledger.totals();
        assert_eq!(totals.items, 3);
        assert!((totals.cost - 20.5).abs() < 1e-9);
    }

    #[test]
    fn test_readd_keeps_original_price_and_name() {
        let mut ledger = Ledger::new();
        ledger.add("p1", "Pizza", 9.5);
        ledger.add("p1", "Renamed", 99.0);

        let item = ledger.get("p1").unwrap();
        assert_eq!(item.name, "Pizza");
        assert_eq!(item.unit_price, 9.5);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_change_quantity_to_zero_removes() {
        let mut ledger = pizza_and_soda();
        ledger.change_quantity("p1", -2);

        assert!(ledger.get("p1").is_none());
        assert_eq!(ledger.len(), 1);
        let totals = ledger.totals();
        assert_eq!(totals.items, 1);
        assert!((totals.cost - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_change_quantity_below_zero_removes_not_clamps() {
        let mut ledger = pizza_and_soda();
        ledger.change_quantity("p2", -10);
        assert!(ledger.get("p2").is_none());
        assert!(ledger.items().iter().all(|item| item.quantity >= 1));
    }

    #[test]
    fn test_change_quantity_increments_in_place() {
        let mut ledger = pizza_and_soda();
        ledger.change_quantity("p2", 3);

        assert_eq!(ledger.items()[1].id, "p2");
        assert_eq!(ledger.items()[1].quantity, 4);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut ledger = pizza_and_soda();
        let before = ledger.totals();

        ledger.remove("unknown");
        ledger.change_quantity("unknown", -1);
        ledger.change_quantity("unknown", 5);

        assert_eq!(ledger.totals(), before);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut ledger = pizza_and_soda();
        let before: Vec<LineItem> = ledger.items().to_vec();

        ledger.add("p3", "Salad", 7.25);
        ledger.remove("p3");

        assert_eq!(ledger.items(), before.as_slice());
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut ledger = pizza_and_soda();
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals().items, 0);
        assert_eq!(ledger.totals().cost, 0.0);
    }

    #[test]
    fn test_quantity_saturates_instead_of_overflowing() {
        let mut ledger = Ledger::new();
        ledger.add("p1", "Pizza", 1.0);
        ledger.change_quantity("p1", i32::MAX);
        ledger.change_quantity("p1", i32::MAX);
        ledger.change_quantity("p1", i32::MAX);
        ledger.add("p1", "Pizza", 1.0);
        assert_eq!(ledger.get("p1").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_observer_sees_state_after_each_mutation() {
        let recorder = Recorder::default();
        let mut ledger = Ledger::new();
        ledger.subscribe(recorder.clone());

        ledger.add("p1", "Pizza", 9.5);
        ledger.add("p1", "Pizza", 9.5);
        ledger.change_quantity("p1", -1);
        ledger.remove("p1");
        ledger.clear();

        let seen = recorder.seen.borrow();
        let events: Vec<&CartEvent> = seen.iter().map(|(event, _)| event).collect();
        assert_eq!(
            events,
            vec![
                &CartEvent::ItemAdded {
                    id: "p1".into(),
                    quantity: 1
                },
                &CartEvent::ItemAdded {
                    id: "p1".into(),
                    quantity: 2
                },
                &CartEvent::QuantityChanged {
                    id: "p1".into(),
                    quantity: 1
                },
                &CartEvent::ItemRemoved { id: "p1".into() },
                &CartEvent::Cleared,
            ]
        );
        assert_eq!(seen[1].1.items, 2);
        assert_eq!(seen[3].1.items, 0);
    }

    #[test]
    fn test_quantity_drop_notifies_once_as_removal() {
        let recorder = Recorder::default();
        let mut ledger = Ledger::new();
        ledger.add("p1", "Pizza", 9.5);
        ledger.subscribe(recorder.clone());

        ledger.change_quantity("p1", -1);

        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, CartEvent::ItemRemoved { id: "p1".into() });
    }

    #[test]
    fn test_missing_item_quantity_change_does_not_notify() {
        let recorder = Recorder::default();
        let mut ledger = Ledger::new();
        ledger.subscribe(recorder.clone());

        ledger.change_quantity("ghost", 1);
        assert!(recorder.seen.borrow().is_empty());

        // remove always re-renders, even when nothing matched
        ledger.remove("ghost");
        assert_eq!(recorder.seen.borrow().len(), 1);
    }

    #[test]
    fn test_dispatch_routes_commands() {
        let mut ledger = Ledger::new();
        ledger.dispatch(CartCommand::Add {
            id: "p1".into(),
            name: "Pizza".into(),
            unit_price: 9.5,
        });
        ledger.dispatch(CartCommand::ChangeQuantity {
            id: "p1".into(),
            delta: 2,
        });
        assert_eq!(ledger.get("p1").unwrap().quantity, 3);

        ledger.dispatch(CartCommand::Remove { id: "p1".into() });
        assert!(ledger.is_empty());

        ledger.add("p2", "Soda", 1.5);
        ledger.dispatch(CartCommand::Clear);
        assert!(ledger.is_empty());
    }
}
