//! Cart context shared by the menu, the cart panel and checkout.
//!
//! The ledger lives in one signal and the rendered `CartView` in another.
//! A signal-backed observer keeps the view in step with every ledger
//! mutation, so components only read the view and only write commands.

use dioxus::prelude::*;

use crate::cart::{CartCommand, CartEvent, CartObserver, CartView, Ledger, LineItem};
use crate::config::WidgetConfig;
use crate::order::{submit_order, CheckoutError, CheckoutForm, OrderConfirmation};

/// Renders ledger snapshots into a signal.
struct SignalRenderer {
    view: Signal<CartView>,
    currency: String,
}

impl CartObserver for SignalRenderer {
    fn on_cart_changed(&mut self, items: &[LineItem], event: &CartEvent) {
        tracing::trace!(event = event.event_type(), "re-rendering cart");
        self.view.set(CartView::build(items, &self.currency));
    }
}

/// Global cart state shared via context
#[derive(Clone, Copy)]
pub struct CartContext {
    ledger: Signal<Ledger>,
    view: Signal<CartView>,
}

impl CartContext {
    /// Current rendered cart (subscribes the caller to changes)
    pub fn view(&self) -> CartView {
        (self.view)()
    }

    /// Apply a command from a cart or menu control
    pub fn dispatch(&self, command: CartCommand) {
        let mut ledger = self.ledger;
        ledger.write().dispatch(command);
    }

    /// Validate the checkout form and place the order, emptying the cart
    pub fn place_order(
        &self,
        form: &CheckoutForm,
        config: &WidgetConfig,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let mut ledger = self.ledger;
        let mut ledger = ledger.write();
        submit_order(&mut ledger, form, config)
    }
}

/// Initialize cart context provider - call once at app root
pub fn use_cart_provider() {
    let config = use_context::<WidgetConfig>();

    let view = use_signal({
        let currency = config.currency_symbol.clone();
        move || CartView::build(&[], &currency)
    });

    let ledger = use_signal(move || {
        let mut ledger = Ledger::new();
        ledger.subscribe(SignalRenderer {
            view,
            currency: config.currency_symbol,
        });
        ledger
    });

    use_context_provider(|| CartContext { ledger, view });
}

/// Get cart context - use in any component
pub fn use_cart() -> CartContext {
    use_context::<CartContext>()
}
