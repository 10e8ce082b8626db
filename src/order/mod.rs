//! Order submission - checkout form validation and placing the order
//!
//! A valid form empties the cart. An invalid form is reported back and the
//! cart is left exactly as it was.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::cart::{format_money, Ledger};
use crate::config::WidgetConfig;

/// Digits with optional leading `+`, area code in parentheses, common separators
const PHONE_PATTERN: &str = r"^\+?[0-9(][0-9 ()-]{5,18}[0-9]$";

/// Unambiguous characters for order references (no 0/O or 1/I)
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const REFERENCE_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("Please enter a delivery address")]
    MissingAddress,
}

/// Delivery details entered in the checkout dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Optional instructions for the kitchen or driver
    pub notes: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.name.trim().is_empty() {
            return Err(CheckoutError::MissingName);
        }

        let phone = self.phone.trim();
        let phone_ok = Regex::new(PHONE_PATTERN)
            .map(|re| re.is_match(phone))
            .unwrap_or(false);
        if !phone_ok {
            return Err(CheckoutError::InvalidPhone(phone.to_string()));
        }

        if self.address.trim().is_empty() {
            return Err(CheckoutError::MissingAddress);
        }
        Ok(())
    }
}

/// Receipt for a placed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmation {
    /// e.g. `ORD-7KX2QM`
    pub reference: String,
    pub item_count: u64,
    pub total: f64,
    pub total_label: String,
    pub placed_at: DateTime<Utc>,
    pub estimated_arrival: DateTime<Utc>,
    pub delivery_minutes: u32,
}

impl OrderConfirmation {
    pub fn message(&self) -> String {
        format!(
            "Order placed successfully! Your food will arrive in {} minutes.",
            self.delivery_minutes
        )
    }
}

fn new_reference() -> String {
    let mut rng = rand::thread_rng();
    let code: String = (0..REFERENCE_LEN)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect();
    format!("ORD-{code}")
}

/// Validate the form and, if it passes, empty the cart.
///
/// Clearing goes through the ledger, so observers redraw the empty cart
/// before this returns.
pub fn submit_order(
    ledger: &mut Ledger,
    form: &CheckoutForm,
    config: &WidgetConfig,
) -> Result<OrderConfirmation, CheckoutError> {
    if let Err(e) = form.validate() {
        tracing::debug!("Checkout rejected: {}", e);
        return Err(e);
    }

    let totals = ledger.totals();
    let placed_at = Utc::now();
    let confirmation = OrderConfirmation {
        reference: new_reference(),
        item_count: totals.items,
        total: totals.cost,
        total_label: format_money(&config.currency_symbol, totals.cost),
        placed_at,
        estimated_arrival: placed_at
            + Duration::minutes(i64::from(config.delivery_estimate_minutes)),
        delivery_minutes: config.delivery_estimate_minutes,
    };

    ledger.clear();
    tracing::info!(
        reference = %confirmation.reference,
        items = confirmation.item_count,
        "Order placed"
    );
    Ok(confirmation)
}
