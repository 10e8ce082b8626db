//! Menu Cart - restaurant ordering widget
//!
//! This library provides:
//! - The cart ledger (add / remove / quantity / totals) behind an observer seam
//! - Menu catalog with category filtering
//! - Light/dark theme preference and its storage
//! - Checkout validation and order placement
//! - Dioxus web UI wiring it all together

pub mod app;
pub mod cart;
pub mod config;
pub mod menu;
pub mod order;
pub mod theme;
