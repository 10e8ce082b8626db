//! Shared UI components for the ordering page.

pub mod cart_line;
pub mod cart_panel;
pub mod category_filter;
pub mod checkout_dialog;
pub mod error_alert;
pub mod form_inputs;
pub mod layout;
pub mod menu_card;
pub mod nav;
pub mod theme;

pub use cart_line::CartLine;
pub use cart_panel::CartPanel;
pub use category_filter::CategoryFilterBar;
pub use checkout_dialog::CheckoutDialog;
pub use error_alert::ErrorAlert;
pub use form_inputs::{TextAreaInput, TextInput};
pub use layout::Layout;
pub use menu_card::MenuCard;
pub use nav::Nav;
pub use theme::ThemeToggle;
