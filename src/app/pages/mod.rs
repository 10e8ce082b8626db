//! Page components.

mod menu;

pub use menu::MenuPage;
