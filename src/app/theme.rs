//! Theme management with localStorage persistence.
//!
//! Provides a theme context for the light/dark toggle.

use dioxus::prelude::*;

use crate::config::WidgetConfig;
use crate::theme::{PlatformThemeStore, Theme, ThemeStore};

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<Theme>,
    store: Signal<PlatformThemeStore>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> Theme {
        (self.current)()
    }

    /// Set and persist theme
    pub fn set(&self, theme: Theme) {
        let mut current = self.current;
        current.set(theme);

        let mut store = self.store;
        store.write().set(theme);

        apply_theme_to_dom(theme);
    }

    /// Switch between light and dark
    pub fn toggle(&self) {
        self.set(self.get().toggled());
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() {
    let config = use_context::<WidgetConfig>();
    let current = use_signal(|| config.default_theme);
    let store = use_signal(|| new_store(&config));

    let ctx = ThemeContext { current, store };
    use_context_provider(|| ctx);

    // Client-side only: load saved preference and apply
    #[cfg(target_arch = "wasm32")]
    {
        let mut current = current;
        let fallback = config.default_theme;
        use_effect(move || {
            let saved = store.peek().load().unwrap_or(fallback);
            current.set(saved);
            apply_theme_to_dom(saved);
        });
    }
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[cfg(target_arch = "wasm32")]
fn new_store(config: &WidgetConfig) -> PlatformThemeStore {
    PlatformThemeStore::new(config.theme_storage_key.clone())
}

#[cfg(not(target_arch = "wasm32"))]
fn new_store(_config: &WidgetConfig) -> PlatformThemeStore {
    PlatformThemeStore::new()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_to_dom(_theme: Theme) {}
