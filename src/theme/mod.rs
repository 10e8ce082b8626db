//! Light/dark theme preference and where it is kept.

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageThemeStore;

use serde::{Deserialize, Serialize};

/// Theme store used by the running app on this target
#[cfg(target_arch = "wasm32")]
pub type PlatformThemeStore = LocalStorageThemeStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformThemeStore = MemoryThemeStore;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button label; names the mode the button switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    /// Bootstrap icon for the toggle button
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "bi bi-moon-stars-fill",
            Theme::Dark => "bi bi-sun-fill",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persists the single theme preference.
pub trait ThemeStore {
    /// Stored preference, if one has been saved.
    fn load(&self) -> Option<Theme>;

    fn set(&mut self, theme: Theme);

    /// Stored theme, or light when nothing is stored.
    fn get(&self) -> Theme {
        self.load().unwrap_or_default()
    }
}

/// Keeps the preference for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw value, as if left by an earlier session.
    pub fn with_raw(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.value.as_deref().map(Theme::parse)
    }

    fn set(&mut self, theme: Theme) {
        self.value = Some(theme.as_str().to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_as_str() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("oled"), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert!(Theme::Dark.toggle_icon().contains("sun"));
    }

    #[test]
    fn test_memory_store_defaults_to_light() {
        let store = MemoryThemeStore::new();
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryThemeStore::new();
        store.set(Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn test_unrecognized_stored_value_reads_as_light() {
        let store = MemoryThemeStore::with_raw("sepia");
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
