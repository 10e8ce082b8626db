//! Theme preference in `window.localStorage`.

use super::{Theme, ThemeStore};

/// Reads and writes one localStorage key. Storage being unavailable
/// (private mode, disabled cookies) is treated as "nothing stored".
#[derive(Debug, Clone)]
pub struct LocalStorageThemeStore {
    key: String,
}

impl LocalStorageThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<Theme> {
        Self::storage()
            .and_then(|storage| storage.get_item(&self.key).ok().flatten())
            .map(|value| Theme::parse(&value))
    }

    fn set(&mut self, theme: Theme) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(&self.key, theme.as_str()).is_err() {
                tracing::warn!("Failed to persist theme preference");
            }
        }
    }
}
