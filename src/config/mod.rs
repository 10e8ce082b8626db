//! Configuration management
//!
//! Widget settings come from `widget.json`, embedded at build time. Every
//! field has a default, so the file only needs the values being changed.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::theme::Theme;

/// Settings shipped with the build
const EMBEDDED_CONFIG: &str = include_str!("../../widget.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetConfig {
    /// Prefix for every displayed amount
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// localStorage key holding the theme preference
    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,

    /// Theme used before anything is stored
    #[serde(default)]
    pub default_theme: Theme,

    /// How long an "Add" button shows its "Added" label
    #[serde(default = "default_added_feedback_ms")]
    pub added_feedback_ms: u32,

    /// Quoted delivery time after an order is placed
    #[serde(default = "default_delivery_estimate_minutes")]
    pub delivery_estimate_minutes: u32,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_theme_storage_key() -> String {
    "theme".to_string()
}

fn default_added_feedback_ms() -> u32 {
    1000
}

fn default_delivery_estimate_minutes() -> u32 {
    30
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            theme_storage_key: default_theme_storage_key(),
            default_theme: Theme::default(),
            added_feedback_ms: default_added_feedback_ms(),
            delivery_estimate_minutes: default_delivery_estimate_minutes(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse widget config")
    }
}

/// Load the embedded configuration, falling back to defaults if it is malformed.
pub fn load_config() -> WidgetConfig {
    match WidgetConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default widget config: {:#}", e);
            WidgetConfig::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.added_feedback_ms, 1000);
        assert_eq!(config.delivery_estimate_minutes, 30);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            WidgetConfig::from_json(r#"{"currency_symbol": "€", "default_theme": "dark"}"#)
                .unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn test_malformed_config_has_context() {
        let err = WidgetConfig::from_json("{ nope").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse widget config"));
    }

    #[test]
    fn test_embedded_config_loads() {
        let config = load_config();
        assert!(!config.theme_storage_key.is_empty());
    }
}
