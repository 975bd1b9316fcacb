//! Application configuration.
//!
//! Compile-time constants live here, grouped by concern. The only runtime
//! settings (mount prefix, log level) are injected by the page that serves
//! the app and read once by [`RuntimeConfig::load`].

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::utils::dom;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "Where Is It?";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Name of the optional global object holding runtime settings:
/// `window.__WHEREISIT_CONFIG__ = { mountPrefix: "/api/hassio_ingress/..." }`.
pub const RUNTIME_CONFIG_GLOBAL: &str = "__WHEREISIT_CONFIG__";

/// `<meta>` tag consulted for the mount prefix when no global is set.
pub const MOUNT_PREFIX_META: &str = "whereisit-mount-prefix";

/// Log filter used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings supplied by the hosting page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Mount prefix (ingress path). `None` means served at the root.
    #[serde(default)]
    pub mount_prefix: Option<String>,
    /// `tracing` filter directive, e.g. `debug` or `whereisit_core=debug`.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Read settings from the page.
    ///
    /// The global object wins; the meta tag is a fallback for the prefix.
    /// A missing or malformed global yields defaults.
    pub fn load() -> Self {
        let mut config = dom::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok())
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| serde_wasm_bindgen::from_value::<RuntimeConfig>(v).ok())
            .unwrap_or_default();

        if config.mount_prefix.is_none() {
            config.mount_prefix = dom::meta_content(MOUNT_PREFIX_META);
        }
        config.normalized()
    }

    /// Blank values count as unset.
    fn normalized(mut self) -> Self {
        self.mount_prefix = self
            .mount_prefix
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self.log_level = self
            .log_level
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        self
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_config_from_json() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{"mountPrefix": "/api/hassio_ingress/abc", "logLevel": "debug"}"#,
        )
        .unwrap();
        assert_eq!(config.mount_prefix.as_deref(), Some("/api/hassio_ingress/abc"));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_runtime_config_defaults() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = RuntimeConfig {
            mount_prefix: Some("  ".to_string()),
            log_level: Some(String::new()),
        }
        .normalized();
        assert_eq!(config.mount_prefix, None);
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }
}
