//! Page-level configuration for the UI behaviors.
//!
//! Every field has a default matching the stock templates, so a page that
//! embeds no configuration behaves exactly like one that embeds `{}`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Minimum severity of diagnostics written to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Check whether a message at `level` passes this minimum.
    #[must_use]
    pub fn allows(self, level: Self) -> bool {
        level >= self
    }
}

/// Element ids and class selectors the page templates provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_toggle_id: String,
    pub nav_links: String,
    pub nav_active_class: String,
    pub back_to_top_id: String,
    pub toast: String,
    pub toast_close: String,
    pub dark_mode_toggle_id: String,
    pub dark_mode_class: String,
    pub modal_id: String,
    pub modal_body_id: String,
    pub close_modal: String,
    pub view_details: String,
    pub transaction_id_attribute: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle_id: "menu-toggle".to_string(),
            nav_links: ".nav-links".to_string(),
            nav_active_class: "active".to_string(),
            back_to_top_id: "back-to-top".to_string(),
            toast: ".toast".to_string(),
            toast_close: ".toast-close".to_string(),
            dark_mode_toggle_id: "toggleDarkMode".to_string(),
            dark_mode_class: "dark-mode".to_string(),
            modal_id: "transactionModal".to_string(),
            modal_body_id: "modalBody".to_string(),
            close_modal: ".close-modal".to_string(),
            view_details: ".view-details".to_string(),
            transaction_id_attribute: "data-tx-id".to_string(),
        }
    }
}

/// Configuration for the UI behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Scroll offset above which the back-to-top control is shown.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,

    /// Delay before a toast starts fading.
    #[serde(default = "default_toast_fade_delay")]
    pub toast_fade_delay_ms: u32,

    /// Delay between the fade starting and the toast being removed.
    #[serde(default = "default_toast_remove_delay")]
    pub toast_remove_delay_ms: u32,

    /// Storage key holding the theme preference.
    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,

    /// Path prefix of the transaction detail endpoint.
    #[serde(default = "default_details_endpoint")]
    pub details_endpoint: String,

    /// Path prefix under which receipt images are served.
    #[serde(default = "default_uploads_path")]
    pub uploads_path: String,

    /// Symbol prefixed to rendered amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default)]
    pub selectors: Selectors,
}

fn default_scroll_threshold() -> f64 {
    300.0
}

fn default_toast_fade_delay() -> u32 {
    4000
}

fn default_toast_remove_delay() -> u32 {
    500
}

fn default_theme_storage_key() -> String {
    "theme".to_string()
}

fn default_details_endpoint() -> String {
    "/transaction_details".to_string()
}

fn default_uploads_path() -> String {
    "/static/uploads".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: default_scroll_threshold(),
            toast_fade_delay_ms: default_toast_fade_delay(),
            toast_remove_delay_ms: default_toast_remove_delay(),
            theme_storage_key: default_theme_storage_key(),
            details_endpoint: default_details_endpoint(),
            uploads_path: default_uploads_path(),
            currency_symbol: default_currency_symbol(),
            log_level: LogLevel::default(),
            selectors: Selectors::default(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns `Error::JsonParseFailed` for malformed JSON and
    /// `Error::InvalidConfig` when validation fails.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(Error::invalid_config(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }

        if self.theme_storage_key.trim().is_empty() {
            return Err(Error::invalid_config("theme_storage_key cannot be empty"));
        }

        if self.details_endpoint.trim().is_empty() {
            return Err(Error::invalid_config("details_endpoint cannot be empty"));
        }

        if self.uploads_path.trim().is_empty() {
            return Err(Error::invalid_config("uploads_path cannot be empty"));
        }

        Ok(())
    }

    /// Toast fade and removal delays.
    #[must_use]
    pub fn toast_timing(&self) -> crate::toast::ToastTiming {
        crate::toast::ToastTiming {
            fade_delay: Duration::from_millis(u64::from(self.toast_fade_delay_ms)),
            remove_delay: Duration::from_millis(u64::from(self.toast_remove_delay_ms)),
        }
    }
}
