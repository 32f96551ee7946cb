//! Error types for the browser shell
//!
//! This module provides error handling types that follow the project's
//! zero-unwrap and functional programming patterns.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while wiring or running page behaviors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Failed to get window object
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// Failed to get document object
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// Document has no body yet
    #[error("document has no body")]
    BodyNotAvailable,

    /// A required element is not on the page
    #[error("required element not found: {selector}")]
    ElementMissing { selector: String },

    /// Selector rejected by the DOM
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Failed to register an event listener
    #[error("failed to add '{event}' listener: {reason}")]
    ListenerFailed { event: String, reason: String },

    /// Failed to change an element's style or classes
    #[error("failed to update element: {0}")]
    DomUpdateFailed(String),

    /// Detail request could not be completed
    #[error("request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    /// Detail request answered with a non-success status
    #[error("request to {url} returned HTTP {status}")]
    BadStatus { url: String, status: u16 },

    /// Error from the target-independent core
    #[error(transparent)]
    Core(#[from] hisab_core::Error),
}

impl UiError {
    /// Create an element missing error.
    pub fn element_missing(selector: impl Into<String>) -> Self {
        Self::ElementMissing {
            selector: selector.into(),
        }
    }

    /// Create a listener registration error from a JS exception.
    pub fn listener_failed(event: impl Into<String>, err: &JsValue) -> Self {
        Self::ListenerFailed {
            event: event.into(),
            reason: format!("{err:?}"),
        }
    }

    /// Create a DOM update error from a JS exception.
    #[must_use]
    pub fn dom_update_failed(err: &JsValue) -> Self {
        Self::DomUpdateFailed(format!("{err:?}"))
    }
}

/// Result type alias for browser shell operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::element_missing("#back-to-top");
        assert_eq!(error.to_string(), "required element not found: #back-to-top");

        let error = UiError::BadStatus {
            url: "/transaction_details/9".to_string(),
            status: 404,
        };
        assert_eq!(
            error.to_string(),
            "request to /transaction_details/9 returned HTTP 404"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let error = UiError::from(hisab_core::Error::MissingTransactionId);
        assert_eq!(error.to_string(), "missing transaction id");
    }

    #[test]
    fn test_error_clone() {
        let error = UiError::WindowNotAvailable;
        assert_eq!(error.clone(), error);
    }
}
