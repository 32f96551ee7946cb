//! Theme preference and its persistence boundary
//!
//! The preference is stored as `"dark"` or `"light"`. Storage is a trait so
//! the browser shell can back it with `localStorage` and tests with memory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::error::Error;
use crate::result::{OrFallback, Result};

/// Visual theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value persisted for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Theme to show at page load.
    ///
    /// Only a stored `"dark"` forces dark mode; anything else leaves the page
    /// as it was rendered.
    #[must_use]
    pub fn initial(stored: Option<&str>, rendered_dark: bool) -> Self {
        if stored == Some(Self::Dark.as_str()) || rendered_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client-side key-value storage for preferences.
pub trait PreferenceStore {
    /// Read a stored value.
    ///
    /// # Errors
    ///
    /// Returns `Error::StorageReadFailed` when storage is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns `Error::StorageWriteFailed` when storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Load the theme at page load. Unreadable storage counts as nothing stored.
pub fn load_theme(store: &dyn PreferenceStore, key: &str, rendered_dark: bool) -> Theme {
    let stored = store.get(key).or_fallback(None, "theme preference unreadable");
    Theme::initial(stored.as_deref(), rendered_dark)
}

/// Persist a theme choice.
///
/// # Errors
///
/// Propagates the store's write error.
pub fn persist_theme(store: &dyn PreferenceStore, key: &str, theme: Theme) -> Result<()> {
    store.set(key, theme.as_str())
}

/// In-memory store, optionally refusing every operation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails like disabled browser storage.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            values: RefCell::default(),
            unavailable: true,
        }
    }

    /// Seed a value.
    #[must_use]
    pub fn with(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.unavailable {
            return Err(Error::storage_read_failed(key, "storage disabled"));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(Error::storage_write_failed(key, "storage disabled"));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_initial_theme_from_storage() {
        assert_eq!(Theme::initial(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::initial(Some("light"), false), Theme::Light);
        assert_eq!(Theme::initial(None, false), Theme::Light);
        assert_eq!(Theme::initial(Some("DARK"), false), Theme::Light);
    }

    #[test]
    fn test_initial_theme_keeps_rendered_dark_page() {
        assert_eq!(Theme::initial(Some("light"), true), Theme::Dark);
        assert_eq!(Theme::initial(None, true), Theme::Dark);
    }

    #[test]
    fn test_load_and_persist_with_memory_store() -> Result<()> {
        let store = MemoryStore::new().with("theme", "dark");
        assert_eq!(load_theme(&store, "theme", false), Theme::Dark);

        persist_theme(&store, "theme", Theme::Light)?;
        assert_eq!(store.get("theme")?, Some("light".to_string()));
        Ok(())
    }

    #[test]
    fn test_unavailable_store_degrades_to_rendered_theme() {
        let store = MemoryStore::unavailable();
        assert_eq!(load_theme(&store, "theme", false), Theme::Light);
        assert!(matches!(
            persist_theme(&store, "theme", Theme::Dark),
            Err(Error::StorageWriteFailed { .. })
        ));
    }
}
