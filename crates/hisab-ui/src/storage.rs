//! `localStorage`-backed preference store

use hisab_core::{PreferenceStore, Result};
use web_sys::{Storage, Window};

/// Preference store over the window's `localStorage`.
///
/// Storage may be disabled (privacy modes, sandboxed frames); every access
/// re-resolves it and reports unavailability as a storage error.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> std::result::Result<Storage, String> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err("localStorage is not available".to_string()),
            Err(err) => Err(format!("{err:?}")),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()
            .and_then(|storage| storage.get_item(key).map_err(|err| format!("{err:?}")))
            .map_err(|reason| hisab_core::Error::storage_read_failed(key, reason))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()
            .and_then(|storage| {
                storage
                    .set_item(key, value)
                    .map_err(|err| format!("{err:?}"))
            })
            .map_err(|reason| hisab_core::Error::storage_write_failed(key, reason))
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() -> std::result::Result<(), hisab_core::Error> {
        let Some(window) = web_sys::window() else {
            return Ok(());
        };
        let store = LocalStorage::new(window);

        store.set("hisab-ui-test", "dark")?;
        assert_eq!(store.get("hisab-ui-test")?, Some("dark".to_string()));
        Ok(())
    }
}
