//! Dark mode toggle with persisted preference

use hisab_core::theme::load_theme;
use hisab_core::{PreferenceStore, Theme, UiConfig, UiEvent};
use web_sys::Document;

use super::Wiring;
use crate::dom;
use crate::error::Result;
use crate::page::Page;

/// Theme to start with.
///
/// The stored preference is only consulted on pages that offer the toggle;
/// elsewhere the page keeps the theme it was rendered with.
#[must_use]
pub fn initial_theme(
    document: &Document,
    store: &dyn PreferenceStore,
    config: &UiConfig,
    rendered_dark: bool,
) -> Theme {
    if dom::by_id(document, &config.selectors.dark_mode_toggle_id).is_some() {
        load_theme(store, &config.theme_storage_key, rendered_dark)
    } else {
        Theme::initial(None, rendered_dark)
    }
}

/// Flip and persist the theme on click of the dark mode control.
///
/// # Errors
///
/// Returns error if the click listener cannot be added.
pub fn wire(page: &Page) -> Result<Wiring> {
    let Some(toggle) = dom::by_id(page.document(), &page.config().selectors.dark_mode_toggle_id)
    else {
        return Ok(Wiring::Skipped);
    };

    let handler_page = page.clone();
    dom::listen(&toggle, "click", move |_| {
        handler_page.dispatch(UiEvent::ThemeToggled);
    })?;

    Ok(Wiring::Active)
}
