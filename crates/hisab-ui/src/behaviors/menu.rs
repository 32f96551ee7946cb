//! Mobile menu toggle

use hisab_core::{MenuState, UiConfig, UiEvent};
use web_sys::Document;

use super::Wiring;
use crate::dom;
use crate::error::{Result, UiError};
use crate::page::{Page, Role};

/// Menu state as rendered by the server.
#[must_use]
pub fn rendered_state(document: &Document, config: &UiConfig) -> MenuState {
    let selectors = &config.selectors;
    let open = dom::query(document, &selectors.nav_links)
        .ok()
        .flatten()
        .is_some_and(|nav| dom::has_class(&nav, &selectors.nav_active_class));
    MenuState::new(open)
}

/// Toggle the navigation links on click of the menu control.
///
/// # Errors
///
/// Returns `UiError::ElementMissing` if the toggle exists but the navigation
/// container does not.
pub fn wire(page: &Page) -> Result<Wiring> {
    let selectors = &page.config().selectors;
    let Some(toggle) = dom::by_id(page.document(), &selectors.menu_toggle_id) else {
        return Ok(Wiring::Skipped);
    };

    let nav = dom::query(page.document(), &selectors.nav_links)?
        .ok_or_else(|| UiError::element_missing(&selectors.nav_links))?;
    page.register(Role::NavLinks, nav);

    let handler_page = page.clone();
    dom::listen(&toggle, "click", move |_| {
        handler_page.dispatch(UiEvent::MenuToggled);
    })?;

    Ok(Wiring::Active)
}
