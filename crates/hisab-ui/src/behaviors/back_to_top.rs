//! Back-to-top control
//!
//! This control is not optional: a page without it fails this behavior
//! loudly instead of skipping it.

use hisab_core::UiEvent;

use super::Wiring;
use crate::dom;
use crate::error::Result;
use crate::page::{Page, Role};

/// Show the control past the scroll threshold; scroll up smoothly on click.
///
/// # Errors
///
/// Returns `UiError::ElementMissing` if the control is absent.
pub fn wire(page: &Page) -> Result<Wiring> {
    let button = dom::require_id(page.document(), &page.config().selectors.back_to_top_id)?;
    page.register(Role::BackToTop, button.clone());

    let scroll_page = page.clone();
    dom::listen(page.window(), "scroll", move |_| {
        let offset = dom::scroll_offset(scroll_page.window());
        scroll_page.dispatch(UiEvent::Scrolled { offset });
    })?;

    let click_page = page.clone();
    dom::listen(&button, "click", move |_| {
        click_page.dispatch(UiEvent::BackToTopClicked);
    })?;

    Ok(Wiring::Active)
}
