//! Toast auto-dismiss

use std::rc::Rc;

use hisab_core::{ToastLifecycle, ToastView};
use web_sys::HtmlElement;

use super::Wiring;
use crate::dom;
use crate::error::Result;
use crate::log;
use crate::page::Page;

/// A toast element in the document.
struct DomToast {
    element: HtmlElement,
}

impl ToastView for DomToast {
    fn fade_out(&self) {
        if let Err(err) = dom::set_style(&self.element, "opacity", "0") {
            log::warn(&format!("toast fade failed: {err}"));
        }
    }

    fn remove(&self) {
        // No-op if the element was already detached
        self.element.remove();
    }
}

/// Start a lifecycle for every toast present now.
///
/// Toasts added later are not tracked. A `.toast-close` control inside a
/// toast dismisses it early.
///
/// # Errors
///
/// Returns error if a toast selector is invalid or a listener cannot be added.
pub fn wire(page: &Page) -> Result<Wiring> {
    let selectors = &page.config().selectors;
    let toasts = dom::query_all(page.document(), &selectors.toast)?;
    if toasts.is_empty() {
        return Ok(Wiring::Skipped);
    }

    let timing = page.config().toast_timing();
    for element in toasts {
        let close = dom::query(&element, &selectors.toast_close)?;
        let lifecycle = ToastLifecycle::start(
            Rc::new(DomToast { element }),
            page.scheduler(),
            timing,
        );

        if let Some(close) = close {
            dom::listen(&close, "click", move |_| lifecycle.dismiss())?;
        }
    }

    Ok(Wiring::Active)
}
