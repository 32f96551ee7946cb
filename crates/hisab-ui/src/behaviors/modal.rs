//! Transaction detail modal
//!
//! Clicking a `.view-details` link fetches that transaction's details and
//! opens the modal once they arrive. The modal body is a Leptos view driven
//! by the modal state, so only the latest response is ever rendered.

use hisab_core::{ClickTarget, TransactionId, UiEvent};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, Node};

use super::Wiring;
use crate::components::TransactionDetailsView;
use crate::dom;
use crate::error::Result;
use crate::log;
use crate::page::{Page, Role};

/// Wire detail links, close controls and the backdrop.
///
/// # Errors
///
/// Returns `UiError::ElementMissing` if the modal or its body is absent.
pub fn wire(page: &Page) -> Result<Wiring> {
    let config = page.config();
    let selectors = &config.selectors;
    let modal = dom::require_id(page.document(), &selectors.modal_id)?;
    let body = dom::require_id(page.document(), &selectors.modal_body_id)?;
    page.register(Role::Modal, modal.clone());

    mount_details(page, body);

    for link in dom::query_all(page.document(), &selectors.view_details)? {
        let link_page = page.clone();
        let attribute = selectors.transaction_id_attribute.clone();
        let target = link.clone();
        dom::listen(&link, "click", move |event: Event| {
            event.prevent_default();
            match TransactionId::parse(target.get_attribute(&attribute).as_deref()) {
                Ok(id) => link_page.dispatch(UiEvent::DetailsRequested { id }),
                Err(err) => log::warn(&format!("detail link ignored: {err}")),
            }
        })?;
    }

    if let Some(close) = dom::query(page.document(), &selectors.close_modal)? {
        let close_page = page.clone();
        dom::listen(&close, "click", move |_| {
            close_page.dispatch(UiEvent::CloseModalClicked);
        })?;
    }

    let click_page = page.clone();
    dom::listen(page.window(), "click", move |event: Event| {
        let target = classify(&modal, &event);
        if target != ClickTarget::Outside {
            click_page.dispatch(UiEvent::WindowClicked { target });
        }
    })?;

    Ok(Wiring::Active)
}

/// Replace the server-rendered body with a view of the modal state.
fn mount_details(page: &Page, body: HtmlElement) {
    let state = page.state();
    let currency = page.config().currency_symbol.clone();
    let uploads = page.config().uploads_path.clone();

    body.set_inner_html("");
    leptos::mount::mount_to(body, move || {
        let rows = Memo::new(move |_| {
            state.with(|ui| {
                ui.modal()
                    .details()
                    .map(|details| details.rows(&currency, &uploads))
                    .unwrap_or_default()
            })
        });
        view! { <TransactionDetailsView rows=rows /> }
    })
    .forget();
}

/// Where a window click landed relative to the modal.
fn classify(modal: &HtmlElement, event: &Event) -> ClickTarget {
    let Some(node) = event.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
        return ClickTarget::Outside;
    };

    if modal.is_same_node(Some(&node)) {
        ClickTarget::Backdrop
    } else if modal.contains(Some(&node)) {
        ClickTarget::Content
    } else {
        ClickTarget::Outside
    }
}
