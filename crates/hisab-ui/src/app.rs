//! Start-up sequence

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::behaviors::{self, Wiring};
use crate::dom;
use crate::error::{Result, UiError};
use crate::log;
use crate::page::{Page, load_config};

/// Id of the `<script type="application/json">` element holding `UiConfig`.
pub const CONFIG_ELEMENT_ID: &str = "hisab-ui-config";

/// Wire the page now if the DOM is parsed, otherwise once it is.
pub fn start() {
    if let Err(err) = when_ready(run) {
        log::error(&format!("hisab-ui failed to start: {err}"));
    }
}

fn when_ready(init: fn()) -> Result<()> {
    let document = dom::document(&dom::window()?)?;
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }

    let closure = Closure::once_into_js(init);
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())
        .map_err(|err| UiError::listener_failed("DOMContentLoaded", &err))
}

fn run() {
    match init() {
        Ok(active) => log::info(&format!("hisab-ui ready ({active} behaviors active)")),
        Err(err) => log::error(&format!("hisab-ui failed to start: {err}")),
    }
}

/// Load configuration, build the page and wire every behavior.
///
/// Returns how many behaviors ended up active.
///
/// # Errors
///
/// Returns error if the page context cannot be built. Individual behaviors
/// failing to wire are logged, not returned.
pub fn init() -> Result<usize> {
    let document = dom::document(&dom::window()?)?;
    let config = load_config(&document, CONFIG_ELEMENT_ID);
    log::set_level(config.log_level);
    log::install_tracing(config.log_level);

    let page = Page::new(config)?;
    let active = behaviors::wire_all(&page)
        .into_iter()
        .filter(|(_, outcome)| matches!(outcome, Ok(Wiring::Active)))
        .count();

    Ok(active)
}
