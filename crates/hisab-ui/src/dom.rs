//! DOM lookup and mutation helpers
//!
//! Panic-free wrappers around the `web-sys` calls the behaviors need.
//! Lookups return `Option` for optional elements and `UiError` for required
//! ones; mutations surface JS exceptions as `UiError::DomUpdateFailed`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{Result, UiError};

/// Get window object
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowNotAvailable)
}

/// Get document from window
pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(UiError::DocumentNotAvailable)
}

/// Get the document body
pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(UiError::BodyNotAvailable)
}

/// Element by id, if present.
pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Element by id, reporting absence as an error.
pub fn require_id(document: &Document, id: &str) -> Result<HtmlElement> {
    by_id(document, id).ok_or_else(|| UiError::element_missing(format!("#{id}")))
}

/// First element under `root` matching `selector`, if any.
pub fn query(root: &impl QueryRoot, selector: &str) -> Result<Option<HtmlElement>> {
    root.query_first(selector)
        .map(|found| found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
        .map_err(|err| UiError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{err:?}"),
        })
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &impl QueryRoot, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = root
        .query_every(selector)
        .map_err(|err| UiError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{err:?}"),
        })?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Something that can run selector queries (documents and elements).
pub trait QueryRoot {
    fn query_first(&self, selector: &str) -> JsResult<Option<Element>>;
    fn query_every(&self, selector: &str) -> JsResult<NodeList>;
}

type JsResult<T> = std::result::Result<T, JsValue>;

impl QueryRoot for Document {
    fn query_first(&self, selector: &str) -> JsResult<Option<Element>> {
        self.query_selector(selector)
    }

    fn query_every(&self, selector: &str) -> JsResult<NodeList> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for HtmlElement {
    fn query_first(&self, selector: &str) -> JsResult<Option<Element>> {
        self.query_selector(selector)
    }

    fn query_every(&self, selector: &str) -> JsResult<NodeList> {
        self.query_selector_all(selector)
    }
}

/// Set an inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|err| UiError::dom_update_failed(&err))
}

/// Set the inline `display` property.
pub fn set_display(element: &HtmlElement, value: &str) -> Result<()> {
    set_style(element, "display", value)
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, present: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, present)
        .map(|_| ())
        .map_err(|err| UiError::dom_update_failed(&err))
}

#[must_use]
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Register a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| UiError::listener_failed(event, &err))?;

    // Listeners live as long as the page
    closure.forget();

    Ok(())
}

/// Current vertical scroll offset; unreadable offsets count as the top.
#[must_use]
pub fn scroll_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}
