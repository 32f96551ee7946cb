//! Page context and event dispatcher
//!
//! [`Page`] owns the UI state signal plus the handles behaviors need. Every
//! listener funnels into [`Page::dispatch`], which runs the state transition,
//! patches only the presentation that changed, and then performs effects.

use std::cell::RefCell;
use std::rc::Rc;

use hisab_core::theme::persist_theme;
use hisab_core::{
    Presentation, PresentationChange, Scheduler, Transition, UiConfig, UiEffect, UiEvent,
    UiState,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::api::fetch_transaction_details;
use crate::behaviors::{menu, theme};
use crate::dom;
use crate::error::Result;
use crate::log;
use crate::storage::LocalStorage;
use crate::timers::BrowserScheduler;

/// Elements whose presentation is driven by the UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    NavLinks,
    BackToTop,
    Modal,
}

#[derive(Default)]
struct Elements {
    nav_links: Option<HtmlElement>,
    back_to_top: Option<HtmlElement>,
    modal: Option<HtmlElement>,
}

struct PageInner {
    window: Window,
    document: Document,
    body: HtmlElement,
    config: UiConfig,
    state: RwSignal<UiState>,
    elements: RefCell<Elements>,
    store: LocalStorage,
    scheduler: Rc<dyn Scheduler>,
}

/// Shared handle to the page. Cheap to clone into listeners.
#[derive(Clone)]
pub struct Page {
    inner: Rc<PageInner>,
}

impl Page {
    /// Build the page context with the state the page was rendered in.
    ///
    /// # Errors
    ///
    /// Returns error if window, document or body are unavailable.
    pub fn new(config: UiConfig) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let body = dom::body(&document)?;
        let store = LocalStorage::new(window.clone());

        let rendered_dark = dom::has_class(&body, &config.selectors.dark_mode_class);
        let initial_theme = theme::initial_theme(&document, &store, &config, rendered_dark);
        let rendered_menu = menu::rendered_state(&document, &config);
        let offset = dom::scroll_offset(&window);
        let state = UiState::new(&config, initial_theme, rendered_menu, offset);

        // Back-to-top and modal keep their rendered display until a scroll or close
        let initial = state.presentation();
        let rendered = Presentation {
            dark_mode: rendered_dark,
            ..initial
        };

        let page = Self {
            inner: Rc::new(PageInner {
                scheduler: Rc::new(BrowserScheduler::new(window.clone())),
                window,
                document,
                body,
                config,
                state: RwSignal::new(state),
                elements: RefCell::default(),
                store,
            }),
        };
        page.apply_changes(initial.changes_since(&rendered));

        Ok(page)
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.inner.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.inner.document
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<UiState> {
        self.inner.state
    }

    #[must_use]
    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.inner.scheduler)
    }

    /// Hand an element to the dispatcher so state changes reach it.
    pub fn register(&self, role: Role, element: HtmlElement) {
        let mut elements = self.inner.elements.borrow_mut();
        let slot = match role {
            Role::NavLinks => &mut elements.nav_links,
            Role::BackToTop => &mut elements.back_to_top,
            Role::Modal => &mut elements.modal,
        };
        *slot = Some(element);
    }

    /// Run an event through the state machine and apply its consequences.
    pub fn dispatch(&self, event: UiEvent) {
        let Transition { changes, effects } = self
            .inner
            .state
            .try_update(|ui| ui.handle(event))
            .unwrap_or_default();

        self.apply_changes(changes);
        effects.into_iter().for_each(|effect| self.perform(effect));
    }

    fn apply_changes(&self, changes: Vec<PresentationChange>) {
        for change in changes {
            if let Err(err) = self.apply(change) {
                log::error(&format!("failed to apply {change:?}: {err}"));
            }
        }
    }

    fn apply(&self, change: PresentationChange) -> Result<()> {
        let selectors = &self.inner.config.selectors;
        let elements = self.inner.elements.borrow();

        match change {
            PresentationChange::NavActive(active) => elements
                .nav_links
                .as_ref()
                .map_or(Ok(()), |nav| dom::set_class(nav, &selectors.nav_active_class, active)),
            PresentationChange::BackToTop(visibility) => elements
                .back_to_top
                .as_ref()
                .map_or(Ok(()), |button| dom::set_display(button, visibility.display())),
            PresentationChange::DarkMode(dark) => {
                dom::set_class(&self.inner.body, &selectors.dark_mode_class, dark)
            }
            PresentationChange::Modal(visibility) => elements
                .modal
                .as_ref()
                .map_or(Ok(()), |modal| dom::set_display(modal, visibility.display())),
        }
    }

    fn perform(&self, effect: UiEffect) {
        match effect {
            UiEffect::PersistTheme(theme) => {
                let key = &self.inner.config.theme_storage_key;
                if let Err(err) = persist_theme(&self.inner.store, key, theme) {
                    log::warn(&format!("theme preference not saved: {err}"));
                }
            }
            UiEffect::ScrollToTop => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                self.inner.window.scroll_to_with_scroll_to_options(&options);
            }
            UiEffect::FetchDetails { token, path } => {
                log::debug(&format!("fetching {path} for request {token}"));
                let page = self.clone();
                spawn_local(async move {
                    let event = match fetch_transaction_details(&path).await {
                        Ok(details) => UiEvent::DetailsLoaded { token, details },
                        Err(err) => UiEvent::DetailsFailed {
                            token,
                            reason: err.to_string(),
                        },
                    };
                    page.dispatch(event);
                });
            }
            UiEffect::ReportFailure { token, reason } => {
                log::error(&format!(
                    "failed to load transaction details for request {token}: {reason}"
                ));
            }
        }
    }
}

/// Load configuration embedded in the page, falling back to defaults.
#[must_use]
pub fn load_config(document: &Document, element_id: &str) -> UiConfig {
    dom::by_id(document, element_id)
        .and_then(|el| el.text_content())
        .map_or_else(UiConfig::default, |raw| match UiConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::error(&format!("ignoring page configuration: {err}"));
                UiConfig::default()
            }
        })
}
