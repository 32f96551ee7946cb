//! The page's UI state object
//!
//! Browser events become [`UiEvent`]s. [`UiState::update`] applies the
//! transition and returns the side effects the shell must perform;
//! [`UiState::presentation`] maps state to what the page should look like.
//! Toasts are not part of this state: each owns its own lifecycle.

use crate::config::UiConfig;
use crate::menu::MenuState;
use crate::modal::{ClickTarget, ModalOutcome, ModalState, ModalVisibility, RequestToken};
use crate::scroll::{BackToTop, Visibility};
use crate::theme::Theme;
use crate::transaction::{TransactionDetails, TransactionId};

/// Something the user or the network did.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    MenuToggled,
    Scrolled { offset: f64 },
    BackToTopClicked,
    ThemeToggled,
    DetailsRequested { id: TransactionId },
    DetailsLoaded { token: RequestToken, details: TransactionDetails },
    DetailsFailed { token: RequestToken, reason: String },
    CloseModalClicked,
    WindowClicked { target: ClickTarget },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Write the theme preference to storage.
    PersistTheme(Theme),
    /// Smoothly scroll the window to the top.
    ScrollToTop,
    /// Fetch the detail record at `path`.
    FetchDetails { token: RequestToken, path: String },
    /// Report a failed detail request to the diagnostic channel.
    ReportFailure { token: RequestToken, reason: String },
}

/// What the page should currently look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub nav_active: bool,
    pub back_to_top: Visibility,
    pub dark_mode: bool,
    pub modal: ModalVisibility,
}

/// A single difference between two presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationChange {
    NavActive(bool),
    BackToTop(Visibility),
    DarkMode(bool),
    Modal(ModalVisibility),
}

impl Presentation {
    /// Changes needed to go from `previous` to `self`.
    #[must_use]
    pub fn changes_since(&self, previous: &Self) -> Vec<PresentationChange> {
        let mut changes = Vec::new();
        if self.nav_active != previous.nav_active {
            changes.push(PresentationChange::NavActive(self.nav_active));
        }
        if self.back_to_top != previous.back_to_top {
            changes.push(PresentationChange::BackToTop(self.back_to_top));
        }
        if self.dark_mode != previous.dark_mode {
            changes.push(PresentationChange::DarkMode(self.dark_mode));
        }
        if self.modal != previous.modal {
            changes.push(PresentationChange::Modal(self.modal));
        }
        changes
    }
}

/// Presentation an event writes even when the state did not move.
///
/// The page may be rendered with the back-to-top control or the modal already
/// visible, so scrolling and closing write their display every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Restated {
    BackToTop,
    Modal,
}

impl Restated {
    const fn by(event: &UiEvent) -> Option<Self> {
        match event {
            UiEvent::Scrolled { .. } => Some(Self::BackToTop),
            UiEvent::CloseModalClicked
            | UiEvent::WindowClicked {
                target: ClickTarget::Backdrop,
            } => Some(Self::Modal),
            _ => None,
        }
    }

    const fn change(self, presentation: &Presentation) -> PresentationChange {
        match self {
            Self::BackToTop => PresentationChange::BackToTop(presentation.back_to_top),
            Self::Modal => PresentationChange::Modal(presentation.modal),
        }
    }
}

/// Outcome of one event: presentation to write and effects to perform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    pub changes: Vec<PresentationChange>,
    pub effects: Vec<UiEffect>,
}

/// Typed state of every stateful behavior on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    theme: Theme,
    menu: MenuState,
    back_to_top: Visibility,
    scroll_rule: BackToTop,
    modal: ModalState,
    details_endpoint: String,
}

impl UiState {
    /// State at page load.
    #[must_use]
    pub fn new(config: &UiConfig, theme: Theme, menu: MenuState, scroll_offset: f64) -> Self {
        let scroll_rule = BackToTop::new(config.scroll_threshold_px);
        Self {
            theme,
            menu,
            back_to_top: scroll_rule.visibility_for(scroll_offset),
            scroll_rule,
            modal: ModalState::new(),
            details_endpoint: config.details_endpoint.clone(),
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Apply an event and return everything the page must do about it.
    pub fn handle(&mut self, event: UiEvent) -> Transition {
        let before = self.presentation();
        let restated = Restated::by(&event);
        let effects = self.update(event);
        let after = self.presentation();

        let mut changes = after.changes_since(&before);
        if let Some(change) = restated.map(|field| field.change(&after)) {
            if !changes.contains(&change) {
                changes.push(change);
            }
        }
        Transition { changes, effects }
    }

    /// Apply an event and return the effects to perform.
    pub fn update(&mut self, event: UiEvent) -> Vec<UiEffect> {
        match event {
            UiEvent::MenuToggled => {
                self.menu = self.menu.toggled();
                Vec::new()
            }
            UiEvent::Scrolled { offset } => {
                self.back_to_top = self.scroll_rule.visibility_for(offset);
                Vec::new()
            }
            UiEvent::BackToTopClicked => vec![UiEffect::ScrollToTop],
            UiEvent::ThemeToggled => {
                self.theme = self.theme.toggled();
                vec![UiEffect::PersistTheme(self.theme)]
            }
            UiEvent::DetailsRequested { id } => {
                let token = self.modal.begin_request();
                vec![UiEffect::FetchDetails {
                    token,
                    path: id.details_path(&self.details_endpoint),
                }]
            }
            UiEvent::DetailsLoaded { token, details } => {
                let _ = self.modal.resolve(token, details);
                Vec::new()
            }
            UiEvent::DetailsFailed { token, reason } => match self.modal.fail(token) {
                ModalOutcome::Failed => vec![UiEffect::ReportFailure { token, reason }],
                ModalOutcome::Shown | ModalOutcome::Stale => {
                    tracing::debug!(%token, %reason, "ignoring failure of superseded request");
                    Vec::new()
                }
            },
            UiEvent::CloseModalClicked => {
                self.modal.close();
                Vec::new()
            }
            UiEvent::WindowClicked { target } => {
                let _ = self.modal.handle_click(target);
                Vec::new()
            }
        }
    }

    /// Pure mapping from state to presentation.
    #[must_use]
    pub const fn presentation(&self) -> Presentation {
        Presentation {
            nav_active: self.menu.is_open(),
            back_to_top: self.back_to_top,
            dark_mode: self.theme.is_dark(),
            modal: self.modal.visibility(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> UiState {
        UiState::new(&UiConfig::default(), Theme::Light, MenuState::default(), 0.0)
    }

    #[test]
    fn test_initial_presentation() {
        let presentation = state().presentation();
        assert!(!presentation.nav_active);
        assert_eq!(presentation.back_to_top, Visibility::Hidden);
        assert!(!presentation.dark_mode);
        assert_eq!(presentation.modal, ModalVisibility::Closed);
    }

    #[test]
    fn test_initial_scroll_offset_respected() {
        let state = UiState::new(&UiConfig::default(), Theme::Light, MenuState::default(), 900.0);
        assert_eq!(state.presentation().back_to_top, Visibility::Shown);
    }

    #[test]
    fn test_theme_toggle_persists_new_theme() {
        let mut state = state();
        assert_eq!(
            state.update(UiEvent::ThemeToggled),
            vec![UiEffect::PersistTheme(Theme::Dark)]
        );
        assert_eq!(
            state.update(UiEvent::ThemeToggled),
            vec![UiEffect::PersistTheme(Theme::Light)]
        );
    }

    #[test]
    fn test_back_to_top_click_scrolls() {
        assert_eq!(
            state().update(UiEvent::BackToTopClicked),
            vec![UiEffect::ScrollToTop]
        );
    }

    #[test]
    fn test_details_request_builds_path() -> crate::Result<()> {
        let mut state = state();
        let id = TransactionId::parse(Some("42"))?;
        let effects = state.update(UiEvent::DetailsRequested { id });
        assert_eq!(
            effects,
            vec![UiEffect::FetchDetails {
                token: state.modal().latest(),
                path: "/transaction_details/42".to_string(),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_stale_failure_is_not_reported() -> crate::Result<()> {
        let mut state = state();
        let id = TransactionId::parse(Some("1"))?;
        let _ = state.update(UiEvent::DetailsRequested { id: id.clone() });
        let stale = state.modal().latest();
        let _ = state.update(UiEvent::DetailsRequested { id });

        let effects = state.update(UiEvent::DetailsFailed {
            token: stale,
            reason: "network".to_string(),
        });
        assert!(effects.is_empty());
        Ok(())
    }

    #[test]
    fn test_current_failure_is_reported() -> crate::Result<()> {
        let mut state = state();
        let id = TransactionId::parse(Some("1"))?;
        let _ = state.update(UiEvent::DetailsRequested { id });
        let token = state.modal().latest();

        let effects = state.update(UiEvent::DetailsFailed {
            token,
            reason: "bad json".to_string(),
        });
        assert_eq!(
            effects,
            vec![UiEffect::ReportFailure {
                token,
                reason: "bad json".to_string()
            }]
        );
        assert_eq!(state.presentation().modal, ModalVisibility::Closed);
        Ok(())
    }

    #[test]
    fn test_scroll_restates_back_to_top_without_state_change() {
        let mut state = state();
        let transition = state.handle(UiEvent::Scrolled { offset: 120.0 });
        assert_eq!(
            transition.changes,
            vec![PresentationChange::BackToTop(Visibility::Hidden)]
        );
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_close_restates_modal_without_state_change() {
        let mut state = state();
        assert_eq!(
            state.handle(UiEvent::CloseModalClicked).changes,
            vec![PresentationChange::Modal(ModalVisibility::Closed)]
        );
        assert_eq!(
            state
                .handle(UiEvent::WindowClicked {
                    target: ClickTarget::Backdrop
                })
                .changes,
            vec![PresentationChange::Modal(ModalVisibility::Closed)]
        );
    }

    #[test]
    fn test_content_click_writes_nothing() {
        let mut state = state();
        let transition = state.handle(UiEvent::WindowClicked {
            target: ClickTarget::Content,
        });
        assert_eq!(transition, Transition::default());
    }

    #[test]
    fn test_restated_change_not_duplicated() {
        let mut state = state();
        assert_eq!(
            state.handle(UiEvent::Scrolled { offset: 301.0 }).changes,
            vec![PresentationChange::BackToTop(Visibility::Shown)]
        );
    }

    #[test]
    fn test_handle_returns_effects() {
        let mut state = state();
        let transition = state.handle(UiEvent::ThemeToggled);
        assert_eq!(transition.changes, vec![PresentationChange::DarkMode(true)]);
        assert_eq!(transition.effects, vec![UiEffect::PersistTheme(Theme::Dark)]);
    }

    #[test]
    fn test_presentation_changes() {
        let mut state = state();
        let before = state.presentation();
        let _ = state.update(UiEvent::MenuToggled);
        let _ = state.update(UiEvent::Scrolled { offset: 500.0 });

        assert_eq!(
            state.presentation().changes_since(&before),
            vec![
                PresentationChange::NavActive(true),
                PresentationChange::BackToTop(Visibility::Shown),
            ]
        );
        assert!(before.changes_since(&before).is_empty());
    }
}
