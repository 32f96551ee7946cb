//! Transaction detail modal state
//!
//! Every detail request gets a fresh [`RequestToken`]. Only the response
//! carrying the latest token may render; anything older is stale and is
//! dropped, so out-of-order responses cannot overwrite a newer record.

use std::fmt;

use crate::transaction::TransactionDetails;

/// Identifies one detail request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether the modal is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

impl ModalVisibility {
    /// CSS `display` value for this visibility.
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Self::Open => "block",
            Self::Closed => "none",
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Where a window click landed relative to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Exactly the modal's outer overlay element.
    Backdrop,
    /// Anything inside the modal's content panel.
    Content,
    /// Anywhere else on the page.
    Outside,
}

/// Result of feeding a response into the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    /// The record was rendered and the modal opened.
    Shown,
    /// The request was superseded; nothing changed.
    Stale,
    /// The current request failed; nothing changed.
    Failed,
}

/// State of the transaction detail modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    visibility: ModalVisibility,
    latest: RequestToken,
    details: Option<TransactionDetails>,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    /// The record currently rendered in the body.
    #[must_use]
    pub const fn details(&self) -> Option<&TransactionDetails> {
        self.details.as_ref()
    }

    /// Token of the most recent request.
    #[must_use]
    pub const fn latest(&self) -> RequestToken {
        self.latest
    }

    /// Issue a token for a new request, invalidating all earlier ones.
    pub fn begin_request(&mut self) -> RequestToken {
        self.latest = self.latest.next();
        self.latest
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token == self.latest
    }

    /// Apply a successful response.
    pub fn resolve(&mut self, token: RequestToken, details: TransactionDetails) -> ModalOutcome {
        if !self.is_current(token) {
            tracing::debug!(%token, latest = %self.latest, "discarding stale transaction details");
            return ModalOutcome::Stale;
        }
        self.details = Some(details);
        self.visibility = ModalVisibility::Open;
        ModalOutcome::Shown
    }

    /// Apply a failed response. The modal is left untouched either way.
    #[must_use]
    pub fn fail(&self, token: RequestToken) -> ModalOutcome {
        if self.is_current(token) {
            ModalOutcome::Failed
        } else {
            ModalOutcome::Stale
        }
    }

    /// Close via the close control.
    pub fn close(&mut self) {
        self.visibility = ModalVisibility::Closed;
    }

    /// Handle a window click. Returns true when the click closed the modal.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        if target == ClickTarget::Backdrop && self.visibility.is_open() {
            self.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> TransactionDetails {
        TransactionDetails {
            date: date.into(),
            ..TransactionDetails::default()
        }
    }

    #[test]
    fn test_tokens_increase() {
        let mut modal = ModalState::new();
        let first = modal.begin_request();
        let second = modal.begin_request();
        assert!(second > first);
        assert!(!modal.is_current(first));
        assert!(modal.is_current(second));
    }

    #[test]
    fn test_resolve_current_opens() {
        let mut modal = ModalState::new();
        let token = modal.begin_request();
        assert_eq!(modal.resolve(token, record("2024-01-01")), ModalOutcome::Shown);
        assert!(modal.visibility().is_open());
        assert_eq!(
            modal.details().map(|d| d.date.to_text()),
            Some("2024-01-01".to_string())
        );
    }

    #[test]
    fn test_stale_response_does_not_overwrite() {
        let mut modal = ModalState::new();
        let old = modal.begin_request();
        let new = modal.begin_request();

        assert_eq!(modal.resolve(new, record("new")), ModalOutcome::Shown);
        assert_eq!(modal.resolve(old, record("old")), ModalOutcome::Stale);
        assert_eq!(
            modal.details().map(|d| d.date.to_text()),
            Some("new".to_string())
        );
    }

    #[test]
    fn test_failure_leaves_modal_closed() {
        let mut modal = ModalState::new();
        let token = modal.begin_request();
        assert_eq!(modal.fail(token), ModalOutcome::Failed);
        assert_eq!(modal.visibility(), ModalVisibility::Closed);
        assert!(modal.details().is_none());
    }

    #[test]
    fn test_click_targets() {
        let mut modal = ModalState::new();
        let token = modal.begin_request();
        let _ = modal.resolve(token, record("x"));

        assert!(!modal.handle_click(ClickTarget::Content));
        assert!(!modal.handle_click(ClickTarget::Outside));
        assert!(modal.visibility().is_open());

        assert!(modal.handle_click(ClickTarget::Backdrop));
        assert_eq!(modal.visibility(), ModalVisibility::Closed);
        assert!(!modal.handle_click(ClickTarget::Backdrop));
    }

    #[test]
    fn test_display_values() {
        assert_eq!(ModalVisibility::Open.display(), "block");
        assert_eq!(ModalVisibility::Closed.display(), "none");
        assert_eq!(RequestToken::default().to_string(), "#0");
    }
}
