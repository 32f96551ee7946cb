//! Mobile navigation menu state

/// Open/closed state of the mobile navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Start from the state the page was rendered with.
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    /// Flip the menu state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Whether the navigation container carries the active class.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }
}
