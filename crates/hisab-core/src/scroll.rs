//! Back-to-top visibility rules

use std::fmt;

/// Whether a control is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    /// CSS `display` value for this visibility.
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Self::Shown => "block",
            Self::Hidden => "none",
        }
    }

    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shown => write!(f, "shown"),
            Self::Hidden => write!(f, "hidden"),
        }
    }
}

/// Threshold rule for the back-to-top control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackToTop {
    threshold: f64,
}

impl Default for BackToTop {
    fn default() -> Self {
        Self { threshold: 300.0 }
    }
}

impl BackToTop {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Visibility for a vertical scroll offset.
    ///
    /// Shown only when the offset is strictly above the threshold. A NaN
    /// offset compares false and therefore hides the control.
    #[must_use]
    pub fn visibility_for(&self, offset: f64) -> Visibility {
        if offset > self.threshold {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_hidden() {
        let rule = BackToTop::default();
        assert_eq!(rule.visibility_for(300.0), Visibility::Hidden);
        assert_eq!(rule.visibility_for(301.0), Visibility::Shown);
        assert_eq!(rule.visibility_for(300.5), Visibility::Shown);
    }

    #[test]
    fn test_top_of_page_is_hidden() {
        assert_eq!(BackToTop::default().visibility_for(0.0), Visibility::Hidden);
    }

    #[test]
    fn test_nan_offset_is_hidden() {
        assert_eq!(
            BackToTop::default().visibility_for(f64::NAN),
            Visibility::Hidden
        );
    }

    #[test]
    fn test_display_values() {
        assert_eq!(Visibility::Shown.display(), "block");
        assert_eq!(Visibility::Hidden.display(), "none");
        assert_eq!(Visibility::Shown.to_string(), "shown");
    }
}
