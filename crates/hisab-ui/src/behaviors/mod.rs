//! Page behaviors
//!
//! Each behavior wires itself independently. A behavior whose optional
//! trigger is absent reports [`Wiring::Skipped`]; one whose required element
//! is absent returns an error. Neither stops the remaining behaviors.

pub mod back_to_top;
pub mod menu;
pub mod modal;
pub mod theme;
pub mod toast;

use std::fmt;

use crate::error::Result;
use crate::log;
use crate::page::Page;

/// Outcome of wiring one behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wiring {
    /// Listeners are registered.
    Active,
    /// The page has no trigger for this behavior.
    Skipped,
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

type WireFn = fn(&Page) -> Result<Wiring>;

const BEHAVIORS: [(&str, WireFn); 5] = [
    ("menu toggle", menu::wire),
    ("back to top", back_to_top::wire),
    ("toasts", toast::wire),
    ("dark mode", theme::wire),
    ("transaction modal", modal::wire),
];

/// Wire every behavior, logging each outcome.
pub fn wire_all(page: &Page) -> Vec<(&'static str, Result<Wiring>)> {
    BEHAVIORS
        .iter()
        .map(|&(name, wire)| {
            let outcome = wire(page);
            match &outcome {
                Ok(wiring) => log::debug(&format!("{name}: {wiring}")),
                Err(err) => log::error(&format!("{name} not wired: {err}")),
            }
            (name, outcome)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_wiring_display() {
        assert_eq!(Wiring::Active.to_string(), "active");
        assert_eq!(Wiring::Skipped.to_string(), "skipped");
    }

    #[test]
    fn test_every_behavior_listed_once() {
        let names: HashSet<_> = BEHAVIORS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), BEHAVIORS.len());
    }
}
