//! Toast notification lifecycle
//!
//! Each toast moves `Visible -> Fading -> Removed` on two timers. Manual
//! dismissal cancels whichever transition is pending and removes the toast
//! once, so a late timer can never touch a toast that is already gone.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::{ScheduledTask, Scheduler};

/// Phase of a toast's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    #[default]
    Visible,
    Fading,
    Removed,
}

impl ToastPhase {
    /// Next phase on timer expiry. `Removed` is terminal.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Visible => Self::Fading,
            Self::Fading | Self::Removed => Self::Removed,
        }
    }

    #[must_use]
    pub const fn is_removed(self) -> bool {
        matches!(self, Self::Removed)
    }
}

impl fmt::Display for ToastPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => write!(f, "visible"),
            Self::Fading => write!(f, "fading"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// Delays between lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// From start until the fade begins.
    pub fade_delay: Duration,
    /// From the fade beginning until removal.
    pub remove_delay: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            fade_delay: Duration::from_millis(4000),
            remove_delay: Duration::from_millis(500),
        }
    }
}

/// The toast as seen by its lifecycle.
pub trait ToastView {
    /// Start the fade-out transition.
    fn fade_out(&self);
    /// Detach the toast from the document.
    fn remove(&self);
}

struct ToastInner {
    phase: ToastPhase,
    pending: Option<ScheduledTask>,
}

/// Lifecycle of a single toast.
///
/// Cloning yields another handle to the same lifecycle.
#[derive(Clone)]
pub struct ToastLifecycle {
    inner: Rc<RefCell<ToastInner>>,
    view: Rc<dyn ToastView>,
}

impl ToastLifecycle {
    /// Start the lifecycle: schedules the fade after `timing.fade_delay`.
    pub fn start(
        view: Rc<dyn ToastView>,
        scheduler: Rc<dyn Scheduler>,
        timing: ToastTiming,
    ) -> Self {
        let lifecycle = Self {
            inner: Rc::new(RefCell::new(ToastInner {
                phase: ToastPhase::Visible,
                pending: None,
            })),
            view,
        };

        let fading = lifecycle.clone();
        let later = Rc::clone(&scheduler);
        let task = scheduler.schedule(
            timing.fade_delay,
            Box::new(move || fading.on_fade(&later, timing.remove_delay)),
        );
        lifecycle.inner.borrow_mut().pending = Some(task);

        lifecycle
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.inner.borrow().phase
    }

    /// Remove the toast now, cancelling any pending transition.
    ///
    /// Dismissing an already removed toast does nothing.
    pub fn dismiss(&self) {
        let (previous, pending) = {
            let mut inner = self.inner.borrow_mut();
            let previous = inner.phase;
            inner.phase = ToastPhase::Removed;
            (previous, inner.pending.take())
        };

        if let Some(task) = pending {
            task.cancel();
        }

        if !previous.is_removed() {
            self.view.remove();
        }
    }

    fn on_fade(&self, scheduler: &Rc<dyn Scheduler>, remove_delay: Duration) {
        if !self.transition_from(ToastPhase::Visible) {
            return;
        }
        self.view.fade_out();

        let removing = self.clone();
        let task = scheduler.schedule(remove_delay, Box::new(move || removing.on_remove()));

        let mut inner = self.inner.borrow_mut();
        if inner.phase == ToastPhase::Fading {
            inner.pending = Some(task);
        } else {
            // Dismissed from inside fade_out.
            drop(inner);
            task.cancel();
        }
    }

    fn on_remove(&self) {
        if self.transition_from(ToastPhase::Fading) {
            self.view.remove();
        }
    }

    /// Advance one phase if currently in `expected`.
    fn transition_from(&self, expected: ToastPhase) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.phase != expected {
            return false;
        }
        inner.phase = expected.advance();
        inner.pending = None;
        true
    }
}

impl fmt::Debug for ToastLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastLifecycle")
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    #[derive(Default)]
    struct RecordingView {
        calls: RefCell<Vec<&'static str>>,
    }

    impl ToastView for RecordingView {
        fn fade_out(&self) {
            self.calls.borrow_mut().push("fade");
        }

        fn remove(&self) {
            self.calls.borrow_mut().push("remove");
        }
    }

    fn start(scheduler: &ManualScheduler) -> (ToastLifecycle, Rc<RecordingView>) {
        let view = Rc::new(RecordingView::default());
        let lifecycle = ToastLifecycle::start(
            Rc::clone(&view) as Rc<dyn ToastView>,
            Rc::new(scheduler.clone()),
            ToastTiming::default(),
        );
        (lifecycle, view)
    }

    #[test]
    fn test_phase_advance_is_terminal_at_removed() {
        assert_eq!(ToastPhase::Visible.advance(), ToastPhase::Fading);
        assert_eq!(ToastPhase::Fading.advance(), ToastPhase::Removed);
        assert_eq!(ToastPhase::Removed.advance(), ToastPhase::Removed);
    }

    #[test]
    fn test_full_lifecycle_on_timers() {
        let scheduler = ManualScheduler::new();
        let (toast, view) = start(&scheduler);

        scheduler.advance(Duration::from_millis(3999));
        assert_eq!(toast.phase(), ToastPhase::Visible);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(toast.phase(), ToastPhase::Fading);

        scheduler.advance(Duration::from_millis(500));
        assert_eq!(toast.phase(), ToastPhase::Removed);
        assert_eq!(*view.calls.borrow(), vec!["fade", "remove"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_dismiss_while_fading_cancels_removal_timer() {
        let scheduler = ManualScheduler::new();
        let (toast, view) = start(&scheduler);

        scheduler.advance(Duration::from_millis(4200));
        toast.dismiss();
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(*view.calls.borrow(), vec!["fade", "remove"]);
    }

    #[test]
    fn test_dismiss_twice_removes_once() {
        let scheduler = ManualScheduler::new();
        let (toast, view) = start(&scheduler);

        toast.dismiss();
        toast.dismiss();
        scheduler.advance(Duration::from_secs(10));

        assert_eq!(*view.calls.borrow(), vec!["remove"]);
        assert_eq!(toast.phase(), ToastPhase::Removed);
    }
}
