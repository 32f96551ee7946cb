//! `setTimeout`-backed scheduler
//!
//! Timeouts are created with `gloo_timers` and detached immediately; the
//! returned handle cancels through `clearTimeout` so a task's own timeout is
//! never dropped from inside its callback.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use hisab_core::schedule::Task;
use hisab_core::{ScheduledTask, Scheduler};
use web_sys::Window;

/// Scheduler running tasks on the browser event loop.
#[derive(Debug, Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

/// Clamp a delay to what `setTimeout` accepts.
///
/// Browsers store the delay as a signed 32-bit value and fire anything
/// larger immediately, so the ceiling is `i32::MAX`.
#[must_use]
pub fn delay_millis(delay: Duration) -> u32 {
    const MAX_DELAY_MS: u32 = i32::MAX.unsigned_abs();
    u32::try_from(delay.as_millis()).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS))
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let handle = Timeout::new(delay_millis(delay), task).forget();

        match handle.as_f64() {
            Some(raw) => {
                #[allow(clippy::cast_possible_truncation)]
                let id = raw as i32;
                let window = self.window.clone();
                ScheduledTask::new(move || window.clear_timeout_with_handle(id))
            }
            None => ScheduledTask::detached(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_millis() {
        assert_eq!(delay_millis(Duration::from_millis(4000)), 4000);
        assert_eq!(delay_millis(Duration::ZERO), 0);
        assert_eq!(delay_millis(Duration::from_secs(u64::MAX)), 2_147_483_647);
        assert_eq!(delay_millis(Duration::from_millis(3_000_000_000)), 2_147_483_647);
        assert_eq!(delay_millis(Duration::from_millis(2_147_483_647)), 2_147_483_647);
    }
}
