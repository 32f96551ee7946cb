//! Cancellable scheduled callbacks.
//!
//! The browser shell implements [`Scheduler`] on top of `setTimeout`;
//! [`ManualScheduler`] is a virtual clock that only moves when told to, which
//! makes timer-driven lifecycles deterministic under test.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// A one-shot callback.
pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled task.
///
/// Dropping the handle does not cancel the task; call [`ScheduledTask::cancel`].
pub struct ScheduledTask {
    canceller: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    /// Wrap a cancellation routine.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            canceller: Some(Box::new(cancel)),
        }
    }

    /// A handle for a task that cannot be cancelled.
    #[must_use]
    pub const fn detached() -> Self {
        Self { canceller: None }
    }

    /// Prevent the task from running. No-op if it already ran.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.canceller.take() {
            cancel();
        }
    }
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("cancellable", &self.canceller.is_some())
            .finish()
    }
}

/// Runs callbacks after a delay on the current thread.
pub trait Scheduler {
    /// Schedule `task` to run once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask;
}

type QueueKey = (Duration, u64);

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<QueueKey, Task>,
}

/// Virtual-clock scheduler.
///
/// Tasks run in due-time order (ties in scheduling order) during
/// [`ManualScheduler::advance`]. Tasks may schedule further tasks; those run
/// within the same call if they fall due before the target time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now().saturating_add(by);

        loop {
            // Release the borrow before running the task; it may reschedule.
            let due = {
                let mut clock = self.clock.borrow_mut();
                let next_due = clock.queue.first_key_value().map(|(&(at, _), _)| at);
                match next_due {
                    Some(at) if at <= target => {
                        clock.now = at;
                        clock.queue.pop_first().map(|(_, task)| task)
                    }
                    _ => None,
                }
            };

            match due {
                Some(task) => task(),
                None => break,
            }
        }

        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let key = {
            let mut clock = self.clock.borrow_mut();
            let key = (clock.now.saturating_add(delay), clock.next_seq);
            clock.next_seq = clock.next_seq.wrapping_add(1);
            clock.queue.insert(key, task);
            key
        };

        let clock: Weak<RefCell<ManualClock>> = Rc::downgrade(&self.clock);
        ScheduledTask::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().queue.remove(&key);
            }
        })
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}
