//! The deferred-execution seam used by [`debounce`](super::debounce) and
//! [`throttle`](super::throttle).
//!
//! A [`Scheduler`] runs a boxed callback once a delay has elapsed and can
//! cancel a callback that has not run yet. Two implementations ship with the
//! crate:
//!
//! - [`ManualScheduler`]: a virtual clock advanced explicitly by the caller.
//!   Tasks only run inside [`ManualScheduler::advance`], which makes it
//!   suitable for tests and for event loops that keep their own time.
//! - [`TokioScheduler`](super::TokioScheduler) (feature `async`): backed by
//!   tokio timers.

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// A callback handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A facility that runs callbacks after a delay.
///
/// Implementations must never run a task synchronously inside
/// [`schedule`](Scheduler::schedule): callers may hold locks while scheduling.
///
/// # Examples
///
/// ```rust
/// use fnutils::timing::{ManualScheduler, Scheduler};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// scheduler.schedule(
///     Duration::from_millis(10),
///     Box::new(move || flag.store(true, Ordering::SeqCst)),
/// );
/// assert!(!fired.load(Ordering::SeqCst));
///
/// scheduler.advance(Duration::from_millis(10));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
pub trait Scheduler {
    /// Identifies a scheduled task so it can be cancelled.
    ///
    /// Handles are stored inside the tasks that wrappers schedule, so they
    /// must outlive any borrow.
    type Handle: Send + 'static;

    /// Runs `task` once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Prevents a scheduled task from running.
    ///
    /// Cancelling a task that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Handle of a task queued on a [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManualHandle {
    deadline: Duration,
    sequence: u64,
}

impl ManualHandle {
    /// Returns the virtual time at which the task is due.
    #[inline]
    pub const fn deadline(&self) -> Duration {
        self.deadline
    }
}

struct ManualState {
    now: Duration,
    next_sequence: u64,
    queue: BTreeMap<ManualHandle, Task>,
}

/// A deterministic scheduler driven by a virtual clock.
///
/// Time only moves when [`advance`](ManualScheduler::advance) is called. Due
/// tasks then run on the calling thread in deadline order; tasks sharing a
/// deadline run in the order they were scheduled. A task scheduled while
/// advancing runs in the same call if its deadline falls inside the window.
///
/// Cloning yields another handle to the same clock and queue.
///
/// # Panics in tasks
///
/// A panicking task is caught and logged; the remaining due tasks still run.
///
/// # Examples
///
/// ```rust
/// use fnutils::timing::{ManualScheduler, Scheduler};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let handle = scheduler.schedule(Duration::from_millis(5), Box::new(|| {}));
/// assert_eq!(scheduler.pending(), 1);
///
/// scheduler.cancel(handle);
/// assert_eq!(scheduler.pending(), 0);
///
/// scheduler.advance(Duration::from_millis(5));
/// assert_eq!(scheduler.now(), Duration::from_millis(5));
/// ```
#[derive(Clone)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock starts at zero.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ManualState {
                now: Duration::ZERO,
                next_sequence: 0,
                queue: BTreeMap::new(),
            })),
        }
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Returns the number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Returns the number of tasks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now.saturating_add(by);
        let mut executed = 0;

        loop {
            // The lock is released before the task runs so that tasks can
            // schedule or cancel further work.
            let next = {
                let mut state = self.state.lock();
                let due = state
                    .queue
                    .first_key_value()
                    .map(|(handle, _)| *handle)
                    .filter(|handle| handle.deadline <= target);
                due.and_then(|handle| {
                    state.now = handle.deadline;
                    state.queue.remove(&handle).map(|task| (handle, task))
                })
            };

            let Some((handle, task)) = next else {
                break;
            };

            executed += 1;
            if catch_unwind(AssertUnwindSafe(task)).is_err() {
                tracing::error!(
                    deadline = ?handle.deadline,
                    sequence = handle.sequence,
                    "scheduled task panicked"
                );
            }
        }

        self.state.lock().now = target;
        executed
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
        let mut state = self.state.lock();
        let handle = ManualHandle {
            deadline: state.now.saturating_add(delay),
            sequence: state.next_sequence,
        };
        state.next_sequence += 1;
        state.queue.insert(handle, task);
        tracing::trace!(deadline = ?handle.deadline, sequence = handle.sequence, "task scheduled");
        handle
    }

    fn cancel(&self, handle: ManualHandle) {
        if self.state.lock().queue.remove(&handle).is_some() {
            tracing::trace!(deadline = ?handle.deadline, sequence = handle.sequence, "task cancelled");
        }
    }
}

static_assertions::assert_impl_all!(ManualScheduler: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let make = move |label: &'static str| -> Task {
            let sink = Arc::clone(&sink);
            Box::new(move || sink.lock().push(label))
        };
        (log, make)
    }

    #[test]
    fn test_tasks_run_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(30), task("late"));
        scheduler.schedule(Duration::from_millis(10), task("early"));
        scheduler.schedule(Duration::from_millis(10), task("early-second"));

        assert_eq!(scheduler.advance(Duration::from_millis(30)), 3);
        assert_eq!(*log.lock(), vec!["early", "early-second", "late"]);
    }

    #[test]
    fn test_task_not_due_stays_queued() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(10), task("a"));
        assert_eq!(scheduler.advance(Duration::from_millis(9)), 0);
        assert!(log.lock().is_empty());
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(*log.lock(), vec!["a"]);
    }

    #[test]
    fn test_task_scheduled_while_advancing_runs_if_due() {
        let scheduler = ManualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_counter = Arc::clone(&counter);
        scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || {
                inner_counter.fetch_add(1, Ordering::SeqCst);
                let counter = Arc::clone(&inner_counter);
                inner_scheduler.schedule(
                    Duration::from_millis(5),
                    Box::new(move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }),
                );
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(10)), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.now(), Duration::from_millis(10));
    }

    #[test]
    fn test_clock_observed_by_task_is_its_deadline() {
        let scheduler = ManualScheduler::new();
        let observed = Arc::new(Mutex::new(None));

        let clock = scheduler.clone();
        let slot = Arc::clone(&observed);
        scheduler.schedule(
            Duration::from_millis(7),
            Box::new(move || *slot.lock() = Some(clock.now())),
        );

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*observed.lock(), Some(Duration::from_millis(7)));
    }

    #[test]
    fn test_panicking_task_does_not_stop_later_tasks() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(1), Box::new(|| panic!("boom")));
        scheduler.schedule(Duration::from_millis(2), task("after"));

        assert_eq!(scheduler.advance(Duration::from_millis(2)), 2);
        assert_eq!(*log.lock(), vec!["after"]);
    }

    #[test]
    fn test_cancel_after_run_is_noop() {
        let scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Duration::ZERO, Box::new(|| {}));
        scheduler.advance(Duration::ZERO);
        scheduler.cancel(handle);
        assert_eq!(scheduler.pending(), 0);
    }
}
