//! Leading-edge throttling.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::scheduler::Scheduler;

/// A function that runs at most once per cooldown window.
///
/// Created by [`throttle`]. The first [`call`](Throttled::call) outside a
/// cooldown runs the wrapped function immediately and opens a window of the
/// configured delay; calls inside the window are dropped.
///
/// Dropping the wrapper does not cancel an open cooldown: its reset task
/// stays queued on the scheduler until it runs.
pub struct Throttled<A, R, F, S> {
    function: F,
    delay: Duration,
    scheduler: S,
    cooling_down: Arc<Mutex<bool>>,
    _signature: PhantomData<fn(A) -> R>,
}

/// Wraps `function` so that it runs at most once per `delay`.
///
/// Unlike [`debounce`](super::debounce), the call that opens a window is the
/// one that runs; later calls in the window are not queued or retried.
///
/// # Examples
///
/// ```rust
/// use fnutils::timing::{ManualScheduler, throttle};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fire = throttle(|shot: u32| shot * 10, Duration::from_millis(100), scheduler.clone());
///
/// assert_eq!(fire.call(1), Some(10));
/// assert_eq!(fire.call(2), None);
///
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(fire.call(3), Some(30));
/// ```
pub fn throttle<A, R, F, S>(function: F, delay: Duration, scheduler: S) -> Throttled<A, R, F, S>
where
    F: Fn(A) -> R,
    S: Scheduler,
{
    Throttled {
        function,
        delay,
        scheduler,
        cooling_down: Arc::new(Mutex::new(false)),
        _signature: PhantomData,
    }
}

impl<A, R, F, S> Throttled<A, R, F, S>
where
    F: Fn(A) -> R,
    S: Scheduler,
{
    /// Runs `function(arguments)` unless a cooldown is active.
    ///
    /// Returns the function's result, or `None` when the call was dropped.
    pub fn call(&self, arguments: A) -> Option<R> {
        {
            let mut cooling_down = self.cooling_down.lock();
            if *cooling_down {
                tracing::trace!("throttled call dropped");
                return None;
            }
            *cooling_down = true;

            let flag = Arc::clone(&self.cooling_down);
            // The cooldown ends on its own; its handle is never cancelled.
            let _handle = self.scheduler.schedule(
                self.delay,
                Box::new(move || {
                    *flag.lock() = false;
                    tracing::trace!("throttle cooldown ended");
                }),
            );
        }

        tracing::debug!(delay = ?self.delay, "running throttled invocation");
        Some((self.function)(arguments))
    }
}

impl<A, R, F, S> Throttled<A, R, F, S> {
    /// Returns whether calls are currently being dropped.
    pub fn is_cooling_down(&self) -> bool {
        *self.cooling_down.lock()
    }

    /// Returns the length of the cooldown window.
    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A, R, F, S> fmt::Debug for Throttled<A, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttled")
            .field("delay", &self.delay)
            .field("cooling_down", &self.is_cooling_down())
            .finish_non_exhaustive()
    }
}
