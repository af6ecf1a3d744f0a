//! Trailing-edge debouncing.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::scheduler::Scheduler;

struct DebounceState<H> {
    generation: u64,
    pending: Option<H>,
}

/// A function whose invocations are postponed until calls stop arriving.
///
/// Created by [`debounce`]. Every [`call`](Debounced::call) cancels the
/// invocation scheduled by the previous call and schedules a new one, so
/// the wrapped function runs once per quiet period, with the arguments of
/// the last call.
pub struct Debounced<A, F, S>
where
    S: Scheduler,
{
    function: Arc<F>,
    delay: Duration,
    scheduler: S,
    state: Arc<Mutex<DebounceState<S::Handle>>>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs only after `delay` has passed without
/// another call.
///
/// Multi-argument functions take their arguments as a tuple. The return
/// value of the deferred invocation is discarded.
///
/// # Examples
///
/// ```rust
/// use fnutils::timing::{ManualScheduler, debounce};
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let resized = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&resized);
/// let on_resize = debounce(
///     move |(width, height): (u32, u32)| sink.lock().unwrap().push((width, height)),
///     Duration::from_millis(50),
///     scheduler.clone(),
/// );
///
/// on_resize.call((800, 600));
/// scheduler.advance(Duration::from_millis(10));
/// on_resize.call((1024, 768));
/// scheduler.advance(Duration::from_millis(50));
///
/// assert_eq!(*resized.lock().unwrap(), vec![(1024, 768)]);
/// ```
pub fn debounce<A, F, S>(function: F, delay: Duration, scheduler: S) -> Debounced<A, F, S>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
    S: Scheduler,
{
    Debounced {
        function: Arc::new(function),
        delay,
        scheduler,
        state: Arc::new(Mutex::new(DebounceState {
            generation: 0,
            pending: None,
        })),
        _arguments: PhantomData,
    }
}

impl<A, F, S> Debounced<A, F, S>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
    S: Scheduler,
{
    /// Replaces any pending invocation with one that runs `function(arguments)`
    /// after the configured delay.
    pub fn call(&self, arguments: A) {
        let mut state = self.state.lock();

        if let Some(previous) = state.pending.take() {
            self.scheduler.cancel(previous);
            tracing::trace!("pending debounced invocation superseded");
        }

        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let function = Arc::clone(&self.function);

        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                {
                    let mut state = shared.lock();
                    // A superseded task that escaped cancellation must not run.
                    if state.generation != generation {
                        return;
                    }
                    state.pending = None;
                }
                tracing::debug!("running debounced invocation");
                function(arguments);
            }),
        );
        state.pending = Some(handle);
    }
}

impl<A, F, S> Debounced<A, F, S>
where
    S: Scheduler,
{
    /// Drops the pending invocation, if any.
    ///
    /// Returns `true` when an invocation was pending.
    pub fn cancel(&self) -> bool {
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);
        match state.pending.take() {
            Some(handle) => {
                self.scheduler.cancel(handle);
                tracing::debug!("debounced invocation cancelled");
                true
            }
            None => false,
        }
    }

    /// Returns whether an invocation is waiting to run.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Returns the quiet period this wrapper waits for.
    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A, F, S> fmt::Debug for Debounced<A, F, S>
where
    S: Scheduler,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(
    Debounced<u32, fn(u32), super::ManualScheduler>: Send, Sync
);
