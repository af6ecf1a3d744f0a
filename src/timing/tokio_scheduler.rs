//! A [`Scheduler`] backed by tokio timers.

use std::time::Duration;

use tokio::runtime::{Handle, TryCurrentError};
use tokio::task::AbortHandle;

use super::scheduler::{Scheduler, Task};

/// Schedules tasks as tokio tasks that sleep for the delay, then run.
///
/// Cancelling aborts the sleeping task. A task that panics only takes down
/// its own tokio task.
///
/// # Examples
///
/// ```rust
/// use fnutils::timing::{TokioScheduler, debounce};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let scheduler = TokioScheduler::current().unwrap();
/// let saves = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&saves);
/// let save = debounce(
///     move |()| {
///         counter.fetch_add(1, Ordering::SeqCst);
///     },
///     Duration::from_millis(100),
///     scheduler,
/// );
///
/// save.call(());
/// save.call(());
/// tokio::time::sleep(Duration::from_millis(150)).await;
/// assert_eq!(saves.load(Ordering::SeqCst), 1);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler on the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`TryCurrentError`] when called outside a tokio runtime.
    pub fn current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::from_handle)
    }

    /// Creates a scheduler that spawns onto the given runtime.
    #[inline]
    pub const fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn schedule(&self, delay: Duration, task: Task) -> AbortHandle {
        tracing::trace!(?delay, "spawning timer task");
        self.handle
            .spawn(async move {
                tokio::time::sleep(delay).await;
                task();
            })
            .abort_handle()
    }

    fn cancel(&self, handle: AbortHandle) {
        handle.abort();
    }
}

static_assertions::assert_impl_all!(TokioScheduler: Send, Sync, Clone);
