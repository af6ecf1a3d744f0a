//! Run-at-most-once wrappers.
//!
//! [`Once`] runs its function on the first call and replays the cached result
//! afterwards. [`TryOnce`] does the same for fallible functions, caching only
//! successes: an `Err` is handed back to the caller and the next call tries
//! again. A panic inside the function leaves either wrapper un-run as well.

use std::fmt;
use std::marker::PhantomData;

use parking_lot::Mutex;

/// The internal state of a once wrapper.
///
/// The function is dropped as soon as a result has been cached.
enum OnceState<R, F> {
    /// The function has not completed successfully yet.
    Pending(F),
    /// The function ran and produced this result.
    Ran(R),
}

impl<R, F> OnceState<R, F> {
    const fn has_run(&self) -> bool {
        matches!(self, Self::Ran(_))
    }
}

/// A function that runs at most once.
///
/// Created by [`once`].
pub struct Once<A, R, F> {
    state: Mutex<OnceState<R, F>>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that only its first invocation runs.
///
/// Later calls return a clone of the first result, whatever their arguments.
///
/// # Examples
///
/// ```rust
/// use fnutils::timing::once;
/// use std::cell::Cell;
///
/// let connections = Cell::new(0);
/// let connect = once(|address: &str| {
///     connections.set(connections.get() + 1);
///     format!("connected to {address}")
/// });
///
/// assert_eq!(connect.call("db-1"), "connected to db-1");
/// assert_eq!(connect.call("db-2"), "connected to db-1");
/// assert_eq!(connections.get(), 1);
/// ```
pub fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    Once {
        state: Mutex::new(OnceState::Pending(function)),
        _arguments: PhantomData,
    }
}

impl<A, R, F> Once<A, R, F>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    /// Runs the function on the first call, returns the cached result after.
    pub fn call(&self, arguments: A) -> R {
        let mut state = self.state.lock();
        match &mut *state {
            OnceState::Ran(value) => value.clone(),
            OnceState::Pending(function) => {
                let value = function(arguments);
                *state = OnceState::Ran(value.clone());
                tracing::debug!("once wrapper ran");
                value
            }
        }
    }
}

impl<A, R, F> Once<A, R, F>
where
    R: Clone,
{
    /// Returns the cached result without running the function.
    pub fn get(&self) -> Option<R> {
        match &*self.state.lock() {
            OnceState::Ran(value) => Some(value.clone()),
            OnceState::Pending(_) => None,
        }
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns whether the function has run.
    pub fn has_run(&self) -> bool {
        self.state.lock().has_run()
    }
}

impl<A, R, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Once")
            .field("has_run", &self.has_run())
            .finish_non_exhaustive()
    }
}

/// A fallible function whose first success is cached.
///
/// Created by [`try_once`].
pub struct TryOnce<A, R, E, F> {
    state: Mutex<OnceState<R, F>>,
    _signature: PhantomData<fn(A) -> E>,
}

/// Wraps a fallible `function` so that it stops running after its first
/// success.
///
/// Failures do not count as a run: the error is returned unchanged and the
/// next call invokes `function` again.
///
/// # Examples
///
/// ```rust
/// use fnutils::timing::try_once;
/// use std::cell::Cell;
///
/// let attempts = Cell::new(0);
/// let load = try_once(|()| {
///     attempts.set(attempts.get() + 1);
///     if attempts.get() < 2 { Err("not ready") } else { Ok(attempts.get()) }
/// });
///
/// assert_eq!(load.call(()), Err("not ready"));
/// assert_eq!(load.call(()), Ok(2));
/// assert_eq!(load.call(()), Ok(2));
/// assert_eq!(attempts.get(), 2);
/// ```
pub fn try_once<A, R, E, F>(function: F) -> TryOnce<A, R, E, F>
where
    F: FnMut(A) -> Result<R, E>,
    R: Clone,
{
    TryOnce {
        state: Mutex::new(OnceState::Pending(function)),
        _signature: PhantomData,
    }
}

impl<A, R, E, F> TryOnce<A, R, E, F>
where
    F: FnMut(A) -> Result<R, E>,
    R: Clone,
{
    /// Runs the function until it first succeeds, then returns the cached
    /// success.
    ///
    /// # Errors
    ///
    /// Returns the function's own error when it fails; the wrapper stays
    /// un-run.
    pub fn call(&self, arguments: A) -> Result<R, E> {
        let mut state = self.state.lock();
        match &mut *state {
            OnceState::Ran(value) => Ok(value.clone()),
            OnceState::Pending(function) => {
                let value = function(arguments).inspect_err(|_| {
                    tracing::debug!("once wrapper failed; it will run again on the next call");
                })?;
                *state = OnceState::Ran(value.clone());
                tracing::debug!("once wrapper ran");
                Ok(value)
            }
        }
    }
}

impl<A, R, E, F> TryOnce<A, R, E, F>
where
    R: Clone,
{
    /// Returns the cached success without running the function.
    pub fn get(&self) -> Option<R> {
        match &*self.state.lock() {
            OnceState::Ran(value) => Some(value.clone()),
            OnceState::Pending(_) => None,
        }
    }
}

impl<A, R, E, F> TryOnce<A, R, E, F> {
    /// Returns whether the function has succeeded once.
    pub fn has_run(&self) -> bool {
        self.state.lock().has_run()
    }
}

impl<A, R, E, F> fmt::Debug for TryOnce<A, R, E, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryOnce")
            .field("has_run", &self.has_run())
            .finish_non_exhaustive()
    }
}
