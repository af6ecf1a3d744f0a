//! Result caching keyed by serialized arguments.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use parking_lot::Mutex;
use serde::Serialize;

use super::error::SerializationError;
use super::key::CacheKey;

/// Hasher used by the result cache.
///
/// `fxhash` takes precedence over `ahash` when both features are enabled.
#[cfg(feature = "fxhash")]
type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type KeyHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type KeyHasher = std::collections::hash_map::RandomState;

/// A function whose results are cached per distinct argument value.
///
/// Created by [`memoize`]. The cache grows for the lifetime of the wrapper
/// and is never evicted on its own; [`clear`](Memoized::clear) empties it on
/// request.
pub struct Memoized<A, R, F> {
    function: F,
    cache: Mutex<HashMap<CacheKey, R, KeyHasher>>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs at most once per distinct argument value.
///
/// Arguments are keyed through [`CacheKey::derive`]; multi-argument
/// functions take their arguments as a tuple, which keeps keys
/// order-sensitive.
///
/// # Examples
///
/// ```rust
/// use fnutils::cache::memoize;
/// use std::cell::Cell;
///
/// let evaluations = Cell::new(0);
/// let distance = memoize(|(x, y): (i64, i64)| {
///     evaluations.set(evaluations.get() + 1);
///     x.abs() + y.abs()
/// });
///
/// assert_eq!(distance.call((3, -4)).unwrap(), 7);
/// assert_eq!(distance.call((3, -4)).unwrap(), 7);
/// assert_eq!(evaluations.get(), 1);
///
/// assert_eq!(distance.call((-4, 3)).unwrap(), 7);
/// assert_eq!(evaluations.get(), 2);
/// ```
pub fn memoize<A, R, F>(function: F) -> Memoized<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoized {
        function,
        cache: Mutex::new(HashMap::default()),
        _arguments: PhantomData,
    }
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Returns the cached result for `arguments`, computing it on a miss.
    ///
    /// The cache stays locked while the function runs, so concurrent callers
    /// with the same arguments never run it twice. Calling the same wrapper
    /// from inside the wrapped function deadlocks.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] when `arguments` cannot be turned into
    /// a key. The function is not run in that case.
    pub fn call(&self, arguments: A) -> Result<R, SerializationError> {
        let key = CacheKey::derive(&arguments)?;
        let mut cache = self.cache.lock();

        if let Some(value) = cache.get(&key) {
            tracing::trace!(%key, "memoize cache hit");
            return Ok(value.clone());
        }

        tracing::trace!(%key, "memoize cache miss");
        let value = (self.function)(arguments);
        cache.insert(key, value.clone());
        Ok(value)
    }
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Serialize,
{
    /// Returns whether a result is cached for `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] when `arguments` cannot be turned into
    /// a key.
    pub fn contains(&self, arguments: &A) -> Result<bool, SerializationError> {
        let key = CacheKey::derive(arguments)?;
        Ok(self.cache.lock().contains_key(&key))
    }
}

impl<A, R, F> Memoized<A, R, F> {
    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        tracing::debug!(entries = cache.len(), "memoize cache cleared");
        cache.clear();
    }
}

impl<A, R, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Memoized<u32, u32, fn(u32) -> u32>: Send, Sync);
