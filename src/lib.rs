//! # fnutils
//!
//! Higher-order function utilities for Rust.
//!
//! ## Overview
//!
//! Every utility wraps a function (or a value) and returns a new one. No
//! utility depends on another:
//!
//! - **Timing Control**: [`debounce`](timing::debounce), [`throttle`](timing::throttle),
//!   [`once`](timing::once), driven by a pluggable [`Scheduler`](timing::Scheduler)
//! - **Result Caching**: [`memoize`](cache::memoize) keyed by serialized arguments
//! - **Arity Transformation**: [`curry`](compose::curry), [`curry_n`](compose::curry_n),
//!   [`partial`](compose::partial) and the `partial!` macro
//! - **Composition**: `pipe!`, `compose!` and their dynamic counterparts
//! - **Shaping**: [`pick`](shape::pick), [`omit`](shape::omit), [`zip`](shape::zip)
//!
//! ## Feature Flags
//!
//! - `timing`: debounce, throttle, once and the manual scheduler
//! - `async`: a tokio backed scheduler
//! - `cache`: memoize
//! - `compose`: curry, partial, pipe, compose
//! - `shape`: pick, omit, zip
//! - `serde`: `serde_json::Map` / `Value` support for pick and omit
//! - `fxhash` / `ahash`: faster hashers for the memoize cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnutils::prelude::*;
//!
//! let scheduler = ManualScheduler::new();
//! let log = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
//! let sink = std::sync::Arc::clone(&log);
//! let search = debounce(
//!     move |query: &'static str| sink.lock().unwrap().push(query),
//!     std::time::Duration::from_millis(50),
//!     scheduler.clone(),
//! );
//!
//! search.call("r");
//! search.call("ru");
//! search.call("rust");
//! scheduler.advance(std::time::Duration::from_millis(50));
//! assert_eq!(*log.lock().unwrap(), vec!["rust"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled utility.
///
/// # Usage
///
/// ```rust
/// use fnutils::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "timing")]
    pub use crate::timing::*;

    #[cfg(feature = "cache")]
    pub use crate::cache::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "shape")]
    pub use crate::shape::*;
}

#[cfg(feature = "timing")]
pub mod timing;

#[cfg(feature = "cache")]
pub mod cache;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "shape")]
pub mod shape;
