//! Timing control wrappers.
//!
//! These wrappers change *when* and *how often* a function runs:
//!
//! - [`debounce`]: run once calls stop arriving, with the last arguments
//! - [`throttle`]: run at most once per window, with the first arguments
//! - [`once`] / [`try_once`]: run once for the lifetime of the wrapper
//!
//! `debounce` and `throttle` defer work through a [`Scheduler`]. The
//! [`ManualScheduler`] drives a virtual clock; with the `async` feature the
//! [`TokioScheduler`] uses tokio timers instead.
//!
//! # Examples
//!
//! ## Debounce vs throttle
//!
//! ```rust
//! use fnutils::timing::{ManualScheduler, debounce, throttle};
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let trailing = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&trailing);
//!
//! let debounced = debounce(
//!     move |value: u32| sink.lock().unwrap().push(value),
//!     Duration::from_millis(50),
//!     scheduler.clone(),
//! );
//! let throttled = throttle(|value: u32| value, Duration::from_millis(50), scheduler.clone());
//!
//! let mut leading = Vec::new();
//! for value in [1, 2, 3] {
//!     debounced.call(value);
//!     leading.extend(throttled.call(value));
//!     scheduler.advance(Duration::from_millis(10));
//! }
//! scheduler.advance(Duration::from_millis(50));
//!
//! assert_eq!(leading, vec![1]);
//! assert_eq!(*trailing.lock().unwrap(), vec![3]);
//! ```
//!
//! ## Thread safety
//!
//! Wrapper state sits behind a mutex: "cancel previous / schedule next" for
//! debounce and the cooldown check for throttle are atomic with respect to
//! concurrent callers.

mod debounce;
mod once;
mod scheduler;
mod throttle;
#[cfg(feature = "async")]
mod tokio_scheduler;

pub use debounce::{Debounced, debounce};
pub use once::{Once, TryOnce, once, try_once};
pub use scheduler::{ManualHandle, ManualScheduler, Scheduler, Task};
pub use throttle::{Throttled, throttle};
#[cfg(feature = "async")]
pub use tokio_scheduler::TokioScheduler;
