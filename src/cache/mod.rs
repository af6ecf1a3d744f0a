//! Result caching.
//!
//! [`memoize`] wraps a function with a cache keyed by the serialized form of
//! its arguments ([`CacheKey`]). Serialization is an approximation of
//! equality: arguments that serialize identically are treated as the same
//! call.
//!
//! # Examples
//!
//! ```rust
//! use fnutils::cache::memoize;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Query {
//!     table: &'static str,
//!     limit: usize,
//! }
//!
//! let plan = memoize(|query: Query| format!("scan {} limit {}", query.table, query.limit));
//!
//! let first = plan.call(Query { table: "users", limit: 10 }).unwrap();
//! let second = plan.call(Query { table: "users", limit: 10 }).unwrap();
//! assert_eq!(first, second);
//! assert_eq!(plan.len(), 1);
//! ```
//!
//! # Limitations
//!
//! The cache is unbounded: nothing is evicted unless the caller clears it.

mod depth;
mod error;
mod key;
mod memoize;

pub use error::SerializationError;
pub use key::CacheKey;
pub use memoize::{Memoized, memoize};
