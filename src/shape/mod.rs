//! Reshaping maps and sequences.
//!
//! - [`pick`] / [`omit`]: project a map onto a subset of its keys, or onto
//!   everything but that subset
//! - [`zip`] / [`zip2`]: align sequences by index, padding to the longest
//!
//! `pick` and `omit` work on any [`Mapping`]: [`HashMap`](std::collections::HashMap),
//! [`BTreeMap`](std::collections::BTreeMap), and with the `serde` feature
//! `serde_json::Map`. The `serde` feature also adds `pick_value` and
//! `omit_value` for `serde_json::Value`.
//!
//! # Laws
//!
//! For any map `m` and keys `k`, `pick(m, k)` and `omit(m, k)` share no key
//! and their union is `m`.
//!
//! ```
//! use std::collections::HashMap;
//! use fnutils::shape::{omit, pick};
//!
//! let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
//! let picked = pick(&map, &["a", "c"]);
//! let omitted = omit(&map, &["a", "c"]);
//!
//! assert_eq!(picked, HashMap::from([("a", 1), ("c", 3)]));
//! assert_eq!(omitted, HashMap::from([("b", 2)]));
//!
//! let rebuilt: HashMap<_, _> = picked.into_iter().chain(omitted).collect();
//! assert_eq!(rebuilt, map);
//! ```

mod mapping;
mod omit;
mod pick;
mod zip;

pub use mapping::Mapping;
#[cfg(feature = "serde")]
pub use omit::omit_value;
pub use omit::omit;
#[cfg(feature = "serde")]
pub use pick::pick_value;
pub use pick::pick;
pub use zip::{zip, zip2};
