//! Function composition utilities.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`pipe!`]: Compose functions left-to-right (data flow style)
//! - [`compose()`] / [`pipe()`]: the same over a list of functions built at runtime
//! - [`try_compose`] / [`try_pipe`]: runtime lists of fallible steps that stop at the first error
//! - [`curry`] / [`curry_n`]: Convert multi-argument functions to curried form
//! - [`partial!`] / [`partial()`]: Fix some arguments of a function
//! - [`identity`]: The identity function - returns its argument unchanged
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use fnutils::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use fnutils::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(f, g)(x) = g(f(x))
//! let piped = pipe!(double, add_one);
//! assert_eq!(piped(5), 11);
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use fnutils::partial;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! // Note: Do NOT import __ - it is matched as a literal token by the macro.
//! let add_five = partial!(add, 5, __);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! ## Currying
//!
//! ```
//! use fnutils::compose::curry;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_five = curry(add)(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! x |> f |> g |> h = h(g(f(x)))
//! curry(f)(a)(b)(c) = f(a, b, c)
//! partial(f, a, _)(b) = f(a, b)
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`

mod compose_macro;
mod curry;
mod partial;
mod partial_macro;
mod pipe_macro;
mod pipeline;
mod utils;

pub use curry::{Curried, Curried2, Curried3, Curried4, Curry, IntoCurried, curry, curry_n};
pub use partial::partial;
pub use pipeline::{Step, TryStep, compose, pipe, try_compose, try_pipe};
pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::partial;
pub use crate::pipe;
