//! The `pipe!` macro for left-to-right function composition.

/// Chains functions from left to right into a new function.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: the data flows
/// through the functions in the order they are written.
///
/// # Relationship with compose!
///
/// `pipe!(f, g, h)` behaves like `compose!(h, g, f)`.
///
/// # Syntax
///
/// - `pipe!()` - [`identity`](crate::compose::identity)
/// - `pipe!(f)` - `f` itself
/// - `pipe!(f, g)` - `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - any number of functions
///
/// # Examples
///
/// ```
/// use fnutils::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // add_one(double(3)) = 7
/// let piped = pipe!(double, add_one);
/// assert_eq!(piped(3), 7);
/// ```
///
/// ## Errors pass through unchanged
///
/// ```
/// use fnutils::pipe;
///
/// let parse = |text: &str| text.parse::<i32>();
/// let double = |parsed: Result<i32, std::num::ParseIntError>| parsed.map(|x| x * 2);
///
/// let parse_and_double = pipe!(parse, double);
/// assert_eq!(parse_and_double("21"), Ok(42));
/// assert!(parse_and_double("x").is_err());
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use fnutils::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(f, g, h)(10), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    // pipe!(f, g, h, ...) = |x| pipe!(g, h, ...)(f(x))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining_piped = $crate::pipe!($($remaining_functions),+);
        move |input| remaining_piped(first(input))
    }};
}
