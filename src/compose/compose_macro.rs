//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// The rightmost function receives the input; each other function receives
/// the previous result as its only argument. A head that needs several
/// arguments takes them as one tuple.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!()` - [`identity`](crate::compose::identity): the input is returned unchanged
/// - `compose!(f)` - `f` itself
/// - `compose!(f, g)` - `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - any number of functions
///
/// # Errors
///
/// The composed function adds no error handling of its own: a function that
/// returns `Result` hands its `Result` to the next function unchanged. Use
/// [`try_compose`](crate::compose::try_compose) to stop at the first `Err`.
///
/// # Examples
///
/// ```
/// use fnutils::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // double(add_one(3)) = 8
/// let composed = compose!(double, add_one);
/// assert_eq!(composed(3), 8);
/// ```
///
/// ## Type conversion
///
/// ```
/// use fnutils::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = compose!(get_length, to_string);
/// assert_eq!(digits(12345), 5);
/// ```
///
/// ## Multi-argument head
///
/// ```
/// use fnutils::compose;
///
/// let add = |(left, right): (i32, i32)| left + right;
/// let negate = |x: i32| -x;
///
/// let negated_sum = compose!(negate, add);
/// assert_eq!(negated_sum((2, 3)), -5);
/// ```
///
/// ## Zero functions
///
/// ```
/// use fnutils::compose;
///
/// let unchanged = compose!();
/// assert_eq!(unchanged("input"), "input");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
