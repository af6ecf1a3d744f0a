/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// `compose!()` and `pipe!()` with no functions expand to it.
///
/// # Examples
///
/// ```
/// use fnutils::compose::identity;
/// use fnutils::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
///
/// let composed = compose!(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
