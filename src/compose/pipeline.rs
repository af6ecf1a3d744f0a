//! Composition over a runtime-sized list of functions.
//!
//! [`pipe!`](crate::pipe!) and [`compose!`](crate::compose!) are fixed at
//! compile time and allow every step to change the value's type. The
//! functions here take a list built at runtime instead, so every step maps
//! `T` to `T`.

/// A boxed step of a runtime-built pipeline.
pub type Step<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// A boxed fallible step of a runtime-built pipeline.
pub type TryStep<'a, T, E> = Box<dyn Fn(T) -> Result<T, E> + 'a>;

/// Chains `functions` from left to right.
///
/// An empty list yields a function that returns its input unchanged.
///
/// # Examples
///
/// ```
/// use fnutils::compose::{Step, pipe};
///
/// let steps: Vec<Step<'_, i32>> = vec![Box::new(|x: i32| x * 2), Box::new(|x: i32| x + 1)];
/// let piped = pipe(steps);
/// assert_eq!(piped(3), 7);
///
/// let empty = pipe(Vec::<Step<'_, i32>>::new());
/// assert_eq!(empty(3), 3);
/// ```
pub fn pipe<'a, T>(functions: impl IntoIterator<Item = Step<'a, T>>) -> impl Fn(T) -> T + 'a
where
    T: 'a,
{
    let functions: Vec<Step<'a, T>> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .fold(input, |value, function| function(value))
    }
}

/// Chains `functions` from right to left.
///
/// An empty list yields a function that returns its input unchanged.
///
/// # Examples
///
/// ```
/// use fnutils::compose::{Step, compose};
///
/// let steps: Vec<Step<'_, i32>> = vec![Box::new(|x: i32| x * 2), Box::new(|x: i32| x + 1)];
/// let composed = compose(steps);
/// assert_eq!(composed(3), 8);
/// ```
pub fn compose<'a, T>(functions: impl IntoIterator<Item = Step<'a, T>>) -> impl Fn(T) -> T + 'a
where
    T: 'a,
{
    let functions: Vec<Step<'a, T>> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |value, function| function(value))
    }
}

/// Chains fallible `functions` from left to right, stopping at the first
/// error.
///
/// The error is returned exactly as the failing function produced it.
///
/// # Examples
///
/// ```
/// use fnutils::compose::{TryStep, try_pipe};
///
/// let steps: Vec<TryStep<'_, u32, &str>> = vec![
///     Box::new(|x: u32| x.checked_sub(10).ok_or("underflow")),
///     Box::new(|x: u32| x.checked_mul(2).ok_or("overflow")),
/// ];
/// let piped = try_pipe(steps);
///
/// assert_eq!(piped(15), Ok(10));
/// assert_eq!(piped(5), Err("underflow"));
/// ```
pub fn try_pipe<'a, T, E>(
    functions: impl IntoIterator<Item = TryStep<'a, T, E>>,
) -> impl Fn(T) -> Result<T, E> + 'a
where
    T: 'a,
    E: 'a,
{
    let functions: Vec<TryStep<'a, T, E>> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .try_fold(input, |value, function| function(value))
    }
}

/// Chains fallible `functions` from right to left, stopping at the first
/// error.
///
/// # Examples
///
/// ```
/// use fnutils::compose::{TryStep, try_compose};
///
/// let steps: Vec<TryStep<'_, u32, &str>> = vec![
///     Box::new(|x: u32| x.checked_sub(10).ok_or("underflow")),
///     Box::new(|x: u32| x.checked_mul(2).ok_or("overflow")),
/// ];
/// let composed = try_compose(steps);
///
/// assert_eq!(composed(5), Ok(0));
/// assert_eq!(composed(4), Err("underflow"));
/// ```
pub fn try_compose<'a, T, E>(
    functions: impl IntoIterator<Item = TryStep<'a, T, E>>,
) -> impl Fn(T) -> Result<T, E> + 'a
where
    T: 'a,
    E: 'a,
{
    let functions: Vec<TryStep<'a, T, E>> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .rev()
            .try_fold(input, |value, function| function(value))
    }
}
