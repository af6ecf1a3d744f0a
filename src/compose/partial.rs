//! Partial application over a runtime argument list.
//!
//! [`partial!`](crate::partial!) fixes arguments of a function with a
//! declared parameter list. [`partial`] is its counterpart for functions that
//! take their arguments as a `Vec`, such as the ones used with
//! [`curry_n`](crate::compose::curry_n).

/// Binds leading arguments of `function`.
///
/// Every call of the returned function invokes `function` immediately with
/// the bound arguments followed by the arguments of that call. The bound
/// arguments are cloned on each call.
///
/// # Examples
///
/// ```
/// use fnutils::compose::partial;
///
/// let join = |parts: Vec<&str>| parts.join("/");
/// let under_home = partial(join, vec!["home", "ferris"]);
///
/// assert_eq!(under_home(vec!["projects"]), "home/ferris/projects");
/// assert_eq!(under_home(vec![]), "home/ferris");
/// ```
pub fn partial<A, R, F>(function: F, bound: Vec<A>) -> impl Fn(Vec<A>) -> R
where
    A: Clone,
    F: Fn(Vec<A>) -> R,
{
    move |arguments| {
        let mut all = Vec::with_capacity(bound.len() + arguments.len());
        all.extend(bound.iter().cloned());
        all.extend(arguments);
        function(all)
    }
}
