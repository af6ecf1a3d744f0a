//! The `partial!` macro for partial function application.
//!
//! The macro walks its argument list one entry at a time. Each `__` becomes
//! a parameter of the returned closure and every other entry becomes a value
//! bound once and cloned into each call. Identifiers introduced at each step
//! are kept apart by macro hygiene, so any number of arguments is supported.

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) as a placeholder for arguments that should
/// remain as parameters in the resulting function. The returned closure
/// calls the function immediately every time it is called.
///
/// **Important**: Do NOT import `fnutils::compose::__`. The `__` is
/// matched as a literal token by the macro.
///
/// # Syntax
///
/// For a 3-argument function `f(a, b, c)`:
/// - `partial!(f, x, __, __)` creates `|b, c| f(x, b, c)`
/// - `partial!(f, __, y, __)` creates `|a, c| f(a, y, c)`
/// - `partial!(f, x, y, z)` creates `|| f(x, y, z)` (thunk)
///
/// Bound values are evaluated once, when the macro runs.
///
/// # Type Requirements
///
/// - Bound values must implement [`Clone`] (the closure may be called many times)
///
/// # Examples
///
/// ```
/// use fnutils::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Fixing a middle argument
///
/// ```
/// use fnutils::partial;
///
/// fn format_greeting(greeting: &str, name: &str, punctuation: &str) -> String {
///     format!("{}, {}{}", greeting, name, punctuation)
/// }
///
/// let hello = partial!(format_greeting, "Hello", __, __);
/// assert_eq!(hello("Alice", "!"), "Hello, Alice!");
///
/// let exclaim = partial!(format_greeting, __, "Bob", "!");
/// assert_eq!(exclaim("Hi"), "Hi, Bob!");
/// ```
///
/// ## Creating a thunk
///
/// ```
/// use fnutils::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let thunk = partial!(add, 3, 5);
/// assert_eq!(thunk(), 8);
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr $(, $($arguments:tt)*)?) => {
        $crate::__partial_step!(
            function = [$function];
            parameters = [];
            bindings = [];
            call = [];
            rest = [$($($arguments)*)?]
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __partial_step {
    // Every argument consumed: build the closure.
    (
        function = [$function:expr];
        parameters = [$($parameter:ident)*];
        bindings = [$($binding:ident = $value:expr;)*];
        call = [$($call:expr,)*];
        rest = []
    ) => {{
        let function = $function;
        $(let $binding = $value;)*
        move |$($parameter),*| function($($call),*)
    }};

    // A placeholder: the closure takes this argument.
    (
        function = [$function:expr];
        parameters = [$($parameter:ident)*];
        bindings = [$($binding:ident = $value:expr;)*];
        call = [$($call:expr,)*];
        rest = [__ $(, $($rest:tt)*)?]
    ) => {
        $crate::__partial_step!(
            function = [$function];
            parameters = [$($parameter)* argument];
            bindings = [$($binding = $value;)*];
            call = [$($call,)* argument,];
            rest = [$($($rest)*)?]
        )
    };

    // A bound value: evaluated once, cloned into every call.
    (
        function = [$function:expr];
        parameters = [$($parameter:ident)*];
        bindings = [$($binding:ident = $value:expr;)*];
        call = [$($call:expr,)*];
        rest = [$next:expr $(, $($rest:tt)*)?]
    ) => {
        $crate::__partial_step!(
            function = [$function];
            parameters = [$($parameter)*];
            bindings = [$($binding = $value;)* bound = $next;];
            call = [$($call,)* ::std::clone::Clone::clone(&bound),];
            rest = [$($($rest)*)?]
        )
    };
}
