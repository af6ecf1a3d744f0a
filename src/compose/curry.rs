//! Currying.
//!
//! Two forms are provided:
//!
//! - [`curry`]: the arity is the declared parameter count of the function
//!   (2 to 4). The result is a chain of single-argument closures, checked at
//!   compile time.
//! - [`curry_n`]: the arity is a runtime value and the function takes its
//!   arguments as a `Vec`. Each application may supply any number of
//!   arguments; the function runs once enough have accumulated.
//!
//! # Design Decisions
//!
//! Both forms share the wrapped function through `Rc`, so a partially
//! applied chain can be called any number of times. Arguments captured by an
//! intermediate step are cloned on each call.

use std::fmt;
use std::rc::Rc;

/// Curried form of a 2-argument function.
pub type Curried2<A, B, R> = Box<dyn Fn(A) -> Box<dyn Fn(B) -> R>>;

/// Curried form of a 3-argument function.
pub type Curried3<A, B, C, R> = Box<dyn Fn(A) -> Curried2<B, C, R>>;

/// Curried form of a 4-argument function.
pub type Curried4<A, B, C, D, R> = Box<dyn Fn(A) -> Curried3<B, C, D, R>>;

/// Functions that can be curried according to their parameter list.
///
/// `Arguments` is the parameter tuple; it only serves to tell the
/// implementations for different arities apart and is inferred.
pub trait IntoCurried<Arguments> {
    /// The curried chain of closures.
    type Curried;

    /// Converts the function into its curried form.
    fn into_curried(self) -> Self::Curried;
}

impl<F, A, B, R> IntoCurried<(A, B)> for F
where
    F: Fn(A, B) -> R + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    type Curried = Curried2<A, B, R>;

    fn into_curried(self) -> Self::Curried {
        let function = Rc::new(self);
        Box::new(move |first: A| -> Box<dyn Fn(B) -> R> {
            let function = Rc::clone(&function);
            Box::new(move |second: B| function(first.clone(), second))
        })
    }
}

impl<F, A, B, C, R> IntoCurried<(A, B, C)> for F
where
    F: Fn(A, B, C) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    type Curried = Curried3<A, B, C, R>;

    fn into_curried(self) -> Self::Curried {
        let function = Rc::new(self);
        Box::new(move |first: A| -> Curried2<B, C, R> {
            let function = Rc::clone(&function);
            Box::new(move |second: B| -> Box<dyn Fn(C) -> R> {
                let function = Rc::clone(&function);
                let first = first.clone();
                Box::new(move |third: C| function(first.clone(), second.clone(), third))
            })
        })
    }
}

impl<F, A, B, C, D, R> IntoCurried<(A, B, C, D)> for F
where
    F: Fn(A, B, C, D) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    R: 'static,
{
    type Curried = Curried4<A, B, C, D, R>;

    fn into_curried(self) -> Self::Curried {
        let function = Rc::new(self);
        Box::new(move |first: A| -> Curried3<B, C, D, R> {
            let function = Rc::clone(&function);
            Box::new(move |second: B| -> Curried2<C, D, R> {
                let function = Rc::clone(&function);
                let first = first.clone();
                Box::new(move |third: C| -> Box<dyn Fn(D) -> R> {
                    let function = Rc::clone(&function);
                    let first = first.clone();
                    let second = second.clone();
                    Box::new(move |fourth: D| {
                        function(first.clone(), second.clone(), third.clone(), fourth)
                    })
                })
            })
        })
    }
}

/// Converts a function into a chain of single-argument closures.
///
/// The arity is the function's declared parameter count. Closures need
/// annotated parameter types so that the arity can be inferred.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`] and be `'static`
/// - Every argument type except the last must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use fnutils::compose::curry;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry(add_three);
/// assert_eq!(curried(1)(2)(3), 6);
///
/// // Partial applications are reusable
/// let add_to_three = curried(1)(2);
/// assert_eq!(add_to_three(10), 13);
/// assert_eq!(add_to_three(20), 23);
/// ```
///
/// ## Closures
///
/// ```
/// use fnutils::compose::curry;
///
/// let greet = curry(|greeting: String, name: &'static str| format!("{greeting}, {name}!"));
/// let hello = greet("Hello".to_string());
/// assert_eq!(hello("Ferris"), "Hello, Ferris!");
/// ```
pub fn curry<F, Arguments>(function: F) -> F::Curried
where
    F: IntoCurried<Arguments>,
{
    function.into_curried()
}

/// A function waiting for more arguments.
///
/// Created by [`curry_n`]; applying arguments with
/// [`apply`](Curried::apply) yields a [`Curry`].
pub struct Curried<A, R> {
    function: Rc<dyn Fn(Vec<A>) -> R>,
    arity: usize,
    accumulated: Vec<A>,
}

/// The outcome of applying arguments to a [`Curried`] function.
#[derive(Debug)]
pub enum Curry<A, R> {
    /// Enough arguments were supplied; this is the function's result.
    Ready(R),
    /// More arguments are needed.
    Pending(Curried<A, R>),
}

/// Curries a function over a runtime arity.
///
/// `function` receives every accumulated argument in call order once at
/// least `arity` arguments have been supplied. Arguments beyond the arity
/// are passed through rather than dropped. An arity of zero runs the
/// function on the first application.
///
/// # Examples
///
/// ```
/// use fnutils::compose::{Curry, curry_n};
///
/// let sum = curry_n(|values: Vec<i32>| values.iter().sum::<i32>(), 3);
///
/// assert!(matches!(sum.apply([1, 2, 3]), Curry::Ready(6)));
///
/// let Curry::Pending(add_to_one) = sum.apply([1]) else { unreachable!() };
/// assert_eq!(add_to_one.remaining(), 2);
/// assert!(matches!(add_to_one.apply([2, 3]), Curry::Ready(6)));
/// ```
pub fn curry_n<A, R, F>(function: F, arity: usize) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + 'static,
{
    Curried {
        function: Rc::new(function),
        arity,
        accumulated: Vec::new(),
    }
}

impl<A, R> Curried<A, R>
where
    A: Clone,
{
    /// Adds `arguments` to the ones accumulated so far.
    ///
    /// Runs the function and returns [`Curry::Ready`] once the arity is
    /// reached; otherwise returns a new [`Curried`] holding the longer
    /// argument list. `self` is left untouched and can be applied again.
    pub fn apply(&self, arguments: impl IntoIterator<Item = A>) -> Curry<A, R> {
        let mut accumulated = self.accumulated.clone();
        accumulated.extend(arguments);

        if accumulated.len() >= self.arity {
            Curry::Ready((self.function)(accumulated))
        } else {
            Curry::Pending(Self {
                function: Rc::clone(&self.function),
                arity: self.arity,
                accumulated,
            })
        }
    }
}

impl<A, R> Curried<A, R> {
    /// Returns the number of arguments the function needs in total.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the arguments supplied so far.
    #[inline]
    pub fn accumulated(&self) -> &[A] {
        &self.accumulated
    }

    /// Returns how many more arguments are needed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.accumulated.len())
    }
}

impl<A, R> Clone for Curried<A, R>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            accumulated: self.accumulated.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("accumulated", &self.accumulated.len())
            .finish_non_exhaustive()
    }
}

impl<A, R> Curry<A, R> {
    /// Returns the result if the function ran.
    pub fn ready(self) -> Option<R> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending(_) => None,
        }
    }

    /// Returns the waiting function if more arguments are needed.
    pub fn pending(self) -> Option<Curried<A, R>> {
        match self {
            Self::Ready(_) => None,
            Self::Pending(curried) => Some(curried),
        }
    }

    /// Returns whether the function ran.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
