//! The runtime curry engine.
//!
//! [`func`] and [`func_with_arity`] turn a function into a [`Curried`]
//! value that accepts its arguments in any grouping. Each call either
//! saturates the arity and invokes the target, or produces a new
//! [`Curried`] with the supplied arguments bound.
//!
//! ```text
//! func(f, 3).call([a]).call([b]).call([c])
//! func(f, 3).call([a, b]).call([c])
//! func(f, 3).call([a, b, c])            // all equal f(a, b, c)
//! ```
//!
//! The target is only ever invoked once enough arguments have accumulated.
//! Surplus arguments are passed through to it unchanged.

use std::fmt;
use std::rc::Rc;

use super::function::{Function, IntoFunction};

/// Errors raised when chaining calls through an [`Application`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CurryError {
    /// More arguments were applied after the target already produced its result.
    #[error("curried function already produced its result; cannot apply {supplied} more argument(s)")]
    Saturated {
        /// Number of arguments in the rejected call.
        supplied: usize,
    },
    /// A result was requested while arguments were still missing.
    #[error("curried function still awaits {remaining} argument(s)")]
    Unsaturated {
        /// Number of arguments still required.
        remaining: usize,
    },
}

/// A function awaiting the rest of its arguments.
///
/// Holds the target, the number of arguments still required, and the
/// arguments bound so far. Every partial application creates a fresh
/// `Curried`; siblings derived from the same value are independent.
pub struct Curried<A, R> {
    target: Function<A, R>,
    remaining: usize,
    bound: Rc<[A]>,
}

/// The outcome of calling a [`Curried`] function.
#[derive(Debug)]
pub enum Application<A, R> {
    /// Not enough arguments yet; holds the partially applied function.
    Partial(Curried<A, R>),
    /// The target was invoked; holds its result.
    Complete(R),
}

/// Curries a fixed-arity closure using its declared parameter count.
///
/// # Examples
///
/// ```
/// use pointfree::compose::func;
///
/// let describe = func(|x: i32, y: i32| format!("{x}, {y}"));
/// let result = describe.apply(1).apply(2).unwrap().into_result().unwrap();
/// assert_eq!(result, "1, 2");
/// ```
pub fn func<A, R, M, F>(function: F) -> Curried<A, R>
where
    F: IntoFunction<A, R, M>,
{
    Curried::new(F::ARITY, function.into_function())
}

/// Curries a variadic function with an explicitly supplied arity.
///
/// The target receives every argument supplied across all calls, including
/// any beyond `arity`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::func_with_arity;
///
/// let sum = func_with_arity(3, |values: Vec<i32>| values.iter().sum::<i32>());
/// let partial = sum.call([1, 2]).partial().unwrap();
/// assert_eq!(partial.call([3, 4]).complete(), Some(10));
/// ```
pub fn func_with_arity<A, R, F>(arity: usize, function: F) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + 'static,
{
    Curried::new(arity, Function::new(function))
}

impl<A, R> Curried<A, R> {
    /// Creates a curried function with no arguments bound yet.
    ///
    /// Use this to curry an existing [`Function`]. The target is invoked
    /// once `arity` arguments have been supplied, or [`Function::arity`]
    /// arguments if that is larger, so a fixed-arity target is never called
    /// short of arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::compose::{Curried, IntoFunction};
    ///
    /// let add = Curried::new(1, (|x: i32, y: i32| x + y).into_function());
    /// assert_eq!(add.arity(), 2);
    /// assert_eq!(add.apply(1).apply(2).unwrap().complete(), Some(3));
    /// ```
    pub fn new(arity: usize, target: Function<A, R>) -> Self {
        let remaining = arity.max(target.arity());
        if remaining > arity {
            tracing::trace!(
                target: "pointfree::curry",
                requested = arity,
                declared = remaining,
                "raising arity to the target's declared arity"
            );
        }
        Self {
            target,
            remaining,
            bound: Rc::from(Vec::new()),
        }
    }

    /// The number of arguments still required before the target runs.
    pub const fn arity(&self) -> usize {
        self.remaining
    }

    /// The arguments bound so far, in application order.
    pub fn bound(&self) -> &[A] {
        &self.bound
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Supplies any number of arguments.
    ///
    /// Invokes the target with all bound and supplied arguments once their
    /// count reaches the arity; otherwise returns a new partial application.
    /// A call with no arguments on a function of arity 0 invokes it.
    pub fn call<I>(&self, arguments: I) -> Application<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let supplied: Vec<A> = arguments.into_iter().collect();
        let count = supplied.len();

        let mut accumulated = Vec::with_capacity(self.bound.len() + count);
        accumulated.extend(self.bound.iter().cloned());
        accumulated.extend(supplied);

        if count >= self.remaining {
            tracing::trace!(
                target: "pointfree::curry",
                arguments = accumulated.len(),
                surplus = count - self.remaining,
                "invoking curried target"
            );
            Application::Complete(self.target.call(accumulated))
        } else {
            let remaining = self.remaining - count;
            tracing::trace!(
                target: "pointfree::curry",
                bound = accumulated.len(),
                remaining,
                "partial application"
            );
            Application::Partial(Self {
                target: self.target.clone(),
                remaining,
                bound: accumulated.into(),
            })
        }
    }

    /// Supplies a single argument.
    pub fn apply(&self, argument: A) -> Application<A, R> {
        self.call([argument])
    }

    /// Converts the remaining arguments into a plain [`Function`].
    ///
    /// The result has [`Function::arity`] equal to [`arity`](Self::arity),
    /// which makes a curried function with one missing argument usable as a
    /// pipeline stage.
    ///
    /// # Panics
    ///
    /// The returned function panics when called with fewer arguments than
    /// its arity.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::compose::{Function, func, pipe};
    ///
    /// let scale = func(|factor: i32, value: i32| factor * value);
    /// let triple = scale.apply(3).partial().unwrap().into_function();
    ///
    /// let increment = Function::new(|values: Vec<i32>| values[0] + 1);
    /// assert_eq!(pipe([increment, triple]).run([1]), Some(6));
    /// ```
    #[must_use]
    pub fn into_function(self) -> Function<A, R>
    where
        A: 'static,
        R: 'static,
    {
        let arity = self.remaining;
        Function::with_arity(arity, move |arguments: Vec<A>| {
            let supplied = arguments.len();
            match self.call(arguments) {
                Application::Complete(value) => value,
                Application::Partial(curried) => panic!(
                    "curried function called with {supplied} argument(s); {} still missing",
                    curried.remaining
                ),
            }
        })
    }
}

impl<A, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            remaining: self.remaining,
            bound: Rc::clone(&self.bound),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("remaining", &self.remaining)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Curried<String, String>: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(Curried<i32, i32>: Send, Sync);

impl<A, R> Application<A, R> {
    /// Returns `true` once the target has been invoked.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The result, if the target has been invoked.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Partial(_) => None,
        }
    }

    /// The partially applied function, if arguments are still missing.
    pub fn partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// The result, or how many arguments are still missing.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::Unsaturated`] for a partial application.
    pub fn into_result(self) -> Result<R, CurryError> {
        match self {
            Self::Complete(value) => Ok(value),
            Self::Partial(curried) => Err(CurryError::Unsaturated {
                remaining: curried.remaining,
            }),
        }
    }
}

impl<A: Clone, R> Application<A, R> {
    /// Continues a partial application with more arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::Saturated`] if the target already ran.
    pub fn call<I>(self, arguments: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Partial(curried) => Ok(curried.call(arguments)),
            Self::Complete(_) => Err(CurryError::Saturated {
                supplied: arguments.into_iter().count(),
            }),
        }
    }

    /// Continues a partial application with a single argument.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::Saturated`] if the target already ran.
    pub fn apply(self, argument: A) -> Result<Self, CurryError> {
        self.call([argument])
    }
}
