//! Shared variadic functions.
//!
//! [`Function`] is the runtime representation every combinator in this
//! crate agrees on: a reference-counted callable that receives its
//! positional arguments as a `Vec`. Fixed-arity closures are converted with
//! [`IntoFunction`], which also reports how many parameters the closure
//! declares.

use std::fmt;
use std::rc::Rc;

/// A cheaply clonable variadic function from a list of `A` to `R`.
///
/// Cloning a `Function` shares the underlying closure.
///
/// A `Function` also records the fewest arguments it needs
/// ([`arity`](Self::arity)): 0 for functions built with [`Function::new`],
/// the declared parameter count for closures converted by [`IntoFunction`].
///
/// # Examples
///
/// ```
/// use pointfree::compose::Function;
///
/// let sum = Function::new(|arguments: Vec<i32>| arguments.iter().sum::<i32>());
/// assert_eq!(sum.call([1, 2, 3]), 6);
/// assert_eq!(sum.call([]), 0);
/// ```
pub struct Function<A, R> {
    inner: Rc<dyn Fn(Vec<A>) -> R>,
    arity: usize,
}

impl<A, R> Function<A, R> {
    /// Wraps a closure that takes its arguments as a `Vec`.
    ///
    /// The closure must accept any number of arguments, including none.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Vec<A>) -> R + 'static,
    {
        Self::with_arity(0, function)
    }

    /// Wraps a closure that reads at least `arity` arguments.
    ///
    /// The curry engine never invokes it with fewer.
    pub fn with_arity<F>(arity: usize, function: F) -> Self
    where
        F: Fn(Vec<A>) -> R + 'static,
    {
        Self {
            inner: Rc::new(function),
            arity,
        }
    }

    /// The fewest arguments this function can be called with.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the function with every supplied argument, in order.
    ///
    /// # Panics
    ///
    /// Panics if fewer than [`arity`](Self::arity) arguments are supplied to
    /// a function converted by [`IntoFunction`].
    pub fn call<I>(&self, arguments: I) -> R
    where
        I: IntoIterator<Item = A>,
    {
        (self.inner)(arguments.into_iter().collect())
    }

    /// Invokes the function with exactly one argument.
    ///
    /// # Panics
    ///
    /// Panics if [`arity`](Self::arity) is greater than 1.
    pub fn call_one(&self, argument: A) -> R {
        (self.inner)(vec![argument])
    }
}

impl<A: 'static, R: 'static> Function<A, R> {
    /// Binds leading arguments.
    ///
    /// The returned function prepends `bound` to whatever it is later called
    /// with. The bound arguments are cloned on every call, so the result can
    /// be invoked repeatedly. The arity drops by the number bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::compose::Function;
    ///
    /// let joined = Function::new(|parts: Vec<&str>| parts.join("-"));
    /// let prefixed = joined.partial(["a", "b"]);
    /// assert_eq!(prefixed.call(["c"]), "a-b-c");
    /// assert_eq!(prefixed.call([]), "a-b");
    /// ```
    #[must_use]
    pub fn partial<I>(&self, bound: I) -> Self
    where
        A: Clone,
        I: IntoIterator<Item = A>,
    {
        let bound: Rc<[A]> = bound.into_iter().collect();
        let target = self.clone();
        Self::with_arity(self.arity.saturating_sub(bound.len()), move |more: Vec<A>| {
            let mut arguments = Vec::with_capacity(bound.len() + more.len());
            arguments.extend(bound.iter().cloned());
            arguments.extend(more);
            target.call(arguments)
        })
    }

    /// Swaps the first two arguments and forwards the rest unchanged.
    ///
    /// Calls with fewer than two arguments are forwarded as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::compose::Function;
    ///
    /// let list = Function::new(|words: Vec<&str>| words.join(" "));
    /// assert_eq!(list.flip().call(["b", "a", "c"]), "a b c");
    /// ```
    #[must_use]
    pub fn flip(&self) -> Self {
        let target = self.clone();
        Self::with_arity(self.arity, move |mut arguments: Vec<A>| {
            if arguments.len() >= 2 {
                arguments.swap(0, 1);
            }
            target.call(arguments)
        })
    }
}

impl<A, R> Clone for Function<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            arity: self.arity,
        }
    }
}

impl<A, R> fmt::Debug for Function<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function(<closure>)")
    }
}

static_assertions::assert_impl_all!(Function<i32, i32>: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(Function<i32, i32>: Send, Sync);

/// Conversion of a fixed-arity closure into a [`Function`].
///
/// Implemented for every `Fn` taking zero to six arguments of the same type
/// `A`. `Marker` only disambiguates the implementations and is always
/// inferred.
///
/// The produced [`Function`] has [`Function::arity`] equal to `ARITY`. It
/// passes the first `ARITY` arguments to the closure and ignores any
/// surplus. [`Curried`](super::Curried) always waits for at least `ARITY`
/// arguments; calling the function directly with fewer panics.
///
/// # Examples
///
/// ```
/// use pointfree::compose::IntoFunction;
///
/// fn arity_of<A, R, M, F: IntoFunction<A, R, M>>(_: &F) -> usize {
///     F::ARITY
/// }
///
/// assert_eq!(arity_of(&|x: i32, y: i32| x + y), 2);
/// assert_eq!(arity_of(&|x: i32, y: i32, z: i32| x + y + z), 3);
/// ```
pub trait IntoFunction<A, R, Marker> {
    /// The number of parameters the closure declares.
    const ARITY: usize;

    /// Wraps the closure as a variadic [`Function`].
    fn into_function(self) -> Function<A, R>;
}

macro_rules! argument_type {
    ($argument:ident) => {
        A
    };
}

macro_rules! impl_into_function {
    ($arity:literal; $($argument:ident),*) => {
        impl<F, A, R> IntoFunction<A, R, fn($(argument_type!($argument)),*) -> R> for F
        where
            F: Fn($(argument_type!($argument)),*) -> R + 'static,
        {
            const ARITY: usize = $arity;

            #[allow(unused_mut, unused_variables)]
            fn into_function(self) -> Function<A, R> {
                Function::with_arity($arity, move |arguments: Vec<A>| {
                    let supplied = arguments.len();
                    let mut arguments = arguments.into_iter();
                    $(
                        let Some($argument) = arguments.next() else {
                            panic!(
                                "function of arity {} called with {} argument(s)",
                                $arity, supplied
                            );
                        };
                    )*
                    self($($argument),*)
                })
            }
        }
    };
}

impl_into_function!(0;);
impl_into_function!(1; first);
impl_into_function!(2; first, second);
impl_into_function!(3; first, second, third);
impl_into_function!(4; first, second, third, fourth);
impl_into_function!(5; first, second, third, fourth, fifth);
impl_into_function!(6; first, second, third, fourth, fifth, sixth);
