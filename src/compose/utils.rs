//! Small combinators used alongside the curry engine and pipelines.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`flip3`]: swaps the first two arguments of a ternary function
//!
//! For variadic [`Function`](super::Function)s see
//! [`Function::flip`](super::Function::flip).

/// Returns the value unchanged.
///
/// The unit of composition: `compose!(identity, f)` and `compose!(f, identity)`
/// both behave like `f`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)`, and flipping twice gives back `f`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::flip;
///
/// let describe = |x: i32, y: i32| format!("{x}, {y}");
/// assert_eq!(flip(describe)(4, 5), "5, 4");
/// ```
///
/// ```
/// use pointfree::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped_twice = flip(flip(subtract));
/// assert_eq!(flipped_twice(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Swaps the first two arguments of a ternary function, keeping the third.
///
/// `flip3(f)(a, b, c) == f(b, a, c)`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::flip3;
///
/// let triple = |x: char, y: char, z: char| format!("{x}{y}{z}");
/// assert_eq!(flip3(triple)('a', 'b', 'c'), "bac");
/// ```
#[inline]
pub fn flip3<A, B, C, D, F>(function: F) -> impl Fn(B, A, C) -> D
where
    F: Fn(A, B, C) -> D,
{
    move |second, first, third| function(first, second, third)
}
