//! Procedural macros for pointfree.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts closures and fixed-arity functions into curried form
//!
//! # Example
//!
//! ```rust,ignore
//! use pointfree::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//!
//! let add_five = add(5);
//! assert_eq!(add_five(10), 15);
//! assert_eq!(add_five(20), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a closure, or a function with an explicit arity, into curried form.
///
/// The result is a chain of unary closures: `curry!(f, 3)(a)(b)(c) == f(a, b, c)`.
/// Every intermediate closure implements `Fn`, so a partial application can be
/// called any number of times. Bound arguments are shared through `Rc` and
/// cloned only when the final call needs an owned value, so every argument
/// except the last must implement `Clone`.
///
/// # Forms
///
/// - `curry!(|a, b, c| body)`: the arity is the closure's parameter count
/// - `curry!(function, arity)`: `arity` must be an integer literal
///
/// An arity of 0 produces a thunk (`move || f()`) and an arity of 1 a unary
/// closure forwarding to the function.
///
/// # Errors
///
/// Misuse is reported at compile time: a function path without an arity, a
/// non-literal arity, an arity given alongside a closure, or extra arguments.
///
/// # Examples
///
/// ```rust,ignore
/// use pointfree::curry;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let flat = curried(2.0)(3.0);
/// assert_eq!(flat(4.0), 24.0);
/// assert_eq!(flat(1.0), 6.0);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input.into()).into()
}
