//! # pointfree
//!
//! Building blocks for point-free, declarative data transformations.
//!
//! ## Overview
//!
//! - **Currying**: [`func`](compose::func) curries a function so its
//!   arguments can arrive in any grouping; [`curry!`] does the same at the
//!   type level with nested unary closures
//! - **Composition**: runtime [`pipe`](compose::pipe) and
//!   [`compose`](compose::compose) pipelines, and the typed [`pipe!`] and
//!   [`compose!`] macros
//! - **Flip**: [`flip`](compose::flip) and friends swap leading arguments
//! - **List primitives**: [`map`](list::map), [`foldl`](list::foldl),
//!   [`foldr`](list::foldr), [`reverse`](list::reverse), [`cons`](list::cons)
//!
//! ## Feature Flags
//!
//! - `compose`: currying, pipelines and combinators
//! - `list`: list primitives (enables `compose`)
//! - `derive`: the [`curry!`] procedural macro
//!
//! All three are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let greet = func(|x: i32, y: i32| format!("{x}, {y}"));
//! let greeting = greet.apply(1).apply(2).unwrap().into_result().unwrap();
//! assert_eq!(greeting, "1, 2");
//!
//! let shout = pipe!(|s: String| s.to_uppercase(), |s: String| s + "!");
//! assert_eq!(shout(greeting), "1, 2!");
//!
//! assert_eq!(foldr(|x: &i32, acc: i32| x - acc, 0, &[1, 2, 3]), 2);
//! ```
//!
//! ## Logging
//!
//! Partial application, saturation and pipeline runs emit `trace`-level
//! [`tracing`] events under the `pointfree::curry` and `pointfree::pipeline`
//! targets. The library never installs a subscriber.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "derive")]
pub use pointfree_derive::curry;
