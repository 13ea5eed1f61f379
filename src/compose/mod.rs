//! Currying and function composition.
//!
//! This module holds the runtime curry engine, runtime pipelines, and the
//! statically typed macros that complement them.
//!
//! # Overview
//!
//! - [`Function`]: a shared variadic callable, the common currency of the runtime API
//! - [`func`] / [`func_with_arity`]: curry a function so it accepts its
//!   arguments in any grouping ([`Curried`], [`Application`])
//! - [`pipe`] / [`compose`]: runtime pipelines of functions ([`Pipeline`])
//! - [`flip`], [`flip3`], [`identity`]: small combinators
//! - [`pipe!`], [`compose!`]: typed, heterogeneous chains of unary functions
//! - [`curry!`](crate::curry): typed currying into nested unary closures
//!   (requires the `derive` feature)
//!
//! # Examples
//!
//! ## Currying with any grouping
//!
//! ```
//! use pointfree::compose::func;
//!
//! let volume = func(|width: u32, height: u32, depth: u32| width * height * depth);
//!
//! let one_by_one = volume.call([2]).call([3]).unwrap().call([4]).unwrap();
//! let grouped = volume.call([2, 3]).call([4]).unwrap();
//! let at_once = volume.call([2, 3, 4]);
//!
//! assert_eq!(one_by_one.complete(), Some(24));
//! assert_eq!(grouped.complete(), Some(24));
//! assert_eq!(at_once.complete(), Some(24));
//! ```
//!
//! ## Pipelines
//!
//! ```
//! use pointfree::compose::{Function, compose, pipe};
//!
//! let add = Function::new(|values: Vec<i32>| values.iter().sum::<i32>());
//! let double = Function::new(|values: Vec<i32>| values[0] * 2);
//!
//! assert_eq!(pipe([add.clone(), double.clone()]).run([1, 2]), Some(6));
//! assert_eq!(compose([double, add]).run([1, 2]), Some(6));
//! ```
//!
//! # Laws
//!
//! - **Currying**: `func(f).call([a1..ak]).call([ak+1..an]) == f(a1, ..., an)` for any split
//! - **Pipe**: `pipe([f, g, h]).run([x]) == h(g(f(x)))`
//! - **Compose**: `compose([f, g, h]).run([x]) == f(g(h(x)))`
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod compose_macro;
mod curry;
mod function;
mod pipe_macro;
mod pipeline;
mod utils;

pub use curry::{Application, Curried, CurryError, func, func_with_arity};
pub use function::{Function, IntoFunction};
pub use pipeline::{Pipeline, compose, pipe};
pub use utils::{flip, flip3, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;

#[cfg(feature = "derive")]
pub use crate::curry;
