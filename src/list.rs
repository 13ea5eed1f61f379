//! List primitives.
//!
//! Thin, non-mutating operations over slices: [`map`], [`foldl`], [`foldr`],
//! [`reverse`] and [`cons`]. Inputs are borrowed and every result is a new
//! value.
//!
//! Curried forms of the multi-argument primitives live in [`curried`] and
//! take one argument per call:
//!
//! ```
//! use pointfree::list::curried;
//!
//! let double_all = curried::map(|x: &i32| x * 2);
//! assert_eq!(double_all(&[1, 2, 3]), vec![2, 4, 6]);
//!
//! let product = curried::foldl(|acc: i32, x: &i32| acc * x)(1);
//! assert_eq!(product(&[1, 2, 3, 4, 5]), 120);
//! ```
//!
//! The uncurried functions also curry at the call site with
//! [`curry!`](crate::curry):
//!
//! ```
//! use pointfree::curry;
//! use pointfree::list::{foldl, map};
//!
//! let values = vec![1, 2, 3];
//!
//! let doubled = curry!(map, 2)(|x: &i32| x * 2)(values.as_slice());
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let product = curry!(foldl, 3)(|acc: i32, x: &i32| acc * x)(1)(values.as_slice());
//! assert_eq!(product, 6);
//! ```

use crate::compose::flip;

/// Applies `function` to every element in index order.
///
/// # Examples
///
/// ```
/// use pointfree::list::map;
///
/// assert_eq!(map(|x: &i32| x * 2, &[1, 2, 3]), vec![2, 4, 6]);
/// ```
pub fn map<A, B, F>(function: F, array: &[A]) -> Vec<B>
where
    F: Fn(&A) -> B,
{
    array.iter().map(function).collect()
}

/// Folds from the left: `function(function(function(init, a0), a1), a2)`.
///
/// An empty slice returns `init`.
///
/// # Examples
///
/// ```
/// use pointfree::list::foldl;
///
/// assert_eq!(foldl(|acc: i32, x: &i32| acc - x, 0, &[1, 2, 3]), -6);
/// ```
pub fn foldl<A, B, F>(function: F, init: B, array: &[A]) -> B
where
    F: Fn(B, &A) -> B,
{
    array.iter().fold(init, function)
}

/// Folds from the right: `function(a0, function(a1, function(a2, init)))`.
///
/// `function` takes the element first and the accumulator second; the
/// reduction itself runs right to left over the flipped function.
///
/// # Examples
///
/// ```
/// use pointfree::list::foldr;
///
/// let nested = foldr(|x: &f64, acc: f64| x / acc, 1.0, &[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(nested, 1.0 / (2.0 / (3.0 / (4.0 / 5.0))));
/// ```
pub fn foldr<A, B, F>(function: F, init: B, array: &[A]) -> B
where
    F: Fn(&A, B) -> B,
{
    array.iter().rev().fold(init, flip(function))
}

/// Returns the elements in opposite order.
///
/// Peels the last element off the remaining slice until it is empty, so
/// the stack depth stays constant whatever the input length.
///
/// # Examples
///
/// ```
/// use pointfree::list::reverse;
///
/// assert_eq!(reverse(&[1, 2, 3, 4, 5]), vec![5, 4, 3, 2, 1]);
/// assert_eq!(reverse::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn reverse<A: Clone>(array: &[A]) -> Vec<A> {
    let mut reversed = Vec::with_capacity(array.len());
    let mut remaining = array;
    while let [init @ .., last] = remaining {
        reversed.push(last.clone());
        remaining = init;
    }
    reversed
}

/// Prepends `head` to `tail`, leaving `tail` untouched.
///
/// # Examples
///
/// ```
/// use pointfree::list::cons;
///
/// let tail = vec![2, 3];
/// assert_eq!(cons(1, &tail), vec![1, 2, 3]);
/// assert_eq!(tail, vec![2, 3]);
/// ```
pub fn cons<A: Clone>(head: A, tail: &[A]) -> Vec<A> {
    let mut list = Vec::with_capacity(tail.len() + 1);
    list.push(head);
    list.extend_from_slice(tail);
    list
}

/// [`map`], [`foldl`] and [`foldr`] taking one argument per call.
///
/// `map(f)(array)`, `foldl(f)(init)(array)` and `foldr(f)(init)(array)`.
/// Every intermediate function can be called any number of times; `init`
/// is cloned for each fold.
pub mod curried {
    use std::rc::Rc;

    /// Curried [`map`](super::map).
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::list::curried;
    ///
    /// let scale = curried::map(|x: &f64| 2.0 * x / 3.0);
    /// assert_eq!(scale(&[3.0, 6.0]), vec![2.0, 4.0]);
    /// assert_eq!(scale(&[]), Vec::<f64>::new());
    /// ```
    pub fn map<A, B, F>(function: F) -> impl Fn(&[A]) -> Vec<B>
    where
        F: Fn(&A) -> B,
    {
        move |array: &[A]| super::map(&function, array)
    }

    /// Curried [`foldl`](super::foldl).
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::list::curried;
    ///
    /// let subtract_all = curried::foldl(|acc: i32, x: &i32| acc - x);
    /// let from_zero = subtract_all(0);
    /// assert_eq!(from_zero(&[1, 2, 3]), -6);
    /// assert_eq!(subtract_all(10)(&[1, 2, 3]), 4);
    /// ```
    pub fn foldl<A, B, F>(function: F) -> impl Fn(B) -> Box<dyn Fn(&[A]) -> B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(B, &A) -> B + 'static,
    {
        let function = Rc::new(function);
        move |init: B| {
            let function = Rc::clone(&function);
            Box::new(move |array: &[A]| super::foldl(&*function, init.clone(), array))
        }
    }

    /// Curried [`foldr`](super::foldr).
    ///
    /// # Examples
    ///
    /// ```
    /// use pointfree::list::curried;
    ///
    /// let divide_right = curried::foldr(|x: &f64, acc: f64| x / acc)(1.0);
    /// assert_eq!(divide_right(&[1.0, 2.0, 3.0, 4.0, 5.0]), 1.0 / (2.0 / (3.0 / (4.0 / 5.0))));
    /// ```
    pub fn foldr<A, B, F>(function: F) -> impl Fn(B) -> Box<dyn Fn(&[A]) -> B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(&A, B) -> B + 'static,
    {
        let function = Rc::new(function);
        move |init: B| {
            let function = Rc::clone(&function);
            Box::new(move |array: &[A]| super::foldr(&*function, init.clone(), array))
        }
    }
}
