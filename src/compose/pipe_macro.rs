//! The `pipe!` macro for left-to-right function chaining.

/// Chains functions from left to right into a new function.
///
/// `pipe!(f, g, h)` builds `move |x| h(g(f(x)))`: the first function receives
/// the input and each later function the previous result.
///
/// Unlike the runtime [`pipe`](crate::compose::pipe), the stages may change
/// the value's type at every step. Each stage is moved into the returned
/// closure, which implements `Fn` when every stage does, so it can be called
/// repeatedly.
///
/// # Syntax
///
/// - `pipe!()` - A no-op `|| ()`
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Returns `|x| ...h(g(f(x)))`
///
/// A first stage that needs several inputs can take a tuple.
///
/// # Examples
///
/// ```
/// use pointfree::pipe;
///
/// let describe = pipe!(
///     |x: i32| x * 3,
///     |x: i32| x.to_string(),
///     |s: String| s.len(),
/// );
/// assert_eq!(describe(3), 1);
/// assert_eq!(describe(40), 3);
/// ```
///
/// ```
/// use pointfree::pipe;
///
/// let area_label = pipe!(
///     |(width, height): (u32, u32)| width * height,
///     |area: u32| format!("{area} m2"),
/// );
/// assert_eq!(area_label((3, 4)), "12 m2");
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        || ()
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::pipe!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}
