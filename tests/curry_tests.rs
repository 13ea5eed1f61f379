//! Integration tests for the runtime curry engine.
//!
//! Tests for `func`, `func_with_arity`, `Curried` and `Application`.

#![cfg(feature = "compose")]

use std::cell::RefCell;
use std::rc::Rc;

use pointfree::compose::{Application, Curried, CurryError, Function, IntoFunction, func, func_with_arity};
use rstest::rstest;

fn digits(first: u32, second: u32, third: u32) -> u32 {
    first * 100 + second * 10 + third
}

// =============================================================================
// Argument grouping
// =============================================================================

#[rstest]
#[case(vec![vec![1, 2, 3]])]
#[case(vec![vec![1, 2], vec![3]])]
#[case(vec![vec![1], vec![2, 3]])]
#[case(vec![vec![1], vec![2], vec![3]])]
#[case(vec![vec![], vec![1], vec![], vec![2, 3]])]
fn test_every_grouping_reaches_the_same_result(#[case] groups: Vec<Vec<u32>>) {
    let mut application = Application::Partial(func(digits));
    for group in groups {
        application = application.call(group).unwrap();
    }
    assert_eq!(application.into_result(), Ok(123));
}

#[rstest]
fn test_end_to_end_formatting() {
    let describe = func(|x: i32, y: i32| format!("{x}, {y}"));
    let result = describe.apply(1).apply(2).unwrap().complete();
    assert_eq!(result.as_deref(), Some("1, 2"));
}

// =============================================================================
// Partial applications
// =============================================================================

#[rstest]
fn test_partial_application_is_reusable() {
    let add = func(|x: i64, y: i64| x + y);
    let add_five = add.apply(5).partial().unwrap();

    for value in -50..50 {
        assert_eq!(add_five.apply(value).complete(), Some(5 + value));
    }
}

#[rstest]
fn test_sibling_partials_are_independent() {
    let join = func_with_arity(3, |parts: Vec<String>| parts.join("/"));
    let root = join.apply(String::from("usr")).partial().unwrap();

    let local = root.apply(String::from("local")).partial().unwrap();
    let share = root.apply(String::from("share")).partial().unwrap();

    assert_eq!(local.bound(), ["usr", "local"]);
    assert_eq!(share.bound(), ["usr", "share"]);
    assert_eq!(root.bound(), ["usr"]);
    assert_eq!(
        local.apply(String::from("bin")).complete().as_deref(),
        Some("usr/local/bin")
    );
    assert_eq!(
        share.apply(String::from("doc")).complete().as_deref(),
        Some("usr/share/doc")
    );
}

#[rstest]
fn test_remaining_arity_decreases_with_each_call() {
    let sum = func_with_arity(5, |values: Vec<i32>| values.iter().sum::<i32>());
    assert_eq!(sum.arity(), 5);

    let after_two = sum.call([1, 2]).partial().unwrap();
    assert_eq!(after_two.arity(), 3);

    let after_three = after_two.call([3]).partial().unwrap();
    assert_eq!(after_three.arity(), 2);

    assert_eq!(after_three.call([4, 5]).complete(), Some(15));
}

// =============================================================================
// Surplus arguments and zero arity
// =============================================================================

#[rstest]
fn test_surplus_arguments_reach_variadic_target() {
    let collect = func_with_arity(2, |values: Vec<i32>| values);
    let partial = collect.apply(1).partial().unwrap();
    assert_eq!(partial.call([2, 3, 4]).complete(), Some(vec![1, 2, 3, 4]));
}

#[rstest]
fn test_surplus_arguments_are_dropped_by_fixed_arity_target() {
    let add = func(|x: i32, y: i32| x + y);
    assert_eq!(add.call([1, 2, 3]).complete(), Some(3));
}

#[rstest]
fn test_zero_arity_runs_on_first_call() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&calls);
    let thunk = func(move || {
        recorder.borrow_mut().push("ran");
        42
    });

    assert_eq!(thunk.arity(), 0);
    let application: Application<(), i32> = thunk.call([]);
    assert!(application.is_complete());
    assert_eq!(application.complete(), Some(42));
    assert_eq!(*calls.borrow(), vec!["ran"]);
}

#[rstest]
fn test_zero_arity_passes_supplied_arguments_through() {
    let echo = func_with_arity(0, |values: Vec<char>| values);
    assert_eq!(echo.call(['a', 'b']).complete(), Some(vec!['a', 'b']));
}

// =============================================================================
// Failure propagation
// =============================================================================

#[rstest]
fn test_target_errors_are_returned_untouched() {
    let divide = func(|numerator: i32, denominator: i32| {
        numerator
            .checked_div(denominator)
            .ok_or_else(|| format!("cannot divide {numerator} by zero"))
    });

    let from_ten = divide.apply(10).partial().unwrap();
    assert_eq!(from_ten.apply(2).complete(), Some(Ok(5)));
    assert_eq!(
        from_ten.apply(0).complete(),
        Some(Err(String::from("cannot divide 10 by zero")))
    );
}

#[rstest]
#[should_panic(expected = "target failure")]
fn test_target_panics_propagate() {
    let explode = func(|_: i32, _: i32| -> i32 { panic!("target failure") });
    let _ = explode.call([1, 2]);
}

#[rstest]
fn test_application_chaining_errors() {
    let increment = func(|x: i32| x + 1);
    assert_eq!(
        increment.apply(1).call([2, 3]).unwrap_err(),
        CurryError::Saturated { supplied: 2 }
    );

    let pair = func(|x: i32, y: i32| (x, y));
    assert_eq!(
        pair.call([]).into_result(),
        Err(CurryError::Unsaturated { remaining: 2 })
    );
}

// =============================================================================
// Interaction with Function
// =============================================================================

#[rstest]
fn test_curry_existing_function_with_explicit_arity() {
    let concat = Function::new(|parts: Vec<&str>| parts.concat());
    let curried = Curried::new(2, concat.partial(["<"]));
    let application = curried.apply("a").apply(">").unwrap();
    assert_eq!(application.complete().as_deref(), Some("<a>"));
}

#[rstest]
fn test_curry_flipped_function() {
    let subtract = func_with_arity(2, |values: Vec<i32>| values[0] - values[1]);
    assert_eq!(subtract.call([10, 3]).complete(), Some(7));

    let flipped = Curried::new(
        2,
        Function::new(|values: Vec<i32>| values[0] - values[1]).flip(),
    );
    assert_eq!(flipped.call([10, 3]).complete(), Some(-7));
}

#[rstest]
fn test_explicit_arity_below_declared_waits_for_every_parameter() {
    let add = Curried::new(1, (|x: i32, y: i32| x + y).into_function());
    assert_eq!(add.arity(), 2);

    let after_one = add.call([1]);
    assert!(!after_one.is_complete());
    assert_eq!(after_one.apply(2).unwrap().complete(), Some(3));
    assert_eq!(add.call([1, 2]).complete(), Some(3));
}

#[rstest]
fn test_explicit_arity_below_declared_after_partial() {
    let join = (|a: char, b: char, c: char| format!("{a}{b}{c}")).into_function();
    let curried = Curried::new(0, join.partial(['x']));
    assert_eq!(curried.arity(), 2);
    assert_eq!(curried.call(['y']).call(['z']).unwrap().complete().as_deref(), Some("xyz"));
}

// =============================================================================
// Logging
// =============================================================================

#[rstest]
fn test_runs_under_trace_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let add = func(|x: i32, y: i32| x + y);
        assert_eq!(add.apply(1).apply(2).unwrap().complete(), Some(3));
    });
}
