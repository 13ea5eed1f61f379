//! A function path needs an explicit arity.

use pointfree::curry;

fn greet(greeting: &str, name: &str) -> String {
    format!("{greeting}, {name}")
}

fn main() {
    let hello = curry!(greet, 2)("hello");
    assert_eq!(hello("world"), "hello, world");
    assert_eq!(hello("there"), "hello, there");
}
