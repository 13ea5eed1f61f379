//! The closure form takes its arity from the parameter list.

use pointfree::curry;

fn main() {
    let volume = curry!(|width: u32, height: u32, depth: u32| width * height * depth);
    let flat = volume(4)(5);
    assert_eq!(flat(1), 20);
    assert_eq!(flat(3), 60);
}
