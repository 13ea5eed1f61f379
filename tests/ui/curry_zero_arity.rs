//! Arity zero yields a thunk.

use pointfree::curry;

fn seed() -> u64 {
    7
}

fn main() {
    let thunk = curry!(seed, 0);
    assert_eq!(thunk(), 7);
    assert_eq!(thunk(), 7);
}
