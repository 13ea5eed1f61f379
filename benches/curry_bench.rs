//! Benchmark for currying: the runtime engine against the `curry!` macro.
//!
//! Measures partial application, saturation and reuse of partials.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pointfree::compose::{func, func_with_arity};
use pointfree::curry;
use std::hint::black_box;

fn add3(first: i64, second: i64, third: i64) -> i64 {
    first + second + third
}

// =============================================================================
// Runtime engine
// =============================================================================

fn benchmark_runtime_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("runtime_curry");

    group.bench_function("all_at_once", |bencher| {
        let curried = func(add3);
        bencher.iter(|| black_box(curried.call(black_box([1, 2, 3])).complete()));
    });

    group.bench_function("one_at_a_time", |bencher| {
        let curried = func(add3);
        bencher.iter(|| {
            let result = curried
                .apply(black_box(1))
                .apply(black_box(2))
                .and_then(|application| application.apply(black_box(3)));
            black_box(result.ok().and_then(|application| application.complete()))
        });
    });

    group.bench_function("reused_partial", |bencher| {
        let partial = func(add3).call([1, 2]).partial();
        bencher.iter(|| {
            black_box(
                partial
                    .as_ref()
                    .and_then(|curried| curried.apply(black_box(3)).complete()),
            )
        });
    });

    // Bound arguments are flattened, so cost should track arity, not depth.
    for arity in [2, 8, 32] {
        group.bench_with_input(
            BenchmarkId::new("variadic_one_at_a_time", arity),
            &arity,
            |bencher, &arity| {
                let curried = func_with_arity(arity, |values: Vec<i64>| values.iter().sum::<i64>());
                bencher.iter(|| {
                    let mut application = curried.apply(0);
                    for value in 1..arity {
                        application = match application.apply(black_box(value as i64)) {
                            Ok(next) => next,
                            Err(_) => break,
                        };
                    }
                    black_box(application.complete())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// curry! macro
// =============================================================================

fn benchmark_macro_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("macro_curry");

    group.bench_function("one_at_a_time", |bencher| {
        let curried = curry!(add3, 3);
        bencher.iter(|| black_box(curried(black_box(1))(black_box(2))(black_box(3))));
    });

    group.bench_function("reused_partial", |bencher| {
        let partial = curry!(add3, 3)(1)(2);
        bencher.iter(|| black_box(partial(black_box(3))));
    });

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| black_box(add3(black_box(1), black_box(2), black_box(3))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_runtime_curry, benchmark_macro_curry);
criterion_main!(benches);
