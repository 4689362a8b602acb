use criterion::{criterion_group, BenchmarkId, Criterion};
use std::hint::black_box;
use validation_rail::rules::{is_even, is_greater_than};
use validation_rail::Validator;

use crate::common::{configure_criterion, realistic_user_data, user_validator};

pub fn bench_combine_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinators/combine");

    for branches in [1usize, 4, 16, 64] {
        let rule = Validator::combine((0..branches).map(|i| is_greater_than(i as i64)));
        group.bench_with_input(BenchmarkId::from_parameter(branches), &rule, |b, rule| {
            b.iter(|| black_box(rule.check(black_box(&0))))
        });
    }

    group.finish();
}

pub fn bench_users(c: &mut Criterion) {
    let users = realistic_user_data();
    let rule = user_validator();

    c.bench_function("combinators/realistic_users", |b| {
        b.iter(|| {
            let invalid = users.iter().filter(|user| !rule.is_valid(user)).count();
            black_box(invalid)
        })
    });
}

pub fn bench_error_shaping(c: &mut Criterion) {
    let joined = Validator::combine([is_greater_than(10), is_even()])
        .reduce_errors(String::new(), |acc, e| acc + &e + ";");
    let mapped = Validator::combine([is_greater_than(10), is_even()]).map_errors(|e| e.len());

    let mut group = c.benchmark_group("combinators/errors");
    group.bench_function("reduce_errors", |b| b.iter(|| black_box(joined.check(black_box(&3)))));
    group.bench_function("map_errors", |b| b.iter(|| black_box(mapped.check(black_box(&3)))));
    group.finish();
}

criterion_group! {
    name = combinator_benches;
    config = configure_criterion();
    targets = bench_combine_scaling, bench_users, bench_error_shaping
}
