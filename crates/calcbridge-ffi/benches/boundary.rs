//! Cost of crossing the native boundary
//!
//! Compares each native routine with the same operation done in Rust, and
//! measures the overhead of the dynamic `invoke` entry point.

use calcbridge_ffi::{calc, invoke, Linked, Operation};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");
    group.bench_function("native", |b| {
        b.iter(|| calc::add(black_box(12_345), black_box(67_890)))
    });
    group.bench_function("rust", |b| {
        b.iter(|| black_box(12_345i32).wrapping_add(black_box(67_890)))
    });
    group.finish();
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");
    group.bench_function("native", |b| {
        b.iter(|| calc::multiply(black_box(1_234), black_box(5_678)))
    });
    group.bench_function("rust", |b| {
        b.iter(|| black_box(1_234i32).wrapping_mul(black_box(5_678)))
    });
    group.finish();
}

fn bench_invoke(c: &mut Criterion) {
    c.bench_function("invoke_add", |b| {
        b.iter(|| invoke(&Linked, Operation::Add, black_box(&[12_345, 67_890])))
    });
}

criterion_group!(benches, bench_addition, bench_multiplication, bench_invoke);
criterion_main!(benches);
