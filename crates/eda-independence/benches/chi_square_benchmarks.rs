use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eda_core::{Column, Level};
use eda_independence::{chi_square, pairwise, ContingencyTable, PairAxis};
use rand::prelude::*;

/// Generate `n` observations of two variables with `k` levels each
fn generate_columns(n: usize, k: usize, seed: u64) -> (Column, Column) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x: Vec<String> = (0..n).map(|_| format!("x{}", rng.gen_range(0..k))).collect();
    let y: Vec<String> = (0..n).map(|_| format!("y{}", rng.gen_range(0..k))).collect();
    (Column::new("x", x), Column::new("y", y))
}

fn generate_table(k: usize, seed: u64) -> ContingencyTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels: Vec<Level> = (0..k as i64).map(Level::Int).collect();
    let counts = (0..k)
        .map(|_| (0..k).map(|_| rng.gen_range(5..100)).collect())
        .collect();
    ContingencyTable::from_counts(labels.clone(), labels, counts).unwrap()
}

fn bench_cross_tabulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("CrossTabulation");
    for &n in &[100, 1_000, 10_000] {
        let (x, y) = generate_columns(n, 5, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| ContingencyTable::from_columns(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_chi_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChiSquare");
    for &k in &[2, 5, 20] {
        let table = generate_table(k, 7);
        group.bench_with_input(BenchmarkId::new("test", k), &k, |b, _| {
            b.iter(|| chi_square(black_box(&table), true).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("post_hoc", k), &k, |b, _| {
            b.iter(|| pairwise(black_box(&table), PairAxis::Rows, true).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cross_tabulation, bench_chi_square);
criterion_main!(benches);
