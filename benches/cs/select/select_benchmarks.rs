use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ordstat::{determined_select, naive_select, randomized_select};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn random_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen()).collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_median");

    for size in [1_000usize, 10_000, 100_000, 1_000_000] {
        let data = random_data(size, 42);
        let rank = (size + 1) / 2;

        group.bench_with_input(BenchmarkId::new("naive", size), &data, |b, data| {
            b.iter(|| naive_select(black_box(data), black_box(rank)))
        });

        group.bench_with_input(BenchmarkId::new("randomized", size), &data, |b, data| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| randomized_select(black_box(data), black_box(rank), &mut rng))
        });

        group.bench_with_input(BenchmarkId::new("deterministic", size), &data, |b, data| {
            b.iter(|| determined_select(black_box(data), black_box(rank)))
        });
    }

    group.finish();
}

fn bench_select_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_few_distinct");
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let data: Vec<u8> = (0..100_000).map(|_| rng.gen_range(0..4)).collect();
    let rank = data.len() / 2;

    group.bench_function("randomized", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| randomized_select(black_box(&data), black_box(rank), &mut rng))
    });
    group.bench_function("deterministic", |b| {
        b.iter(|| determined_select(black_box(&data), black_box(rank)))
    });

    group.finish();
}

criterion_group!(benches, bench_select, bench_select_duplicates);
criterion_main!(benches);
