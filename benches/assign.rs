//! # Interval map benchmarks
//!
//! - `assign_random`: random intervals over a wide key range, so the map
//!   grows to a few thousand boundaries.
//! - `assign_sweeping`: adjacent intervals with alternating values, the
//!   worst case for boundary count.
//! - `assign_wide`: short intervals followed by one interval erasing them all.
//! - `lookup`: point lookups in a populated map.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use interval_map::IntervalMap;
use rand::{rngs::StdRng, Rng, SeedableRng};

type Map = IntervalMap<u32, u8>;

const N: usize = 6000;
const KEYS: u32 = 1_000_000;

fn random_intervals(seed: u64, max_len: u32) -> Vec<(u32, u32, u8)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..N)
        .map(|_| {
            let begin = rng.gen_range(0, KEYS);
            let end = begin + rng.gen_range(1, max_len);
            (begin, end, rng.gen_range(0, 8))
        })
        .collect()
}

fn populated(intervals: &[(u32, u32, u8)]) -> Map {
    let mut map = Map::new(0);
    for (begin, end, value) in intervals.iter() {
        map.assign(*begin, *end, *value);
    }
    map
}

fn assign_random(c: &mut Criterion) {
    let intervals = random_intervals(1, 1000);
    c.bench_function(&format!("Assign {} random intervals", N), |b| {
        b.iter(|| populated(black_box(&intervals)))
    });
}

fn assign_sweeping(c: &mut Criterion) {
    let intervals: Vec<_> = (0..N as u32)
        .map(|i| (i * 10, i * 10 + 10, (i % 2) as u8 + 1))
        .collect();
    c.bench_function(&format!("Assign {} adjacent intervals", N), |b| {
        b.iter(|| populated(black_box(&intervals)))
    });
}

fn assign_wide(c: &mut Criterion) {
    let intervals = random_intervals(2, 100);
    c.bench_function(
        &format!("Erase {} intervals with one assignment", N),
        |b| {
            b.iter_batched(
                || populated(&intervals),
                |mut map| {
                    map.assign(0, KEYS + 100, 0);
                    assert!(map.is_empty());
                    map
                },
                BatchSize::SmallInput,
            )
        },
    );
}

fn lookup(c: &mut Criterion) {
    let map = populated(&random_intervals(3, 1000));
    let mut rng = StdRng::seed_from_u64(4);
    let keys: Vec<u32> = (0..N).map(|_| rng.gen_range(0, KEYS)).collect();
    c.bench_function(&format!("Look up {} keys", N), |b| {
        b.iter(|| {
            keys.iter()
                .map(|k| *map.get(black_box(k)) as usize)
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, assign_random, assign_sweeping, assign_wide, lookup);
criterion_main!(benches);
