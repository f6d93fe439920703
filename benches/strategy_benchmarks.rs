use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hollow_maze::{HeapHollow, Maze, Position, Treasure, TreasureStore, TreeHollow};

const N: usize = 10_000;

// ─── Helpers to generate deterministic treasure batches ─────────────────────

fn random_treasures(n: usize) -> Vec<Treasure> {
    let mut rng = StdRng::seed_from_u64(0x5eed_1e55);
    (0..n).map(|_| Treasure::new(rng.gen_range(0..1_000), rng.gen_range(1..100))).collect()
}

// ─── Restructure benchmarks ─────────────────────────────────────────────────

fn bench_restructure(c: &mut Criterion) {
    let treasures = random_treasures(N);
    let mut group = c.benchmark_group("restructure");

    group.bench_function(BenchmarkId::new("TreeHollow", N), |b| {
        b.iter_batched(|| treasures.clone(), TreeHollow::new, BatchSize::SmallInput);
    });

    group.bench_function(BenchmarkId::new("HeapHollow", N), |b| {
        b.iter_batched(|| treasures.clone(), HeapHollow::new, BatchSize::SmallInput);
    });

    group.finish();
}

// ─── Extraction benchmarks ──────────────────────────────────────────────────

fn bench_take_best_fitting(c: &mut Criterion) {
    let treasures = random_treasures(N);
    let mut group = c.benchmark_group("take_best_fitting");

    // Capacity 1 forces long reject scans; 99 admits nearly everything.
    for capacity in [1u32, 25, 99] {
        group.bench_function(BenchmarkId::new("TreeHollow", capacity), |b| {
            b.iter_batched(
                || TreeHollow::new(treasures.clone()),
                |mut hollow| hollow.take_best_fitting(capacity),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("HeapHollow", capacity), |b| {
            b.iter_batched(
                || HeapHollow::new(treasures.clone()),
                |mut hollow| hollow.take_best_fitting(capacity),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ─── Path search benchmark ──────────────────────────────────────────────────

fn bench_find_way_out(c: &mut Criterion) {
    // An open grid sends the search snaking through most cells before it
    // reaches the far-corner exit.
    let mut maze = Maze::new(Position::new(0, 0), vec![Position::new(63, 63)], &[], Vec::new(), 64, 64);

    c.bench_function("find_way_out/open_64x64", |b| {
        b.iter(|| maze.find_way_out().expect("open grid"));
    });
}

criterion_group!(benches, bench_restructure, bench_take_best_fitting, bench_find_way_out);
criterion_main!(benches);
