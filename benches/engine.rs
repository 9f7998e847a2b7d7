//! Benchmarks for full and incremental board evaluation.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;

use robot_panels::{
    compute::{Engine, Mutation, search::MutationRng},
    schema::{Board, PanelWeights, Program, RewardTable},
};

/// Random programs shaped like the contest input (300 instructions each).
fn random_programs(robots: usize, seed: u64) -> Arc<[Program]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..robots)
        .map(|_| {
            (0..300)
                .map(|_| ['S', 'L', 'R'][rng.gen_range(0..3)])
                .collect::<String>()
                .parse()
                .unwrap()
        })
        .collect()
}

fn bench_full_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_evaluation");

    for robots in [100, 500] {
        let programs = random_programs(robots, 42);
        group.bench_with_input(BenchmarkId::from_parameter(robots), &robots, |b, _| {
            b.iter(|| {
                Engine::new(
                    black_box(Board::new(27)),
                    Arc::clone(&programs),
                    RewardTable::default(),
                )
            });
        });
    }

    group.finish();
}

fn bench_incremental_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_evaluation");

    for robots in [100, 500] {
        let engine = Engine::new(
            Board::new(27),
            random_programs(robots, 42),
            RewardTable::default(),
        );
        let mut rng = MutationRng::new(7);
        let mutations: Vec<Mutation> = (0..256)
            .map(|_| rng.propose(engine.board(), &PanelWeights::default()))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(robots), &robots, |b, _| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % mutations.len();
                engine.with_mutation(black_box(mutations[i]))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_evaluation, bench_incremental_evaluation);
criterion_main!(benches);
