use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mab::prelude::*;
use rand::SeedableRng;
use std::hint::black_box;

const POLICIES: [(&str, LearningPolicy); 4] = [
    ("epsilon_greedy", LearningPolicy::EpsilonGreedy { epsilon: 0.1 }),
    ("ucb", LearningPolicy::Ucb),
    ("softmax", LearningPolicy::Softmax),
    ("thompson", LearningPolicy::Thompson),
];

/// Builds an optimizer with some history on every arm
fn trained(policy: LearningPolicy, n_arms: usize) -> Strategy {
    let optimizer = policy.build(n_arms).unwrap();
    for i in 0..(n_arms * 10) {
        optimizer
            .update(i % n_arms, (i % 7) as f64 / 7.0)
            .unwrap();
    }
    optimizer
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    for n_arms in [10, 100, 1000].iter() {
        for (name, policy) in POLICIES {
            group.bench_with_input(BenchmarkId::new(name, n_arms), n_arms, |b, &n| {
                let optimizer = trained(policy, n);
                let mut rng = rand::rngs::StdRng::seed_from_u64(42);

                b.iter(|| black_box(optimizer.select(&mut rng)));
            });
        }
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for (name, policy) in POLICIES {
        group.bench_function(name, |b| {
            let optimizer = trained(policy, 10);
            let mut i = 0usize;

            b.iter(|| {
                i += 1;
                black_box(optimizer.update(i % 10, 0.5))
            });
        });
    }

    group.finish();
}

fn bench_arm_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("arm_operations");

    for n_arms in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("extend", n_arms), n_arms, |b, &n| {
            b.iter_batched(
                || UpperConfidenceBound::new(n).unwrap(),
                |optimizer| {
                    optimizer.extend(1);
                    black_box(optimizer)
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("remove", n_arms), n_arms, |b, &n| {
            b.iter_batched(
                || UpperConfidenceBound::new(n).unwrap(),
                |optimizer| {
                    optimizer.remove(n / 2);
                    black_box(optimizer)
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("significant", n_arms), n_arms, |b, &n| {
            let optimizer = trained(LearningPolicy::Ucb, n);
            b.iter(|| black_box(optimizer.significant(0.05)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_update, bench_arm_operations);
criterion_main!(benches);
