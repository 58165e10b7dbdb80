//! Simulates Bernoulli arms and compares how each strategy allocates trials.
//!
//! Run with `RUST_LOG=mab=debug cargo run --example simulation` to see the
//! optimizers' own log output.

use mab::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// True success probability of each arm; arm 3 is added halfway through.
const PROBABILITIES: [f64; 4] = [0.05, 0.12, 0.08, 0.20];
const ROUNDS: usize = 5_000;

fn main() {
    env_logger::init();

    println!("=== Bandit Strategy Comparison ===\n");

    let policies = [
        LearningPolicy::EpsilonGreedy { epsilon: 0.1 },
        LearningPolicy::Ucb,
        LearningPolicy::Softmax,
        LearningPolicy::Thompson,
    ];

    for policy in policies {
        let mut rng = StdRng::seed_from_u64(42);
        let optimizer = policy.build(3).expect("valid configuration");
        let mut total_reward = 0.0;
        let mut stopped_at = None;

        for round in 0..ROUNDS {
            if round == ROUNDS / 2 {
                // A new option enters the catalogue and a poor one leaves
                optimizer.extend(1);
                optimizer.remove(0);
            }

            let Some(arm) = optimizer.select(&mut rng) else {
                break;
            };
            let reward = if rng.random_bool(PROBABILITIES[arm]) { 1.0 } else { 0.0 };
            optimizer.update(arm, reward).expect("arm and reward are valid");
            total_reward += reward;

            if stopped_at.is_none() && round > ROUNDS / 2 && optimizer.significant(0.01) {
                stopped_at = Some(round);
            }
        }

        println!("--- {} ---", optimizer.name());
        println!("Total reward: {total_reward}");
        println!("Counts:  {:?}", optimizer.counts());
        println!(
            "Rewards: {:?}",
            optimizer
                .rewards()
                .iter()
                .map(|r| (r * 1000.0).round() / 1000.0)
                .collect::<Vec<_>>()
        );
        match stopped_at {
            Some(round) => println!("Leader significant at p <= 0.01 from round {round}\n"),
            None => println!("No significant leader yet\n"),
        }
    }
}
