//! Per-arm bookkeeping shared by every optimizer.

use crate::error::{OptimizerError, Result};
use crate::significance::ZTest;
use crate::vector;

/// Count value marking a removed arm.
pub const REMOVED: i64 = -1;

/// How an optimizer folds a new reward into its per-arm accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accumulator {
    /// `rewards[i]` holds the mean of all rewards seen by arm `i`
    Mean,
    /// `rewards[i]` holds the sum of all rewards seen by arm `i`
    Sum,
}

/// Parallel trial counts and reward accumulators, indexed by arm.
///
/// Slots are never deleted: removal writes [`REMOVED`] into the count and
/// zeroes the reward so indices held by callers stay valid.
#[derive(Clone, Debug, PartialEq)]
pub struct ArmState {
    counts: Vec<i64>,
    rewards: Vec<f64>,
    accumulator: Accumulator,
}

impl ArmState {
    /// Creates `options` zeroed arms, rejecting fewer than two.
    pub fn new(options: usize, accumulator: Accumulator) -> Result<Self> {
        if options < 2 {
            return Err(OptimizerError::Options { options });
        }
        Ok(Self {
            counts: vec![0; options],
            rewards: vec![0.0; options],
            accumulator,
        })
    }

    /// Number of slots, removed arms included.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn counts(&self) -> &[i64] {
        &self.counts
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    pub fn is_active(&self, arm: usize) -> bool {
        self.counts.get(arm).is_some_and(|&c| c >= 0)
    }

    /// Indices of arms that have not been removed.
    pub fn active(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c >= 0)
            .map(|(i, _)| i)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Total trials across active arms.
    pub fn total_trials(&self) -> i64 {
        vector::sum_counts(&self.counts)
    }

    /// Records one observation.
    ///
    /// The index is checked before the reward. A removed arm accepts the call
    /// and stays untouched.
    pub fn record(&mut self, arm: usize, reward: f64) -> Result<()> {
        let len = self.len();
        if arm >= len {
            return Err(OptimizerError::Index { index: arm, len });
        }
        if !reward.is_finite() || reward < 0.0 {
            return Err(OptimizerError::Reward { reward });
        }
        if self.counts[arm] < 0 {
            return Ok(());
        }

        self.counts[arm] += 1;
        match self.accumulator {
            Accumulator::Mean => {
                let n = self.counts[arm] as f64;
                self.rewards[arm] += (reward - self.rewards[arm]) / n;
            }
            Accumulator::Sum => self.rewards[arm] += reward,
        }
        Ok(())
    }

    /// Appends `n` zeroed arms.
    pub fn extend(&mut self, n: usize) {
        let len = self.len() + n;
        self.counts.resize(len, 0);
        self.rewards.resize(len, 0.0);
    }

    /// Tombstones `arm`; returns whether anything changed.
    pub fn remove(&mut self, arm: usize) -> bool {
        match self.counts.get_mut(arm) {
            Some(count) if *count >= 0 => {
                *count = REMOVED;
                self.rewards[arm] = 0.0;
                true
            }
            _ => false,
        }
    }

    /// Per-arm reward rate: the mean, whatever the accumulator.
    pub fn rate(&self, arm: usize) -> f64 {
        match self.accumulator {
            Accumulator::Mean => self.rewards[arm],
            Accumulator::Sum if self.counts[arm] > 0 => {
                self.rewards[arm] / self.counts[arm] as f64
            }
            Accumulator::Sum => 0.0,
        }
    }

    /// Compares the two active arms with the highest reward rate, the leader
    /// as challenger against the runner-up as baseline.
    ///
    /// Returns `None` with fewer than two active arms.
    pub fn top_two(&self) -> Option<ZTest> {
        let mut ranked: Vec<(usize, f64)> = self.active().map(|i| (i, self.rate(i))).collect();
        if ranked.len() < 2 {
            return None;
        }
        // Stable sort keeps index order among equal rates.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        let (best, runner_up) = (ranked[0].0, ranked[1].0);

        Some(ZTest::new(
            [self.rate(runner_up), self.rate(best)],
            [self.counts[runner_up], self.counts[best]],
        ))
    }
}
