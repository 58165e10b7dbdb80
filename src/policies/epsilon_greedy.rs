use parking_lot::RwLock;
use rand::Rng;

use crate::arms::{Accumulator, ArmState};
use crate::error::{OptimizerError, Result};
use crate::optimizer::Optimizer;
use crate::vector;

/// Epsilon-greedy optimizer - explores with probability epsilon, exploits otherwise
///
/// Rewards are kept as a running mean per arm.
#[derive(Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
    state: RwLock<ArmState>,
}

impl EpsilonGreedy {
    /// Creates an optimizer over `options` arms
    ///
    /// # Errors
    /// - [`OptimizerError::Epsilon`] unless `0 <= epsilon <= 1`
    /// - [`OptimizerError::Options`] if `options < 2`
    pub fn new(options: usize, epsilon: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(OptimizerError::Epsilon { epsilon });
        }
        let state = ArmState::new(options, Accumulator::Mean)?;
        log::debug!(target: "mab", "created epsilon-greedy optimizer: {options} arms, epsilon {epsilon}");
        Ok(Self {
            epsilon,
            state: RwLock::new(state),
        })
    }

    /// Gets the exploration probability
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Active arm with the highest mean reward, first one on ties
    fn best_arm(state: &ArmState) -> Option<usize> {
        let scores: Vec<f64> = state
            .counts()
            .iter()
            .zip(state.rewards())
            .map(|(&count, &reward)| if count < 0 { -1.0 } else { reward })
            .collect();
        vector::max_index(&scores).map(|(arm, _)| arm)
    }
}

impl Optimizer for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon-greedy"
    }

    fn select(&self, rng: &mut dyn rand::RngCore) -> Option<usize> {
        let state = self.state.read();
        let active: Vec<usize> = state.active().collect();
        if active.is_empty() {
            return None;
        }

        let r: f64 = rng.random();
        if r >= self.epsilon {
            Self::best_arm(&state)
        } else {
            let arm = active[rng.random_range(0..active.len())];
            log::trace!(target: "mab", "epsilon-greedy exploring arm {arm}");
            Some(arm)
        }
    }

    fn update(&self, arm: usize, reward: f64) -> Result<()> {
        self.state.write().record(arm, reward)
    }

    fn extend(&self, n: usize) {
        let mut state = self.state.write();
        state.extend(n);
        log::debug!(target: "mab", "epsilon-greedy extended by {n} to {} arms", state.len());
    }

    fn remove(&self, arm: usize) {
        if self.state.write().remove(arm) {
            log::debug!(target: "mab", "epsilon-greedy removed arm {arm}");
        }
    }

    fn significant(&self, pvalue: f64) -> bool {
        self.state
            .read()
            .top_two()
            .is_some_and(|test| test.is_significant(pvalue))
    }

    fn counts(&self) -> Vec<i64> {
        self.state.read().counts().to_vec()
    }

    fn rewards(&self) -> Vec<f64> {
        self.state.read().rewards().to_vec()
    }
}
