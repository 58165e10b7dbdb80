use parking_lot::RwLock;

use crate::arms::{Accumulator, ArmState};
use crate::error::Result;
use crate::optimizer::Optimizer;
use crate::vector;

/// Upper Confidence Bound (UCB1) optimizer
///
/// Every untried arm is played once before any arm is scored. After that the
/// arm maximising `mean + sqrt(2 ln(total / pulls))` is selected, which
/// favours both high averages and arms with few trials. Selection is
/// deterministic.
#[derive(Debug)]
pub struct UpperConfidenceBound {
    state: RwLock<ArmState>,
}

impl UpperConfidenceBound {
    /// Creates an optimizer over `options` arms
    ///
    /// # Errors
    /// [`OptimizerError::Options`](crate::OptimizerError::Options) if
    /// `options < 2`
    pub fn new(options: usize) -> Result<Self> {
        let state = ArmState::new(options, Accumulator::Mean)?;
        log::debug!(target: "mab", "created ucb optimizer: {options} arms");
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Current UCB score per arm; removed arms score `-1`
    ///
    /// Untried active arms have no finite bound and score infinity.
    pub fn scores(&self) -> Vec<f64> {
        Self::bonused(&self.state.read())
    }

    fn bonused(state: &ArmState) -> Vec<f64> {
        let total = state.total_trials() as f64;
        state
            .counts()
            .iter()
            .zip(state.rewards())
            .map(|(&count, &reward)| match count {
                c if c < 0 => -1.0,
                0 => f64::INFINITY,
                c => reward + (2.0 * (total / c as f64).ln()).sqrt(),
            })
            .collect()
    }
}

impl Optimizer for UpperConfidenceBound {
    fn name(&self) -> &'static str {
        "ucb"
    }

    fn select(&self, _rng: &mut dyn rand::RngCore) -> Option<usize> {
        let state = self.state.read();
        if state.active_count() == 0 {
            return None;
        }

        // Untried arms take priority, lowest index first
        if let Some(arm) = state.active().find(|&i| state.counts()[i] == 0) {
            log::trace!(target: "mab", "ucb exploring untried arm {arm}");
            return Some(arm);
        }

        vector::max_index(&Self::bonused(&state)).map(|(arm, _)| arm)
    }

    fn update(&self, arm: usize, reward: f64) -> Result<()> {
        self.state.write().record(arm, reward)
    }

    fn extend(&self, n: usize) {
        let mut state = self.state.write();
        state.extend(n);
        log::debug!(target: "mab", "ucb extended by {n} to {} arms", state.len());
    }

    fn remove(&self, arm: usize) {
        if self.state.write().remove(arm) {
            log::debug!(target: "mab", "ucb removed arm {arm}");
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
