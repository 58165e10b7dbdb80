use parking_lot::RwLock;
use rand::Rng;

use crate::arms::{Accumulator, ArmState};
use crate::error::Result;
use crate::optimizer::Optimizer;
use crate::vector;

/// Keeps the temperature finite before the first trial.
const TEMPERATURE_OFFSET: f64 = 1e-7;

/// Softmax optimizer with an annealed temperature
///
/// Arms are sampled with probability proportional to `exp(mean / T)`, where
/// `T = 1 / ln(total_trials + 1e-7)`. The temperature falls as trials
/// accumulate, so selection starts close to uniform and sharpens towards the
/// best arm without any schedule to tune.
#[derive(Debug)]
pub struct AnnealingSoftmax {
    state: RwLock<ArmState>,
}

impl AnnealingSoftmax {
    /// Creates an optimizer over `options` arms
    ///
    /// # Errors
    /// [`OptimizerError::Options`](crate::OptimizerError::Options) if
    /// `options < 2`
    pub fn new(options: usize) -> Result<Self> {
        let state = ArmState::new(options, Accumulator::Mean)?;
        log::debug!(target: "mab", "created annealing softmax optimizer: {options} arms");
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Current selection probability per arm; removed arms get zero
    pub fn probabilities(&self) -> Vec<f64> {
        Self::distribution(&self.state.read())
    }

    /// Current temperature
    pub fn temperature(&self) -> f64 {
        Self::temperature_for(self.state.read().total_trials())
    }

    fn temperature_for(total_trials: i64) -> f64 {
        1.0 / (total_trials as f64 + TEMPERATURE_OFFSET).ln()
    }

    fn distribution(state: &ArmState) -> Vec<f64> {
        let temperature = Self::temperature_for(state.total_trials());
        let rewards = state.rewards();

        // Shifting by the max leaves the ratios unchanged and keeps exp() finite.
        let max = state
            .active()
            .map(|i| rewards[i])
            .fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = (0..state.len())
            .map(|i| {
                if state.is_active(i) {
                    ((rewards[i] - max) / temperature).exp()
                } else {
                    0.0
                }
            })
            .collect();

        let z = vector::sum(&weights);
        if z.is_finite() && z > 0.0 {
            return weights.into_iter().map(|w| w / z).collect();
        }

        let active = state.active_count();
        if active > 0 {
            log::trace!(target: "mab", "softmax weights degenerate at temperature {temperature}, using uniform");
        }
        (0..state.len())
            .map(|i| {
                if state.is_active(i) {
                    1.0 / active as f64
                } else {
                    0.0
                }
            })
            .collect()
    }
}

impl Optimizer for AnnealingSoftmax {
    fn name(&self) -> &'static str {
        "softmax"
    }

    fn select(&self, rng: &mut dyn rand::RngCore) -> Option<usize> {
        let probabilities = Self::distribution(&self.state.read());
        let u: f64 = rng.random();
        vector::bounded_sum(&probabilities, u)
    }

    fn update(&self, arm: usize, reward: f64) -> Result<()> {
        self.state.write().record(arm, reward)
    }

    fn extend(&self, n: usize) {
        let mut state = self.state.write();
        state.extend(n);
        log::debug!(target: "mab", "softmax extended by {n} to {} arms", state.len());
    }

    fn remove(&self, arm: usize) {
        if self.state.write().remove(arm) {
            log::debug!(target: "mab", "softmax removed arm {arm}");
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
