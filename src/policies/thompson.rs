use parking_lot::RwLock;
use rand_distr::{Beta, Distribution};

use crate::arms::{Accumulator, ArmState};
use crate::error::Result;
use crate::optimizer::Optimizer;
use crate::vector;

/// Thompson Sampling optimizer using Beta distributions
///
/// Each arm draws one sample from a Beta posterior and the highest sample
/// wins. While every observed reward is zero the posterior is the
/// count-based `Beta(pulls + 1, total_pulls - pulls + 1)`; once any positive
/// reward arrives it switches to the reward-weighted
/// `Beta(reward_sum + 1, total_reward_sum + 1)`. This lets one optimizer
/// serve click/no-click and continuous rewards alike.
///
/// Unlike the other optimizers, rewards are accumulated as a running sum.
#[derive(Debug)]
pub struct ThompsonSampling {
    state: RwLock<ArmState>,
}

/// Sample from `Beta(alpha, beta)`, falling back to its mean if the
/// parameters are rejected.
fn sample_beta(alpha: f64, beta: f64, rng: &mut dyn rand::RngCore) -> f64 {
    match Beta::new(alpha, beta) {
        Ok(dist) => dist.sample(rng),
        Err(_) => alpha / (alpha + beta),
    }
}

impl ThompsonSampling {
    /// Creates an optimizer over `options` arms
    ///
    /// # Errors
    /// [`OptimizerError::Options`](crate::OptimizerError::Options) if
    /// `options < 2`
    pub fn new(options: usize) -> Result<Self> {
        let state = ArmState::new(options, Accumulator::Sum)?;
        log::debug!(target: "mab", "created thompson sampling optimizer: {options} arms");
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Beta parameters each arm currently samples from; `None` for removed arms
    pub fn posteriors(&self) -> Vec<Option<(f64, f64)>> {
        Self::posteriors_of(&self.state.read())
    }

    /// Posterior parameters for every arm in a single pass over the totals.
    fn posteriors_of(state: &ArmState) -> Vec<Option<(f64, f64)>> {
        // Removed arms hold zero, so they never sway either branch.
        let rewards = state.rewards();
        let all_zero = vector::is_zero(rewards);
        let total_trials = state.total_trials();
        let total_reward = vector::sum(rewards);

        state
            .counts()
            .iter()
            .zip(rewards)
            .map(|(&count, &reward)| match count {
                c if c < 0 => None,
                c if all_zero => Some(((c + 1) as f64, (total_trials - c + 1) as f64)),
                _ => Some((reward + 1.0, total_reward + 1.0)),
            })
            .collect()
    }
}

impl Optimizer for ThompsonSampling {
    fn name(&self) -> &'static str {
        "thompson"
    }

    fn select(&self, rng: &mut dyn rand::RngCore) -> Option<usize> {
        let state = self.state.read();
        if state.active_count() == 0 {
            return None;
        }

        let scores: Vec<f64> = Self::posteriors_of(&state)
            .into_iter()
            .map(|posterior| match posterior {
                Some((alpha, beta)) => sample_beta(alpha, beta, rng),
                None => -1.0,
            })
            .collect();

        vector::max_index(&scores).map(|(arm, _)| arm)
    }

    fn update(&self, arm: usize, reward: f64) -> Result<()> {
        self.state.write().record(arm, reward)
    }

    fn extend(&self, n: usize) {
        let mut state = self.state.write();
        state.extend(n);
        log::debug!(target: "mab", "thompson extended by {n} to {} arms", state.len());
    }

    fn remove(&self, arm: usize) {
        if self.state.write().remove(arm) {
            log::debug!(target: "mab", "thompson removed arm {arm}");
        }
    }

    /// Compares reward rates, i.e. each arm's sum divided by its pulls
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
