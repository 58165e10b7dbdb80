//! The contract shared by every bandit strategy.

/// A multi-armed bandit optimizer over index-addressed arms.
///
/// Implementations guard their per-arm state with an internal lock, so every
/// method takes `&self` and an optimizer can be shared across threads behind
/// an `Arc`.
///
/// The host drives the loop: [`select`](Optimizer::select) an arm, act on it,
/// observe a reward and report it through [`update`](Optimizer::update).
/// Randomness comes only from the generator passed to `select`, which keeps
/// runs reproducible under a seeded RNG.
pub trait Optimizer: Send + Sync {
    /// Short strategy label, used in logs.
    fn name(&self) -> &'static str;

    /// Chooses an arm to try next
    ///
    /// # Returns
    /// The index of an active arm, or `None` once every arm has been removed
    fn select(&self, rng: &mut dyn rand::RngCore) -> Option<usize>;

    /// Records an observed reward for an arm
    ///
    /// # Errors
    /// - [`OptimizerError::Index`](crate::OptimizerError::Index) if `arm` is
    ///   not below the number of arms
    /// - [`OptimizerError::Reward`](crate::OptimizerError::Reward) if `reward`
    ///   is negative
    ///
    /// Updates to a removed arm succeed without changing anything.
    fn update(&self, arm: usize, reward: f64) -> crate::Result<()>;

    /// Appends `n` untried arms after the existing ones
    fn extend(&self, n: usize);

    /// Permanently deactivates an arm; out-of-range indices are ignored
    fn remove(&self, arm: usize);

    /// Whether the best arm beats the runner-up at the given p-value
    ///
    /// Only the two active arms with the highest reward rate take part. Arms
    /// are ranked by mean reward, so sum-accumulating optimizers divide by the
    /// pull count first, and the standard error of each arm uses the two
    /// compared rates' sum as its total score.
    fn significant(&self, pvalue: f64) -> bool;

    /// Snapshot of the per-arm trial counts; removed arms read as `-1`
    fn counts(&self) -> Vec<i64>;

    /// Snapshot of the per-arm reward accumulators
    fn rewards(&self) -> Vec<f64>;

    /// Number of arm slots, removed arms included
    fn n_arms(&self) -> usize {
        self.counts().len()
    }

    /// Indices of the arms that can still be selected
    fn active_arms(&self) -> Vec<usize> {
        self.counts()
            .iter()
            .enumerate()
            .filter(|(_, c)| **c >= 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether `arm` has been removed; unknown indices are not removed
    fn is_removed(&self, arm: usize) -> bool {
        self.counts().get(arm).is_some_and(|&c| c < 0)
    }

    /// [`select`](Optimizer::select) using the thread-local generator
    fn select_random(&self) -> Option<usize> {
        self.select(&mut rand::rng())
    }
}
