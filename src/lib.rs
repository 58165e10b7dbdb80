//! mab: thread-safe multi-armed bandit optimizers.
//!
//! Each optimizer tracks a fixed, index-addressed set of arms and chooses
//! which one to try next, balancing exploration of under-sampled arms against
//! exploitation of the best one seen so far. Four strategies share the
//! [`Optimizer`] contract: epsilon-greedy, UCB1, annealing softmax and
//! Beta-Bernoulli Thompson sampling.
//!
//! # Quick Start
//!
//! ```
//! use mab::prelude::*;
//! use rand::SeedableRng;
//!
//! // Three arms, exploring 10% of the time
//! let optimizer = EpsilonGreedy::new(3, 0.1).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! for _ in 0..100 {
//!     let arm = optimizer.select(&mut rng).unwrap();
//!     // Act on the arm, observe a reward, report it back
//!     let reward = if arm == 2 { 1.0 } else { 0.0 };
//!     optimizer.update(arm, reward).unwrap();
//! }
//!
//! // Retire an arm, add two new ones; indices stay stable
//! optimizer.remove(0);
//! optimizer.extend(2);
//! assert_eq!(optimizer.counts().len(), 5);
//!
//! // Stop exploring once the leader is clearly ahead
//! let _done = optimizer.significant(0.05);
//! ```

mod arms;
pub mod config;
mod error;
mod optimizer;
pub mod policies;
pub mod significance;
pub mod vector;

// Re-export main types
pub use arms::REMOVED;
pub use error::{OptimizerError, Result};
pub use optimizer::Optimizer;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use mab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{LearningPolicy, OptimizerConfig};
    pub use crate::policies::{
        AnnealingSoftmax, EpsilonGreedy, Strategy, ThompsonSampling, UpperConfidenceBound,
    };
    pub use crate::{Optimizer, OptimizerError, Result};
}
