//! Serializable strategy selection.
//!
//! A host can keep the choice of strategy in its own configuration file and
//! build the optimizer from it:
//!
//! ```
//! use mab::config::OptimizerConfig;
//! use mab::Optimizer;
//!
//! let config: OptimizerConfig =
//!     serde_json::from_str(r#"{"options": 3, "policy": "epsilon_greedy", "epsilon": 0.1}"#)
//!         .unwrap();
//! let optimizer = config.build().unwrap();
//! assert_eq!(optimizer.n_arms(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::policies::{
    AnnealingSoftmax, EpsilonGreedy, Strategy, ThompsonSampling, UpperConfidenceBound,
};

/// Which strategy to build, with its parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum LearningPolicy {
    EpsilonGreedy { epsilon: f64 },
    Ucb,
    Softmax,
    Thompson,
}

impl LearningPolicy {
    /// Builds the strategy over `options` arms
    ///
    /// # Errors
    /// Whatever the strategy's constructor rejects: too few options, or an
    /// epsilon outside `[0, 1]`.
    pub fn build(self, options: usize) -> Result<Strategy> {
        Ok(match self {
            LearningPolicy::EpsilonGreedy { epsilon } => {
                EpsilonGreedy::new(options, epsilon)?.into()
            }
            LearningPolicy::Ucb => UpperConfidenceBound::new(options)?.into(),
            LearningPolicy::Softmax => AnnealingSoftmax::new(options)?.into(),
            LearningPolicy::Thompson => ThompsonSampling::new(options)?.into(),
        })
    }
}

/// Arm count plus strategy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    pub options: usize,
    #[serde(flatten)]
    pub policy: LearningPolicy,
}

impl OptimizerConfig {
    pub fn new(options: usize, policy: LearningPolicy) -> Self {
        Self { options, policy }
    }

    /// Builds the configured strategy
    pub fn build(&self) -> Result<Strategy> {
        self.policy.build(self.options)
    }
}
