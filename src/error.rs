//! Error types for the mab library.

use thiserror::Error;

/// Result type alias for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizerError>;

/// Errors that can occur when constructing or updating an optimizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    /// Fewer than two arms were requested at construction.
    #[error("an optimizer needs at least 2 options, got {options}")]
    Options { options: usize },

    /// The exploration probability is outside `[0, 1]`.
    #[error("epsilon must be between 0 and 1, got {epsilon}")]
    Epsilon { epsilon: f64 },

    /// The arm index does not address an existing slot.
    #[error("arm index {index} out of range for {len} arms")]
    Index { index: usize, len: usize },

    /// Rewards must be finite and non-negative.
    #[error("reward must be finite and non-negative, got {reward}")]
    Reward { reward: f64 },
}
