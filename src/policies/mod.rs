//! The bandit strategies and a closed enum over them.

mod epsilon_greedy;
mod softmax;
mod thompson;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use softmax::AnnealingSoftmax;
pub use thompson::ThompsonSampling;
pub use ucb::UpperConfidenceBound;

use crate::error::Result;
use crate::optimizer::Optimizer;

/// Any of the built-in strategies, chosen at construction time
///
/// Lets a host hold a concrete, sized optimizer without boxing while still
/// swapping the strategy through configuration.
#[derive(Debug)]
pub enum Strategy {
    EpsilonGreedy(EpsilonGreedy),
    UpperConfidenceBound(UpperConfidenceBound),
    AnnealingSoftmax(AnnealingSoftmax),
    ThompsonSampling(ThompsonSampling),
}

macro_rules! delegate {
    ($self:ident, $inner:ident => $call:expr) => {
        match $self {
            Strategy::EpsilonGreedy($inner) => $call,
            Strategy::UpperConfidenceBound($inner) => $call,
            Strategy::AnnealingSoftmax($inner) => $call,
            Strategy::ThompsonSampling($inner) => $call,
        }
    };
}

impl Optimizer for Strategy {
    fn name(&self) -> &'static str {
        delegate!(self, o => o.name())
    }

    fn select(&self, rng: &mut dyn rand::RngCore) -> Option<usize> {
        delegate!(self, o => o.select(rng))
    }

    fn update(&self, arm: usize, reward: f64) -> Result<()> {
        delegate!(self, o => o.update(arm, reward))
    }

    fn extend(&self, n: usize) {
        delegate!(self, o => o.extend(n))
    }

    fn remove(&self, arm: usize) {
        delegate!(self, o => o.remove(arm))
    }

    fn significant(&self, pvalue: f64) -> bool {
        delegate!(self, o => o.significant(pvalue))
    }

    fn counts(&self) -> Vec<i64> {
        delegate!(self, o => o.counts())
    }

    fn rewards(&self) -> Vec<f64> {
        delegate!(self, o => o.rewards())
    }
}

impl From<EpsilonGreedy> for Strategy {
    fn from(value: EpsilonGreedy) -> Self {
        Strategy::EpsilonGreedy(value)
    }
}

impl From<UpperConfidenceBound> for Strategy {
    fn from(value: UpperConfidenceBound) -> Self {
        Strategy::UpperConfidenceBound(value)
    }
}

impl From<AnnealingSoftmax> for Strategy {
    fn from(value: AnnealingSoftmax) -> Self {
        Strategy::AnnealingSoftmax(value)
    }
}

impl From<ThompsonSampling> for Strategy {
    fn from(value: ThompsonSampling) -> Self {
        Strategy::ThompsonSampling(value)
    }
}
