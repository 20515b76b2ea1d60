#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::ConfigError;
use crate::board::EvalMode;

/// Deepest supported horizon is `MAX_SEARCH_DEPTH - 1`.
pub const MAX_SEARCH_DEPTH: usize = 10;

/// Default horizon: the engine's move, the reply, and its answer.
pub const DEFAULT_SEARCH_DEPTH: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Recursion depth at which positions are scored instead of expanded.
    /// Depth 0 scores directly after the root move.
    pub depth: usize,
    pub eval_mode: EvalMode,
    /// Leaf scores get a uniform random offset in `-jitter..=jitter`.
    /// Zero keeps the search deterministic.
    pub jitter: u16,
    /// RNG seed for the jitter; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_SEARCH_DEPTH,
            eval_mode: EvalMode::Full,
            jitter: 0,
            seed: None,
        }
    }
}

impl SearchParams {
    pub fn with_depth(mut self, depth: usize) -> Result<Self, ConfigError> {
        self.depth = depth;
        self.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn with_eval_mode(mut self, mode: EvalMode) -> Self {
        self.eval_mode = mode;
        self
    }

    #[must_use]
    pub fn with_jitter(mut self, jitter: u16) -> Self {
        self.jitter = jitter;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth >= MAX_SEARCH_DEPTH {
            return Err(ConfigError::DepthOutOfRange {
                depth: self.depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(())
    }
}
