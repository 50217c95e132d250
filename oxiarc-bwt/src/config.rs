//! Pipeline configuration.

use crate::suffix::SortStrategy;

/// Block-sorting pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BwtConfig {
    /// Algorithm used to sort the rotations.
    pub strategy: SortStrategy,
    /// Whether the last column is Move-to-Front recoded on the wire.
    pub move_to_front: bool,
    /// Whether decoding checks the LF mapping before reconstructing.
    pub verify: bool,
}

impl BwtConfig {
    /// Full pipeline: BWT followed by Move-to-Front, unchecked decode.
    pub const DEFAULT: Self = Self {
        strategy: SortStrategy::Auto,
        move_to_front: true,
        verify: false,
    };

    /// Burrows-Wheeler stage only: the last column goes on the wire as is.
    pub const BWT_ONLY: Self = Self {
        strategy: SortStrategy::Auto,
        move_to_front: false,
        verify: false,
    };

    /// Full pipeline with a checked inverse transform.
    pub const STRICT: Self = Self {
        strategy: SortStrategy::Auto,
        move_to_front: true,
        verify: true,
    };

    /// Replace the sort strategy.
    pub fn with_strategy(mut self, strategy: SortStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable the checked inverse transform.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

impl Default for BwtConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
