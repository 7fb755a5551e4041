//! Comparator configuration

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ops::ParallelismConfig;

/// Configuration for a [`ReductionAccuracyComparator`](super::ReductionAccuracyComparator)
///
/// ```
/// # use redacc::prelude::*;
/// let config = ComparatorConfig::new()
///     .with_seed(2024)
///     .with_parallelism(ParallelismConfig::serial());
/// assert_eq!(config.seed(), 2024);
/// assert_eq!(config.narrow(), DType::F32);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ComparatorConfig {
    seed: u64,
    narrow: DType,
    parallelism: ParallelismConfig,
}

impl ComparatorConfig {
    /// Seed 0, `F32` narrow precision, default parallelism
    pub const fn new() -> Self {
        Self {
            seed: 0,
            narrow: DType::F32,
            parallelism: ParallelismConfig::new(),
        }
    }

    /// Set the seed used to generate sample buffers.
    ///
    /// Multi-trial runs derive per-trial seeds from it (`seed + trial`).
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the narrow precision the samples are reduced in.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidArgument` for `F64`, which is the reference precision
    /// - `Error::UnsupportedDType` for `F16`/`BF16` without the `f16` feature
    pub fn with_narrow(mut self, narrow: DType) -> Result<Self> {
        if !narrow.is_narrow() {
            return Err(Error::invalid_argument(
                "narrow",
                format!("{narrow} is the reference precision, not a narrow one"),
            ));
        }
        if !cfg!(feature = "f16") && matches!(narrow, DType::F16 | DType::BF16) {
            return Err(Error::unsupported_dtype(narrow, "with_narrow"));
        }
        self.narrow = narrow;
        Ok(self)
    }

    /// Set the parallelism used by tree reductions
    pub const fn with_parallelism(mut self, parallelism: ParallelismConfig) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Base seed
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Narrow precision
    pub const fn narrow(&self) -> DType {
        self.narrow
    }

    /// Tree reduction parallelism
    pub const fn parallelism(&self) -> &ParallelismConfig {
        &self.parallelism
    }
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
