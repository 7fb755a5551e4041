//! # redacc
//!
//! **Floating-point reduction accuracy: sequential vs pairwise (tree) summation.**
//!
//! GPUs reduce in trees, CPUs classically accumulate left to right. With the
//! same narrow precision the two orders give different answers: a sequential
//! sum of N terms accumulates rounding error like `O(N * u * sum(|x|))`, a
//! pairwise sum like `O(log N * u * sum(|x|))`. redacc measures that gap.
//!
//! ## Features
//!
//! - **Kernels**: sequential, tree and Kahan-compensated sums and dot
//!   products, generic over the element type
//! - **Reproducible samples**: uniform `[0, 1)` buffers from an explicit seed
//! - **Comparator**: f64 reference vs narrow-precision results, absolute errors
//! - **Statistics**: mean errors and win rates over seeded trials, size sweeps
//! - **Parallel tree reduction**: bit-identical to the serial tree
//!
//! ## Quick Start
//!
//! ```
//! use redacc::prelude::*;
//!
//! let c = compute_comparison(100_000, 42)?;
//! assert!(c.tree_sum_error <= c.sequential_sum_error);
//!
//! let samples = generate_samples(1_000, 42)?;
//! let narrow: Vec<f32> = cast_narrow(&samples);
//! let seq = sequential_sum(&narrow)?;
//! let tree = tree_sum(&narrow)?;
//! let reference = sequential_sum(&samples)?;
//! let _ = (absolute_error(reference, seq), absolute_error(reference, tree));
//! # Ok::<(), redacc::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded tree reduction
//! - `f16`: half-precision narrow types (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparison;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod random;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::comparison::{
        ComparatorConfig, Comparison, ComparisonReport, ReductionAccuracyComparator,
        ReductionKind, TrialSummary, compute_comparison,
    };
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        ParallelismConfig, ReduceStrategy, absolute_error, cast_narrow, compensated_sum,
        dot_product, par_tree_dot, par_tree_sum, sequential_sum, tree_sum, widen,
    };
    pub use crate::random::{SampleBuffer, generate_samples};
}
