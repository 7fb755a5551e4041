//! Reduction accuracy comparison
//!
//! [`ReductionAccuracyComparator`] draws a seeded uniform sample buffer,
//! computes its sum and its dot product with itself in double precision (the
//! reference), rounds the buffer to a narrow precision, reduces it
//! sequentially, pairwise and with Kahan compensation, and reports each narrow
//! result's absolute error against the reference.
//!
//! ```
//! # use redacc::prelude::*;
//! let comparator = ReductionAccuracyComparator::new(
//!     ComparatorConfig::new().with_seed(7),
//! );
//! let c = comparator.compute_comparison(10_000)?;
//! assert!((c.reference_sum - 5_000.0).abs() < 200.0);
//! # Ok::<(), redacc::error::Error>(())
//! ```

mod config;
mod report;
mod trials;

pub use config::ComparatorConfig;
pub use report::{
    Comparison, ComparisonReport, ErrorMeasurement, ReducedValue, ReductionKind, ReductionReport,
};
pub use trials::TrialSummary;

use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::ops::{
    ReduceStrategy, absolute_error, cast_narrow, compensated_sum, dot_product, par_tree_dot,
    par_tree_sum, sequential_sum,
};
use crate::random::{SampleBuffer, generate_samples};

/// Compares narrow-precision sequential and tree reductions against an f64 reference
#[derive(Clone, Debug, Default)]
pub struct ReductionAccuracyComparator {
    config: ComparatorConfig,
}

impl ReductionAccuracyComparator {
    /// Create a comparator
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// The comparator's configuration
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Six-scalar comparison over `n` samples drawn from the configured seed.
    ///
    /// Returns `Error::InvalidArgument` if `n` is zero.
    pub fn compute_comparison(&self, n: usize) -> Result<Comparison> {
        Ok(self.measure(n)?.summary())
    }

    /// Full comparison report over `n` samples drawn from the configured seed
    pub fn measure(&self, n: usize) -> Result<ComparisonReport> {
        self.measure_seeded(n, self.config.seed())
    }

    /// Full comparison report over `n` samples drawn from `seed`
    pub(crate) fn measure_seeded(&self, n: usize, seed: u64) -> Result<ComparisonReport> {
        let samples = generate_samples(n, seed)?;
        self.compare_buffer(&samples)
    }

    /// Full comparison report over an existing sample buffer
    pub fn compare_buffer(&self, samples: &SampleBuffer) -> Result<ComparisonReport> {
        let values = samples.as_slice();
        let reference_sum = sequential_sum(values)?;
        let reference_dot = dot_product(values, values, ReduceStrategy::Sequential)?;

        let narrow = self.config.narrow();
        let (sum, dot) = crate::dispatch_float!(narrow, T => {
            self.reduce_narrow::<T>(values, reference_sum, reference_dot)
        }, "compare_buffer")?;

        tracing::debug!(
            n = samples.len(),
            seed = samples.seed(),
            dtype = %narrow,
            reference_sum,
            sequential_sum_error = sum.sequential.absolute_error,
            tree_sum_error = sum.tree.absolute_error,
            sequential_dot_error = dot.sequential.absolute_error,
            tree_dot_error = dot.tree.absolute_error,
            "reduction comparison"
        );

        Ok(ComparisonReport {
            n: samples.len(),
            seed: samples.seed(),
            narrow,
            sum,
            dot,
        })
    }

    fn reduce_narrow<T: Element>(
        &self,
        values: &[f64],
        reference_sum: f64,
        reference_dot: f64,
    ) -> Result<(ReductionReport, ReductionReport)> {
        let narrow: Vec<T> = cast_narrow(values);
        let parallelism = self.config.parallelism();

        let sum = ReductionReport {
            reference: reference(reference_sum),
            sequential: measure::<T>(
                ReductionKind::NarrowSequential,
                reference_sum,
                sequential_sum(&narrow)?,
            ),
            tree: measure::<T>(
                ReductionKind::NarrowTree,
                reference_sum,
                par_tree_sum(&narrow, parallelism)?,
            ),
            compensated: measure::<T>(
                ReductionKind::NarrowCompensated,
                reference_sum,
                compensated_sum(&narrow)?,
            ),
        };

        let dot = ReductionReport {
            reference: reference(reference_dot),
            sequential: measure::<T>(
                ReductionKind::NarrowSequential,
                reference_dot,
                dot_product(&narrow, &narrow, ReduceStrategy::Sequential)?,
            ),
            tree: measure::<T>(
                ReductionKind::NarrowTree,
                reference_dot,
                par_tree_dot(&narrow, &narrow, parallelism)?,
            ),
            compensated: measure::<T>(
                ReductionKind::NarrowCompensated,
                reference_dot,
                dot_product(&narrow, &narrow, ReduceStrategy::Compensated)?,
            ),
        };

        Ok((sum, dot))
    }
}

fn reference(value: f64) -> ReducedValue {
    ReducedValue {
        kind: ReductionKind::Reference,
        dtype: DType::F64,
        value,
    }
}

fn measure<T: Element>(kind: ReductionKind, reference: f64, candidate: T) -> ErrorMeasurement {
    ErrorMeasurement {
        candidate: ReducedValue {
            kind,
            dtype: T::DTYPE,
            value: candidate.to_f64(),
        },
        absolute_error: absolute_error(reference, candidate),
    }
}

/// Six-scalar comparison over `n` samples drawn from `seed`, with default settings.
///
/// Returns `Error::InvalidArgument` if `n` is zero.
pub fn compute_comparison(n: usize, seed: u64) -> Result<Comparison> {
    ReductionAccuracyComparator::new(ComparatorConfig::new().with_seed(seed)).compute_comparison(n)
}
