//! Reduced values, error measurements and comparison records

use crate::dtype::DType;
use crate::ops::ReduceStrategy;
use std::fmt;

/// Which precision/algorithm pair produced a reduced value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReductionKind {
    /// Double precision, sequential: the ground truth
    Reference,
    /// Narrow precision, sequential
    NarrowSequential,
    /// Narrow precision, pairwise tree
    NarrowTree,
    /// Narrow precision, Kahan compensated
    NarrowCompensated,
}

impl ReductionKind {
    /// Reduction strategy used by this kind
    pub const fn strategy(self) -> ReduceStrategy {
        match self {
            Self::Reference | Self::NarrowSequential => ReduceStrategy::Sequential,
            Self::NarrowTree => ReduceStrategy::Tree,
            Self::NarrowCompensated => ReduceStrategy::Compensated,
        }
    }

    /// Narrow kind for a reduction strategy
    pub const fn narrow(strategy: ReduceStrategy) -> Self {
        match strategy {
            ReduceStrategy::Sequential => Self::NarrowSequential,
            ReduceStrategy::Tree => Self::NarrowTree,
            ReduceStrategy::Compensated => Self::NarrowCompensated,
        }
    }
}

impl fmt::Display for ReductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            other => write!(f, "narrow-{}", other.strategy()),
        }
    }
}

/// A scalar reduction result tagged with its precision and algorithm
///
/// `value` is widened to `f64`; the widening is exact, so it carries the
/// narrow result bit for bit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReducedValue {
    /// Algorithm that produced the value
    pub kind: ReductionKind,
    /// Precision the reduction ran in
    pub dtype: DType,
    /// The result, widened to f64
    pub value: f64,
}

/// A narrow reduced value and its absolute error against the reference
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ErrorMeasurement {
    /// The narrow result
    pub candidate: ReducedValue,
    /// `|reference - candidate|`
    pub absolute_error: f64,
}

/// Reference value and narrow measurements for one reduction (sum or dot)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReductionReport {
    /// Double precision sequential result
    pub reference: ReducedValue,
    /// Narrow sequential result
    pub sequential: ErrorMeasurement,
    /// Narrow tree result
    pub tree: ErrorMeasurement,
    /// Narrow compensated result
    pub compensated: ErrorMeasurement,
}

impl ReductionReport {
    /// All narrow measurements
    pub fn measurements(&self) -> [&ErrorMeasurement; 3] {
        [&self.sequential, &self.tree, &self.compensated]
    }

    /// Measurement for a strategy
    pub fn measurement(&self, strategy: ReduceStrategy) -> &ErrorMeasurement {
        match strategy {
            ReduceStrategy::Sequential => &self.sequential,
            ReduceStrategy::Tree => &self.tree,
            ReduceStrategy::Compensated => &self.compensated,
        }
    }

    /// True when the tree error does not exceed the sequential error
    pub fn tree_at_least_as_accurate(&self) -> bool {
        self.tree.absolute_error <= self.sequential.absolute_error
    }
}

/// Full result of one comparison run
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    /// Number of samples
    pub n: usize,
    /// Seed of the sample buffer
    pub seed: u64,
    /// Narrow precision
    pub narrow: DType,
    /// Sum of the samples
    pub sum: ReductionReport,
    /// Dot product of the samples with themselves
    pub dot: ReductionReport,
}

impl ComparisonReport {
    /// The six-scalar summary
    pub fn summary(&self) -> Comparison {
        Comparison {
            reference_sum: self.sum.reference.value,
            sequential_sum_error: self.sum.sequential.absolute_error,
            tree_sum_error: self.sum.tree.absolute_error,
            reference_dot: self.dot.reference.value,
            sequential_dot_error: self.dot.sequential.absolute_error,
            tree_dot_error: self.dot.tree.absolute_error,
        }
    }
}

/// Sum and dot-product accuracy of sequential vs tree reduction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Comparison {
    /// Double precision sum of the samples
    pub reference_sum: f64,
    /// Absolute error of the narrow sequential sum
    pub sequential_sum_error: f64,
    /// Absolute error of the narrow tree sum
    pub tree_sum_error: f64,
    /// Double precision dot product of the samples with themselves
    pub reference_dot: f64,
    /// Absolute error of the narrow sequential dot product
    pub sequential_dot_error: f64,
    /// Absolute error of the narrow tree dot product
    pub tree_dot_error: f64,
}

impl From<&ComparisonReport> for Comparison {
    fn from(report: &ComparisonReport) -> Self {
        report.summary()
    }
}
