//! Reduction kernels: sequential, pairwise (tree) and compensated summation
//!
//! All kernels accumulate in the arithmetic precision of their input element
//! type, so an `f32` buffer is reduced with `f32` rounding after every
//! addition. The `f64` reference is obtained by running the same kernels on
//! the original `f64` samples.
//!
//! # Error Growth
//!
//! | Strategy      | Worst-case bound                     | Notes                          |
//! |---------------|--------------------------------------|--------------------------------|
//! | `Sequential`  | `(N - 1) * u * sum(abs(x))`          | one add per element, CPU-style |
//! | `Tree`        | `ceil(log2 N) * u * sum(abs(x))`     | pairwise, GPU-style            |
//! | `Compensated` | `2 * u * sum(abs(x))` + `O(N u^2)`   | Kahan, carries a correction    |
//!
//! where `u` is the unit roundoff of the element type
//! ([`DType::unit_roundoff`](crate::dtype::DType::unit_roundoff)).

use crate::dtype::Element;
use crate::error::{Error, Result};
use std::fmt;

/// Reduction strategy
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReduceStrategy {
    /// Left-to-right accumulation, one element at a time
    #[default]
    Sequential,
    /// Pairwise divide-and-conquer over halves of the index range
    Tree,
    /// Kahan compensated left-to-right accumulation
    Compensated,
}

impl ReduceStrategy {
    /// Short name for display
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Tree => "tree",
            Self::Compensated => "compensated",
        }
    }
}

impl fmt::Display for ReduceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split point of the half-open range `[start, end)`.
///
/// The left half gets `len / 2` elements, the right half the rest. Both the
/// serial and the parallel tree reductions use this so they combine exactly
/// the same partial sums.
#[inline]
pub(crate) fn split_point(start: usize, end: usize) -> usize {
    start + (end - start) / 2
}

/// Sum `values` left to right: `acc = acc + values[i]`.
///
/// Returns `Error::InvalidArgument` for an empty slice.
pub fn sequential_sum<T: Element>(values: &[T]) -> Result<T> {
    let (&first, rest) = values
        .split_first()
        .ok_or_else(|| Error::empty_input("values"))?;
    Ok(rest.iter().fold(first, |acc, &v| acc + v))
}

/// Pairwise (tree) sum of `values`.
///
/// Splits the sequence into two near-equal halves, reduces each recursively
/// and adds the two partial results. A one-element range returns its element
/// unchanged. Element order is preserved; nothing is sorted or permuted.
///
/// Returns `Error::InvalidArgument` for an empty slice.
pub fn tree_sum<T: Element>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(Error::empty_input("values"));
    }
    Ok(tree_sum_range(values, 0, values.len()))
}

/// Tree sum over `values[start..end]`. Requires `start < end <= values.len()`.
pub(crate) fn tree_sum_range<T: Element>(values: &[T], start: usize, end: usize) -> T {
    debug_assert!(start < end && end <= values.len());
    if end - start == 1 {
        return values[start];
    }
    let mid = split_point(start, end);
    tree_sum_range(values, start, mid) + tree_sum_range(values, mid, end)
}

/// Kahan compensated sum of `values`.
///
/// Returns `Error::InvalidArgument` for an empty slice.
pub fn compensated_sum<T: Element>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(Error::empty_input("values"));
    }
    let mut acc = KahanAccumulator::new();
    for &v in values {
        acc.add(v);
    }
    Ok(acc.value())
}

/// Reduce `values` with the given strategy.
pub fn reduce<T: Element>(values: &[T], strategy: ReduceStrategy) -> Result<T> {
    match strategy {
        ReduceStrategy::Sequential => sequential_sum(values),
        ReduceStrategy::Tree => tree_sum(values),
        ReduceStrategy::Compensated => compensated_sum(values),
    }
}

/// Dot product of `a` and `b`: element-wise multiply, then reduce with `strategy`.
///
/// Each product is rounded to `T` before it is accumulated. The tree variant
/// forms products at the leaves of the range recursion, so no product buffer
/// is allocated.
///
/// # Errors
///
/// - `Error::ShapeMismatch` if `a` and `b` differ in length
/// - `Error::InvalidArgument` if both are empty
pub fn dot_product<T: Element>(a: &[T], b: &[T], strategy: ReduceStrategy) -> Result<T> {
    validate_dot_operands(a, b)?;

    let result = match strategy {
        ReduceStrategy::Sequential => {
            let mut products = a.iter().zip(b).map(|(&x, &y)| x * y);
            // validate_dot_operands guarantees at least one element
            let first = products.next().unwrap_or_else(T::zero);
            products.fold(first, |acc, p| acc + p)
        }
        ReduceStrategy::Tree => tree_dot_range(a, b, 0, a.len()),
        ReduceStrategy::Compensated => {
            let mut acc = KahanAccumulator::new();
            for (&x, &y) in a.iter().zip(b) {
                acc.add(x * y);
            }
            acc.value()
        }
    };
    Ok(result)
}

/// Check that dot product operands are non-empty and of equal length.
pub(crate) fn validate_dot_operands<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::shape_mismatch(&[a.len()], &[b.len()]));
    }
    if a.is_empty() {
        return Err(Error::empty_input("a"));
    }
    Ok(())
}

/// Tree dot product over `[start, end)`. Requires `start < end <= a.len() == b.len()`.
pub(crate) fn tree_dot_range<T: Element>(a: &[T], b: &[T], start: usize, end: usize) -> T {
    debug_assert!(start < end && end <= a.len() && a.len() == b.len());
    if end - start == 1 {
        return a[start] * b[start];
    }
    let mid = split_point(start, end);
    tree_dot_range(a, b, start, mid) + tree_dot_range(a, b, mid, end)
}

/// Absolute error of `candidate` against `reference`: `|reference - candidate|`.
///
/// The candidate is widened to `f64` (exactly) before the subtraction. NaN
/// and infinities propagate.
#[inline]
pub fn absolute_error<T: Element>(reference: f64, candidate: T) -> f64 {
    (reference - candidate.to_f64()).abs()
}

/// Running Kahan sum in the precision of `T`
#[derive(Copy, Clone, Debug)]
pub struct KahanAccumulator<T: Element> {
    sum: T,
    compensation: T,
}

impl<T: Element> KahanAccumulator<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            compensation: T::zero(),
        }
    }

    /// Add one value
    #[inline]
    pub fn add(&mut self, value: T) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    /// Current compensated sum
    #[inline]
    pub fn value(&self) -> T {
        self.sum
    }
}

impl<T: Element> Default for KahanAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}
