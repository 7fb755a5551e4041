//! Multi-threaded tree reduction
//!
//! The two halves of a tree reduction are independent, so they can be reduced
//! concurrently with `rayon::join`. The split points are the ones the serial
//! [`tree_sum`](super::tree_sum) uses and the partials are recombined by the
//! same final addition, so the parallel result is bit-identical to the serial
//! one. Ranges shorter than [`ParallelismConfig::min_len`] are reduced
//! serially to keep task overhead below the cost of the additions.
//!
//! Without the `rayon` feature these functions run the serial recursion.

use super::reduce::{split_point, tree_dot_range, tree_sum_range, validate_dot_operands};
use crate::dtype::Element;
use crate::error::{Error, Result};

/// Default minimum range length for spawning parallel work
pub const DEFAULT_MIN_LEN: usize = 1 << 15;

/// Parallelism configuration for tree reductions
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParallelismConfig {
    enabled: bool,
    min_len: usize,
}

impl ParallelismConfig {
    /// Parallel reduction with the default minimum range length.
    ///
    /// Without the `rayon` feature the configuration is accepted but the
    /// reduction runs serially.
    pub const fn new() -> Self {
        Self {
            enabled: cfg!(feature = "rayon"),
            min_len: DEFAULT_MIN_LEN,
        }
    }

    /// Serial reduction only
    pub const fn serial() -> Self {
        Self {
            enabled: false,
            min_len: DEFAULT_MIN_LEN,
        }
    }

    /// Set the minimum range length below which a range is reduced serially.
    ///
    /// Returns `Error::InvalidArgument` for zero.
    pub fn with_min_len(mut self, min_len: usize) -> Result<Self> {
        if min_len == 0 {
            return Err(Error::invalid_argument("min_len", "must be at least 1"));
        }
        self.min_len = min_len;
        Ok(self)
    }

    /// Enable or disable parallel reduction
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether parallel reduction is requested
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Minimum range length for spawning parallel work
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Whether a range of `len` elements should be split across threads
    #[inline]
    fn should_split(&self, len: usize) -> bool {
        cfg!(feature = "rayon") && self.enabled && len > self.min_len
    }
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tree sum of `values`, reducing independent halves on the rayon pool.
///
/// Bit-identical to [`tree_sum`](super::tree_sum). Returns
/// `Error::InvalidArgument` for an empty slice.
pub fn par_tree_sum<T: Element>(values: &[T], config: &ParallelismConfig) -> Result<T> {
    if values.is_empty() {
        return Err(Error::empty_input("values"));
    }
    Ok(par_tree_sum_range(values, 0, values.len(), config))
}

/// Tree dot product of `a` and `b`, reducing independent halves on the rayon pool.
///
/// Bit-identical to [`dot_product`](super::dot_product) with
/// [`ReduceStrategy::Tree`](super::ReduceStrategy::Tree).
pub fn par_tree_dot<T: Element>(a: &[T], b: &[T], config: &ParallelismConfig) -> Result<T> {
    validate_dot_operands(a, b)?;
    Ok(par_tree_dot_range(a, b, 0, a.len(), config))
}

fn par_tree_sum_range<T: Element>(
    values: &[T],
    start: usize,
    end: usize,
    config: &ParallelismConfig,
) -> T {
    if !config.should_split(end - start) {
        return tree_sum_range(values, start, end);
    }
    let mid = split_point(start, end);
    let (left, right) = join(
        || par_tree_sum_range(values, start, mid, config),
        || par_tree_sum_range(values, mid, end, config),
    );
    left + right
}

fn par_tree_dot_range<T: Element>(
    a: &[T],
    b: &[T],
    start: usize,
    end: usize,
    config: &ParallelismConfig,
) -> T {
    if !config.should_split(end - start) {
        return tree_dot_range(a, b, start, end);
    }
    let mid = split_point(start, end);
    let (left, right) = join(
        || par_tree_dot_range(a, b, start, mid, config),
        || par_tree_dot_range(a, b, mid, end, config),
    );
    left + right
}

#[cfg(feature = "rayon")]
#[inline]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "rayon"))]
#[inline]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}
