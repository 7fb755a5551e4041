//! Seeded sample generation
//!
//! Sample buffers are drawn from an explicitly seeded [`StdRng`], never from a
//! thread-local or global generator, so every comparison is reproducible from
//! its seed.

use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Deref;

/// Immutable buffer of i.i.d. uniform `f64` samples in `[0, 1)`
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer {
    values: Box<[f64]>,
    seed: u64,
}

impl SampleBuffer {
    /// The samples, in generation order
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples (always at least 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: empty buffers cannot be generated
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Seed the buffer was generated from
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Deref for SampleBuffer {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

/// Generate `n` independent uniform samples in `[0, 1)` from `seed`.
///
/// The same `(n, seed)` pair always yields a bit-identical buffer, and a
/// shorter buffer is a prefix of a longer one drawn from the same seed.
///
/// Returns `Error::InvalidArgument` if `n` is zero.
pub fn generate_samples(n: usize, seed: u64) -> Result<SampleBuffer> {
    if n == 0 {
        return Err(Error::invalid_argument("n", "must be at least 1"));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let values: Box<[f64]> = (0..n).map(|_| rng.random::<f64>()).collect();

    tracing::trace!(n, seed, "generated sample buffer");
    Ok(SampleBuffer { values, seed })
}
