//! Common test utilities
#![allow(dead_code)]

use redacc::prelude::*;

/// Install a tracing subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Comparator with the given seed and default settings
pub fn comparator(seed: u64) -> ReductionAccuracyComparator {
    ReductionAccuracyComparator::new(ComparatorConfig::new().with_seed(seed))
}

/// Narrow f32 copy of `n` seeded uniform samples
pub fn narrow_samples(n: usize, seed: u64) -> (SampleBuffer, Vec<f32>) {
    let samples = generate_samples(n, seed).unwrap();
    let narrow = cast_narrow::<f32>(&samples);
    (samples, narrow)
}

/// Assert `a` is within `tol` of `b`
pub fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
    let diff = (a - b).abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        diff,
        tol
    );
}
