//! Integration tests for the reduction kernels
//!
//! Tests verify:
//! - Single-element and empty-input behaviour
//! - Order preservation and determinism
//! - Casting round trips
//! - Parallel tree reduction parity

mod common;

use common::narrow_samples;
use redacc::prelude::*;

// ============================================================================
// Base Cases
// ============================================================================

#[test]
fn test_length_one_sums_agree_exactly() {
    for seed in 0..20 {
        let (samples, narrow) = narrow_samples(1, seed);

        let reference = sequential_sum(&samples).unwrap();
        assert_eq!(reference, samples[0]);
        assert_eq!(tree_sum(&samples).unwrap(), reference);

        let seq = sequential_sum(&narrow).unwrap();
        let tree = tree_sum(&narrow).unwrap();
        assert_eq!(seq, narrow[0]);
        assert_eq!(tree, narrow[0]);
    }
}

#[test]
fn test_empty_input_is_invalid_argument() {
    let empty: Vec<f32> = Vec::new();
    assert!(matches!(
        tree_sum(&empty),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        sequential_sum(&empty),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        dot_product(&empty, &empty, ReduceStrategy::Tree),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        generate_samples(0, 0),
        Err(Error::InvalidArgument { .. })
    ));
}

// ============================================================================
// Ordering and Determinism
// ============================================================================

#[test]
fn test_small_exact_inputs_agree() {
    // Small integers are exact in f32: both orders must give the exact answer
    let v: Vec<f32> = (1..=100).map(|i| i as f32).collect();
    assert_eq!(sequential_sum(&v).unwrap(), 5050.0);
    assert_eq!(tree_sum(&v).unwrap(), 5050.0);
}

#[test]
fn test_tree_consumes_original_order() {
    // Two orderings of the same values: the tree pairs neighbours as given,
    // so the results differ. A kernel that sorted its input could not tell
    // them apart.
    let v = [1.0f32, 1.0e8, -1.0e8, 1.0];
    let w = [1.0e8f32, -1.0e8, 1.0, 1.0];

    // (1 + 1e8) + (-1e8 + 1): both halves round the 1 away
    assert_eq!(tree_sum(&v).unwrap(), 0.0);
    // (1e8 - 1e8) + (1 + 1)
    assert_eq!(tree_sum(&w).unwrap(), 2.0);
}

#[test]
fn test_repeated_reductions_identical() {
    let (_, narrow) = narrow_samples(100_000, 9);
    for strategy in [
        ReduceStrategy::Sequential,
        ReduceStrategy::Tree,
        ReduceStrategy::Compensated,
    ] {
        let a = redacc::ops::reduce(&narrow, strategy).unwrap();
        let b = redacc::ops::reduce(&narrow, strategy).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "{strategy}");

        let a = dot_product(&narrow, &narrow, strategy).unwrap();
        let b = dot_product(&narrow, &narrow, strategy).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "{strategy}");
    }
}

#[test]
fn test_parallel_tree_matches_serial_tree() {
    let (_, narrow) = narrow_samples(262_147, 4);
    let config = ParallelismConfig::new().with_min_len(1_024).unwrap();

    assert_eq!(
        tree_sum(&narrow).unwrap().to_bits(),
        par_tree_sum(&narrow, &config).unwrap().to_bits()
    );
    assert_eq!(
        dot_product(&narrow, &narrow, ReduceStrategy::Tree)
            .unwrap()
            .to_bits(),
        par_tree_dot(&narrow, &narrow, &config).unwrap().to_bits()
    );
}

// ============================================================================
// Casting
// ============================================================================

#[test]
fn test_narrow_roundtrip_is_identity() {
    let (_, narrow) = narrow_samples(10_000, 5);
    let wide = widen(&narrow);
    let again = cast_narrow::<f32>(&wide);
    assert_eq!(narrow, again);
    for (&w, &n) in wide.iter().zip(&narrow) {
        assert_eq!(w, n as f64);
    }
}

#[test]
fn test_cast_error_is_bounded_by_unit_roundoff() {
    let (samples, narrow) = narrow_samples(10_000, 6);
    let u = DType::F32.unit_roundoff();
    for (&x, &y) in samples.iter().zip(&narrow) {
        assert!(absolute_error(x, y) <= u * x.abs(), "{x} -> {y}");
    }
}

// ============================================================================
// Error Bounds
// ============================================================================

#[test]
fn test_errors_within_classic_bounds() {
    let n = 65_536;
    let (samples, narrow) = narrow_samples(n, 8);
    let u = DType::F32.unit_roundoff();

    // Reference over the narrow values isolates the reduction error from the
    // cast error.
    let wide = widen(&narrow);
    let exact = sequential_sum(&wide).unwrap();
    let magnitude: f64 = wide.iter().map(|x| x.abs()).sum();

    let seq_err = absolute_error(exact, sequential_sum(&narrow).unwrap());
    let tree_err = absolute_error(exact, tree_sum(&narrow).unwrap());
    let comp_err = absolute_error(exact, compensated_sum(&narrow).unwrap());

    assert!(seq_err <= (n - 1) as f64 * u * magnitude);
    assert!(tree_err <= (n as f64).log2().ceil() * u * magnitude);
    assert!(comp_err <= 2.0 * u * magnitude + 1.0e-6);

    // Sanity: samples really are in [0, 1)
    assert!(samples.iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[cfg(feature = "f16")]
#[test]
fn test_half_precision_kernels() {
    let (samples, _) = narrow_samples(4_096, 10);
    let narrow = cast_narrow::<half::bf16>(&samples);
    let reference = sequential_sum(&samples).unwrap();

    let seq = absolute_error(reference, sequential_sum(&narrow).unwrap());
    let tree = absolute_error(reference, tree_sum(&narrow).unwrap());
    assert!(tree < seq, "tree={tree} seq={seq}");
}
