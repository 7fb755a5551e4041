//! Statistical accuracy tests for sequential vs tree reduction
//!
//! Single trials can favour either strategy, so these tests assert on win
//! rates and on mean errors over seeded trials, never on literal values.

mod common;

use common::{assert_close, comparator, init_tracing};
use redacc::prelude::*;

#[test]
fn test_million_samples_tree_wins_sum_and_dot() {
    init_tracing();
    let summary = comparator(1_000).run_trials(1_000_000, 100).unwrap();

    assert_eq!(summary.trials, 100);
    assert!(
        summary.sum_tree_win_rate >= 0.9,
        "sum win rate {}",
        summary.sum_tree_win_rate
    );
    assert!(
        summary.dot_tree_win_rate >= 0.9,
        "dot win rate {}",
        summary.dot_tree_win_rate
    );

    // Uniform [0, 1): sum ~ N/2 with std sqrt(N/12), dot ~ N/3
    assert_close(summary.mean_reference_sum, 500_000.0, 1_000.0, "mean sum");
    assert_close(summary.mean_reference_dot, 333_333.3, 1_000.0, "mean dot");
}

#[test]
fn test_single_million_sample_reference_magnitude() {
    let c = compute_comparison(1_000_000, 77).unwrap();
    // 0.5 * N +- several standard deviations (std ~ 289)
    assert_close(c.reference_sum, 500_000.0, 3_000.0, "reference sum");
    assert!(c.sequential_sum_error.is_finite());
    assert!(c.tree_sum_error.is_finite());
}

#[test]
fn test_sequential_error_grows_faster_than_tree_error() {
    init_tracing();
    let sweep = comparator(500).sweep(&[1_000, 100_000], 20).unwrap();
    let (small, large) = (&sweep[0], &sweep[1]);

    assert!(large.mean_sequential_sum_error > small.mean_sequential_sum_error);
    assert!(large.mean_sequential_dot_error > small.mean_sequential_dot_error);

    let seq_growth = large.mean_sequential_sum_error / small.mean_sequential_sum_error;
    let tree_growth = large.mean_tree_sum_error / small.mean_tree_sum_error;
    assert!(
        seq_growth > tree_growth,
        "sequential growth {seq_growth} vs tree growth {tree_growth}"
    );

    // The gap widens with N
    assert!(large.sum_error_ratio() > small.sum_error_ratio());
    assert!(large.dot_error_ratio() > small.dot_error_ratio());
}

#[test]
fn test_mean_tree_error_below_sequential_at_every_size() {
    let sweep = comparator(9).sweep(&[10_000, 100_000], 10).unwrap();
    for s in &sweep {
        assert!(
            s.mean_tree_sum_error < s.mean_sequential_sum_error,
            "n={}: tree {} vs seq {}",
            s.n,
            s.mean_tree_sum_error,
            s.mean_sequential_sum_error
        );
        assert!(s.mean_tree_dot_error < s.mean_sequential_dot_error);
    }
}

#[test]
fn test_compensated_baseline_beats_sequential() {
    let summary = comparator(31).run_trials(100_000, 10).unwrap();
    assert!(summary.mean_compensated_sum_error < summary.mean_sequential_sum_error);
    assert!(summary.mean_compensated_dot_error < summary.mean_sequential_dot_error);
}

#[test]
fn test_trials_reproducible() {
    let a = comparator(123).run_trials(10_000, 5).unwrap();
    let b = comparator(123).run_trials(10_000, 5).unwrap();
    assert_eq!(a, b);
}

#[cfg(feature = "f16")]
#[test]
fn test_bf16_gap_is_wider_than_f32() {
    let f32_summary = comparator(2).run_trials(10_000, 5).unwrap();
    let bf16 = ReductionAccuracyComparator::new(
        ComparatorConfig::new()
            .with_seed(2)
            .with_narrow(DType::BF16)
            .unwrap(),
    );
    let bf16_summary = bf16.run_trials(10_000, 5).unwrap();

    assert_eq!(bf16_summary.narrow, DType::BF16);
    assert!(bf16_summary.mean_sequential_sum_error > f32_summary.mean_sequential_sum_error);
    assert!(bf16_summary.mean_tree_sum_error > f32_summary.mean_tree_sum_error);
}
