//! Multi-trial statistics
//!
//! A single comparison can favour either strategy by chance (ties, lucky
//! cancellation). Error growth is a statement about expectations, so it is
//! measured as means over independently seeded trials.

use super::{ComparisonReport, ReductionAccuracyComparator};
use crate::dtype::DType;
use crate::error::{Error, Result};

/// Mean errors of each strategy over repeated seeded trials at one sample count
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrialSummary {
    /// Number of samples per trial
    pub n: usize,
    /// Number of trials
    pub trials: usize,
    /// Narrow precision
    pub narrow: DType,
    /// Mean reference sum
    pub mean_reference_sum: f64,
    /// Mean absolute error of the narrow sequential sum
    pub mean_sequential_sum_error: f64,
    /// Mean absolute error of the narrow tree sum
    pub mean_tree_sum_error: f64,
    /// Mean absolute error of the narrow compensated sum
    pub mean_compensated_sum_error: f64,
    /// Mean reference dot product
    pub mean_reference_dot: f64,
    /// Mean absolute error of the narrow sequential dot product
    pub mean_sequential_dot_error: f64,
    /// Mean absolute error of the narrow tree dot product
    pub mean_tree_dot_error: f64,
    /// Mean absolute error of the narrow compensated dot product
    pub mean_compensated_dot_error: f64,
    /// Fraction of trials where the tree sum error was <= the sequential one
    pub sum_tree_win_rate: f64,
    /// Fraction of trials where the tree dot error was <= the sequential one
    pub dot_tree_win_rate: f64,
}

impl TrialSummary {
    /// Mean sequential sum error divided by mean tree sum error
    ///
    /// Infinite when the tree sum was exact in every trial.
    pub fn sum_error_ratio(&self) -> f64 {
        self.mean_sequential_sum_error / self.mean_tree_sum_error
    }

    /// Mean sequential dot error divided by mean tree dot error
    pub fn dot_error_ratio(&self) -> f64 {
        self.mean_sequential_dot_error / self.mean_tree_dot_error
    }
}

/// Running totals over trials
#[derive(Default)]
struct TrialTotals {
    count: usize,
    reference_sum: f64,
    sequential_sum: f64,
    tree_sum: f64,
    compensated_sum: f64,
    reference_dot: f64,
    sequential_dot: f64,
    tree_dot: f64,
    compensated_dot: f64,
    sum_tree_wins: usize,
    dot_tree_wins: usize,
}

impl TrialTotals {
    fn push(&mut self, report: &ComparisonReport) {
        self.count += 1;
        self.reference_sum += report.sum.reference.value;
        self.sequential_sum += report.sum.sequential.absolute_error;
        self.tree_sum += report.sum.tree.absolute_error;
        self.compensated_sum += report.sum.compensated.absolute_error;
        self.reference_dot += report.dot.reference.value;
        self.sequential_dot += report.dot.sequential.absolute_error;
        self.tree_dot += report.dot.tree.absolute_error;
        self.compensated_dot += report.dot.compensated.absolute_error;
        self.sum_tree_wins += usize::from(report.sum.tree_at_least_as_accurate());
        self.dot_tree_wins += usize::from(report.dot.tree_at_least_as_accurate());
    }

    fn finish(self, n: usize, narrow: DType) -> TrialSummary {
        let count = self.count as f64;
        TrialSummary {
            n,
            trials: self.count,
            narrow,
            mean_reference_sum: self.reference_sum / count,
            mean_sequential_sum_error: self.sequential_sum / count,
            mean_tree_sum_error: self.tree_sum / count,
            mean_compensated_sum_error: self.compensated_sum / count,
            mean_reference_dot: self.reference_dot / count,
            mean_sequential_dot_error: self.sequential_dot / count,
            mean_tree_dot_error: self.tree_dot / count,
            mean_compensated_dot_error: self.compensated_dot / count,
            sum_tree_win_rate: self.sum_tree_wins as f64 / count,
            dot_tree_win_rate: self.dot_tree_wins as f64 / count,
        }
    }
}

impl ReductionAccuracyComparator {
    /// Run `trials` comparisons of `n` samples each.
    ///
    /// Trial `i` uses seed `config.seed() + i` (wrapping), so the whole run is
    /// reproducible from the configured seed.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `n` or `trials` is zero.
    pub fn run_trials(&self, n: usize, trials: usize) -> Result<TrialSummary> {
        if trials == 0 {
            return Err(Error::invalid_argument("trials", "must be at least 1"));
        }

        let base = self.config().seed();
        let mut totals = TrialTotals::default();
        for trial in 0..trials {
            let seed = base.wrapping_add(trial as u64);
            totals.push(&self.measure_seeded(n, seed)?);
        }

        let summary = totals.finish(n, self.config().narrow());
        tracing::debug!(
            n,
            trials,
            mean_sequential_sum_error = summary.mean_sequential_sum_error,
            mean_tree_sum_error = summary.mean_tree_sum_error,
            sum_tree_win_rate = summary.sum_tree_win_rate,
            dot_tree_win_rate = summary.dot_tree_win_rate,
            "trial summary"
        );
        Ok(summary)
    }

    /// [`run_trials`](Self::run_trials) for each sample count in `sizes`, in order.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `sizes` is empty, contains zero, or `trials` is zero.
    pub fn sweep(&self, sizes: &[usize], trials: usize) -> Result<Vec<TrialSummary>> {
        if sizes.is_empty() {
            return Err(Error::invalid_argument("sizes", "must not be empty"));
        }
        sizes.iter().map(|&n| self.run_trials(n, trials)).collect()
    }
}
