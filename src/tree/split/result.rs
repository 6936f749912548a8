//! Candidate split produced by a per-feature evaluation.

use crate::core::types::{FeatureIndex, Reduction};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Best split found for one feature.
///
/// Instances whose feature value is `<= threshold` go left. Counts are
/// probabilistic (sums of membership weights), outputs are the weighted mean
/// labels of each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Feature index for the split
    pub feature: FeatureIndex,
    /// Actual threshold value
    pub threshold: f64,
    /// Decrease in weighted impurity achieved by the split
    pub reduction: Reduction,
    /// Left child statistics
    pub left_count: f64,
    pub left_output: f64,
    /// Right child statistics
    pub right_count: f64,
    pub right_output: f64,
}

impl SplitResult {
    /// Creates a split with empty child statistics.
    pub fn new(feature: FeatureIndex, threshold: f64, reduction: Reduction) -> Self {
        SplitResult {
            feature,
            threshold,
            reduction,
            left_count: 0.0,
            left_output: 0.0,
            right_count: 0.0,
            right_output: 0.0,
        }
    }

    /// Sets the probabilistic instance counts of both children.
    pub fn with_counts(mut self, left_count: f64, right_count: f64) -> Self {
        self.left_count = left_count;
        self.right_count = right_count;
        self
    }

    /// Sets the output values of both children.
    pub fn with_outputs(mut self, left_output: f64, right_output: f64) -> Self {
        self.left_output = left_output;
        self.right_output = right_output;
        self
    }

    /// Whether a value goes to the left child.
    pub fn goes_left(&self, value: f64) -> bool {
        value <= self.threshold
    }

    /// Total ordering used to pick a winner: higher reduction first, then
    /// the lower feature index.
    ///
    /// `Ordering::Greater` means `self` wins over `other`. `-0.0` and `0.0`
    /// are the same reduction.
    pub fn selection_cmp(&self, other: &Self) -> Ordering {
        // Adding 0.0 maps -0.0 to 0.0 so total_cmp sees a tie.
        (self.reduction + 0.0)
            .total_cmp(&(other.reduction + 0.0))
            .then_with(|| other.feature.cmp(&self.feature))
    }

    /// Whether `self` would be selected over `other`.
    pub fn beats(&self, other: &Self) -> bool {
        self.selection_cmp(other) == Ordering::Greater
    }
}

/// Selection compares reduction only; ties are resolved by the caller.
impl PartialOrd for SplitResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.reduction.partial_cmp(&other.reduction)
    }
}

/// Keep whichever candidate wins under [`SplitResult::selection_cmp`].
///
/// Associative and commutative, so parallel partial results can be merged
/// in any order.
pub fn select_best(a: Option<SplitResult>, b: Option<SplitResult>) -> Option<SplitResult> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => {
            if b.beats(&a) {
                Some(b)
            } else {
                Some(a)
            }
        }
    }
}
