//! Node-level weighted statistics shared by every per-feature evaluation.

use crate::core::error::{Result, SplitterError};
use crate::core::types::{DataSize, Label, Weight};
use crate::ensure;

use ndarray::ArrayView1;
use serde::Serialize;
use std::fmt;

/// Sufficient statistics over all instances at the current node.
///
/// Built once per split search in a single pass over labels and
/// probabilities, then shared read-only by every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalStats {
    /// Σ label_i * prob_i
    weighted_label_sum: f64,
    /// Σ prob_i
    probabilistic_count: f64,
    /// number of instances with prob_i > 0
    binary_count: DataSize,
}

impl GlobalStats {
    /// Aggregate labels and probabilities.
    ///
    /// Fails when the arrays differ in length or when a probability is
    /// negative or not finite.
    pub fn new(labels: ArrayView1<'_, Label>, probs: ArrayView1<'_, Weight>) -> Result<Self> {
        ensure!(
            labels.len() == probs.len(),
            SplitterError::dimension_mismatch(
                format!("{} probabilities (one per label)", labels.len()),
                format!("{} probabilities", probs.len()),
            )
        );

        let mut weighted_label_sum = 0.0;
        let mut probabilistic_count = 0.0;
        let mut binary_count = 0;

        for (index, (&label, &prob)) in labels.iter().zip(probs.iter()).enumerate() {
            ensure!(
                prob.is_finite() && prob >= 0.0,
                SplitterError::invalid_parameter(
                    format!("probs[{}]", index),
                    prob.to_string(),
                    "must be finite and non-negative",
                )
            );

            weighted_label_sum += label * prob;
            probabilistic_count += prob;
            if prob > 0.0 {
                binary_count += 1;
            }
        }

        Ok(GlobalStats {
            weighted_label_sum,
            probabilistic_count,
            binary_count,
        })
    }

    /// Same as [`GlobalStats::new`] for plain slices.
    pub fn from_slices(labels: &[Label], probs: &[Weight]) -> Result<Self> {
        Self::new(ArrayView1::from(labels), ArrayView1::from(probs))
    }

    /// Σ label_i * prob_i
    pub fn weighted_label_sum(&self) -> f64 {
        self.weighted_label_sum
    }

    /// Σ prob_i
    pub fn probabilistic_count(&self) -> f64 {
        self.probabilistic_count
    }

    /// Number of instances with a strictly positive probability
    pub fn binary_count(&self) -> DataSize {
        self.binary_count
    }
}

impl fmt::Display for GlobalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GlobalStats{{weighted_label_sum={}, probabilistic_count={}, binary_count={}}}",
            self.weighted_label_sum, self.probabilistic_count, self.binary_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_unit_weights() {
        let stats = GlobalStats::from_slices(&[1.0, 0.0, 1.0, 0.0], &[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(stats.weighted_label_sum(), 2.0);
        assert_eq!(stats.probabilistic_count(), 4.0);
        assert_eq!(stats.binary_count(), 4);
    }

    #[test]
    fn test_fractional_probabilities() {
        let stats = GlobalStats::from_slices(&[2.0, 4.0, 6.0], &[0.5, 0.0, 0.25]).unwrap();
        assert_abs_diff_eq!(stats.weighted_label_sum(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.probabilistic_count(), 0.75, epsilon = 1e-12);
        assert_eq!(stats.binary_count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let stats = GlobalStats::from_slices(&[], &[]).unwrap();
        assert_eq!(stats.binary_count(), 0);
        assert_eq!(stats.probabilistic_count(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let result = GlobalStats::from_slices(&[1.0, 2.0], &[1.0]);
        assert!(matches!(result, Err(SplitterError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_negative_and_nan_probabilities() {
        let result = GlobalStats::from_slices(&[1.0, 2.0], &[1.0, -0.1]);
        assert!(matches!(result, Err(SplitterError::InvalidParameter { .. })));

        let result = GlobalStats::from_slices(&[1.0], &[f64::NAN]);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let stats = GlobalStats::from_slices(&[3.0], &[1.0]).unwrap();
        let text = stats.to_string();
        assert!(text.contains("weighted_label_sum=3"));
        assert!(text.contains("binary_count=1"));
    }

    fn labels_and_probs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (0usize..64).prop_flat_map(|n| {
            (
                prop::collection::vec(-100.0f64..100.0, n),
                prop::collection::vec(prop_oneof![Just(0.0f64), 0.0f64..1.0], n),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_counts_match_definition((labels, probs) in labels_and_probs()) {
            let stats = GlobalStats::from_slices(&labels, &probs).unwrap();
            let expected_sum: f64 = probs.iter().sum();
            let expected_binary = probs.iter().filter(|&&p| p > 0.0).count();

            prop_assert!((stats.probabilistic_count() - expected_sum).abs() < 1e-9);
            prop_assert_eq!(stats.binary_count(), expected_binary);
            prop_assert!(stats.binary_count() <= labels.len());
            prop_assert!(stats.probabilistic_count() >= 0.0);
        }

        #[test]
        fn prop_invariant_under_joint_reordering((labels, probs) in labels_and_probs()) {
            let forward = GlobalStats::from_slices(&labels, &probs).unwrap();

            let reversed_labels: Vec<f64> = labels.iter().rev().copied().collect();
            let reversed_probs: Vec<f64> = probs.iter().rev().copied().collect();
            let backward = GlobalStats::from_slices(&reversed_labels, &reversed_probs).unwrap();

            prop_assert_eq!(forward.binary_count(), backward.binary_count());
            prop_assert!((forward.probabilistic_count() - backward.probabilistic_count()).abs() < 1e-9);
            prop_assert!((forward.weighted_label_sum() - backward.weighted_label_sum()).abs() < 1e-7);
        }
    }
}
