//! Common test utilities for boost-splitter integration tests.

#![allow(dead_code)]

use boost_splitter::*;
use ndarray::{Array1, Array2};
use rand::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

/// Create random test features
pub fn create_test_features(num_samples: usize, num_features: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut features = Array2::zeros((num_samples, num_features));
    for i in 0..num_samples {
        for j in 0..num_features {
            features[[i, j]] = rng.gen_range(-5.0..5.0);
        }
    }

    features
}

/// Labels driven mostly by the first feature, with a weaker second feature
pub fn create_test_labels(features: &Array2<f64>) -> Array1<f64> {
    let num_samples = features.nrows();
    let mut labels = Array1::zeros(num_samples);

    for i in 0..num_samples {
        let mut label = if features[[i, 0]] > 0.0 { 3.0 } else { -3.0 };
        if features.ncols() > 1 {
            label += features[[i, 1]] * 0.2;
        }
        labels[i] = label;
    }

    labels
}

/// Fractional membership probabilities, roughly a fifth of them zero
pub fn create_test_probs(num_samples: usize, seed: u64) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut probs = Array1::zeros(num_samples);

    for i in 0..num_samples {
        probs[i] = if rng.gen_bool(0.2) {
            0.0
        } else {
            rng.gen_range(0.1..1.0)
        };
    }

    probs
}

/// Reference per-feature search: sorts the instances with positive
/// probability by feature value and scans every boundary between distinct
/// values, scoring the decrease in weighted squared error.
pub struct VarianceEvaluator;

impl FeatureSplitEvaluator for VarianceEvaluator {
    fn evaluate(
        &self,
        ctx: &SplitContext<'_>,
        feature: FeatureIndex,
    ) -> Result<Option<SplitResult>> {
        let values = ctx.feature_values(feature)?;

        let mut rows: Vec<(f64, f64, f64)> = values
            .iter()
            .zip(ctx.labels.iter())
            .zip(ctx.probs.iter())
            .filter(|&(_, &prob)| prob > 0.0)
            .map(|((&value, &label), &prob)| (value, label, prob))
            .collect();
        rows.sort_by(|a, b| a.0.total_cmp(&b.0));

        let total_sum = ctx.global_stats.weighted_label_sum();
        let total_count = ctx.global_stats.probabilistic_count();
        let parent_score = total_sum * total_sum / total_count;

        let mut left_sum = 0.0;
        let mut left_count = 0.0;
        let mut best: Option<SplitResult> = None;

        for window in 0..rows.len().saturating_sub(1) {
            let (value, label, prob) = rows[window];
            left_sum += label * prob;
            left_count += prob;

            let next_value = rows[window + 1].0;
            if next_value == value {
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_count = total_count - left_count;
            if left_count <= 0.0 || right_count <= 0.0 {
                continue;
            }

            let reduction = left_sum * left_sum / left_count
                + right_sum * right_sum / right_count
                - parent_score;
            let candidate = SplitResult::new(feature, (value + next_value) / 2.0, reduction)
                .with_counts(left_count, right_count)
                .with_outputs(left_sum / left_count, right_sum / right_count);

            best = select_best(best, Some(candidate));
        }

        Ok(best)
    }
}

/// Evaluator returning a fixed reduction per feature; features absent from
/// the table have no valid split. Records every feature it was asked about.
pub struct TableEvaluator {
    scores: HashMap<FeatureIndex, f64>,
    visited: Mutex<Vec<FeatureIndex>>,
}

impl TableEvaluator {
    pub fn new(scores: &[(FeatureIndex, f64)]) -> Self {
        TableEvaluator {
            scores: scores.iter().copied().collect(),
            visited: Mutex::new(Vec::new()),
        }
    }

    /// Distinct features evaluated so far
    pub fn visited(&self) -> BTreeSet<FeatureIndex> {
        self.visited.lock().unwrap().iter().copied().collect()
    }

    /// Number of evaluator calls so far
    pub fn calls(&self) -> usize {
        self.visited.lock().unwrap().len()
    }
}

impl FeatureSplitEvaluator for TableEvaluator {
    fn evaluate(
        &self,
        _ctx: &SplitContext<'_>,
        feature: FeatureIndex,
    ) -> Result<Option<SplitResult>> {
        self.visited.lock().unwrap().push(feature);
        Ok(self
            .scores
            .get(&feature)
            .map(|&reduction| SplitResult::new(feature, 0.5, reduction)))
    }
}

pub fn sequential_config() -> SplitterConfig {
    SplitterConfigBuilder::new().parallel(false).build().unwrap()
}

pub fn parallel_config() -> SplitterConfig {
    SplitterConfigBuilder::new().parallel(true).build().unwrap()
}

/// Dataset of the given shape whose values are irrelevant to table-driven
/// evaluators, with zero labels and unit probabilities.
pub fn blank_inputs(num_data: usize, num_features: usize) -> (DenseDataset, Array1<f64>, Array1<f64>) {
    (
        DenseDataset::new(Array2::zeros((num_data, num_features))),
        Array1::zeros(num_data),
        Array1::ones(num_data),
    )
}
