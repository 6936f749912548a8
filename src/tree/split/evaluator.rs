//! Per-feature evaluation seam.
//!
//! The threshold search for a single feature (how its values are scanned and
//! which impurity is used) is supplied by the caller through
//! [`FeatureSplitEvaluator`]. The orchestrator only fans candidate features
//! out to it and reduces the answers.

use crate::config::SplitterConfig;
use crate::core::error::{Result, SplitterError};
use crate::core::types::{FeatureIndex, Label, Weight};
use crate::dataset::FeatureDataset;
use crate::tree::split::global_stats::GlobalStats;
use crate::tree::split::result::SplitResult;

use ndarray::ArrayView1;
use std::sync::Arc;

/// Everything a per-feature evaluation may read.
///
/// All of it is immutable for the duration of a search and shared across
/// worker threads.
#[derive(Clone, Copy)]
pub struct SplitContext<'a> {
    pub config: &'a SplitterConfig,
    pub dataset: &'a dyn FeatureDataset,
    pub labels: ArrayView1<'a, Label>,
    pub probs: ArrayView1<'a, Weight>,
    pub global_stats: &'a GlobalStats,
}

impl<'a> SplitContext<'a> {
    /// Values of `feature`, or an `IndexOutOfBounds` error.
    pub fn feature_values(&self, feature: FeatureIndex) -> Result<ArrayView1<'a, f64>> {
        self.dataset
            .feature_values(feature)
            .ok_or_else(|| SplitterError::index_out_of_bounds(feature, self.dataset.num_features()))
    }
}

/// Finds the best split of a single feature.
///
/// Must be a pure function of its inputs. `Ok(None)` means the feature has
/// no valid split (constant values, too few distinct values, ...). An `Err`
/// aborts the whole search.
pub trait FeatureSplitEvaluator: Send + Sync {
    fn evaluate(&self, ctx: &SplitContext<'_>, feature: FeatureIndex)
        -> Result<Option<SplitResult>>;
}

impl<E: FeatureSplitEvaluator + ?Sized> FeatureSplitEvaluator for &E {
    fn evaluate(
        &self,
        ctx: &SplitContext<'_>,
        feature: FeatureIndex,
    ) -> Result<Option<SplitResult>> {
        (**self).evaluate(ctx, feature)
    }
}

impl<E: FeatureSplitEvaluator + ?Sized> FeatureSplitEvaluator for Box<E> {
    fn evaluate(
        &self,
        ctx: &SplitContext<'_>,
        feature: FeatureIndex,
    ) -> Result<Option<SplitResult>> {
        (**self).evaluate(ctx, feature)
    }
}

impl<E: FeatureSplitEvaluator + ?Sized> FeatureSplitEvaluator for Arc<E> {
    fn evaluate(
        &self,
        ctx: &SplitContext<'_>,
        feature: FeatureIndex,
    ) -> Result<Option<SplitResult>> {
        (**self).evaluate(ctx, feature)
    }
}

/// Adapter turning a closure into a [`FeatureSplitEvaluator`].
pub struct FnEvaluator<F>(F);

impl<F> FeatureSplitEvaluator for FnEvaluator<F>
where
    F: Fn(&SplitContext<'_>, FeatureIndex) -> Result<Option<SplitResult>> + Send + Sync,
{
    fn evaluate(
        &self,
        ctx: &SplitContext<'_>,
        feature: FeatureIndex,
    ) -> Result<Option<SplitResult>> {
        (self.0)(ctx, feature)
    }
}

/// Wrap a closure as an evaluator.
pub fn evaluator_fn<F>(f: F) -> FnEvaluator<F>
where
    F: Fn(&SplitContext<'_>, FeatureIndex) -> Result<Option<SplitResult>> + Send + Sync,
{
    FnEvaluator(f)
}
