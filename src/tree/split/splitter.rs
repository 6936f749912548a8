//! Best-split search over candidate features.
//!
//! The [`Splitter`] builds [`GlobalStats`] once per search, fans the
//! candidate features out to a [`FeatureSplitEvaluator`] (on rayon when the
//! configuration asks for it) and keeps the candidate with the highest
//! reduction. Ties on reduction go to the lowest feature index, so the winner
//! does not depend on thread scheduling.
//!
//! For incremental boosting rounds the splitter can also restrict the search
//! to an *active* subset of features, refreshed by a periodic full scan that
//! ranks every feature by the reduction it achieves.

use crate::config::SplitterConfig;
use crate::core::error::{Result, SplitterError};
use crate::core::types::{FeatureIndex, Label, Weight};
use crate::dataset::FeatureDataset;
use crate::ensure;
use crate::tree::split::evaluator::{FeatureSplitEvaluator, SplitContext};
use crate::tree::split::global_stats::GlobalStats;
use crate::tree::split::ranking::FeatureRanking;
use crate::tree::split::result::{select_best, SplitResult};

use ndarray::ArrayView1;
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of a full scan: the winning split and the refreshed active set.
///
/// The two are independent outputs of the same scan: with
/// `num_active_features == 0` the winner is still reported while the active
/// set stays empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FullScanOutcome {
    /// Best split over all features, `None` when no feature can be split
    pub best: Option<SplitResult>,
    /// Top-ranked features in non-increasing reduction order, at most
    /// `num_active_features` of them
    pub active_features: Vec<FeatureIndex>,
}

/// Orchestrates the per-feature split search for one tree node.
pub struct Splitter<E> {
    config: SplitterConfig,
    evaluator: E,
    thread_pool: Option<rayon::ThreadPool>,
}

impl<E: FeatureSplitEvaluator> Splitter<E> {
    /// Creates a splitter. A dedicated thread pool is built when the
    /// configuration enables parallel search with an explicit thread count.
    pub fn new(config: SplitterConfig, evaluator: E) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.uses_dedicated_pool() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.num_threads)
                .build()
                .map_err(|e| {
                    SplitterError::threading(format!("Failed to create thread pool: {}", e))
                })?;
            Some(pool)
        } else {
            None
        };

        log::debug!(
            "splitter created: parallel={}, threads={}, num_active_features={}",
            config.parallel,
            config.effective_num_threads(),
            config.num_active_features
        );

        Ok(Splitter {
            config,
            evaluator,
            thread_pool,
        })
    }

    /// Returns a reference to the current configuration.
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Returns the per-feature evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Finds the best split over every feature of `dataset`.
    ///
    /// Returns `Ok(None)` when the dataset has no features or no feature
    /// admits a valid split; the node then becomes a leaf.
    pub fn find_best_split(
        &self,
        dataset: &dyn FeatureDataset,
        labels: ArrayView1<'_, Label>,
        probs: ArrayView1<'_, Weight>,
    ) -> Result<Option<SplitResult>> {
        let global_stats = self.global_stats(dataset, labels, probs)?;
        let ctx = self.context(dataset, labels.reborrow(), probs.reborrow(), &global_stats);

        let features: Vec<FeatureIndex> = (0..dataset.num_features()).collect();
        let best = self.search(&ctx, &features)?;
        log_outcome(&best, features.len());
        Ok(best)
    }

    /// Finds the best split among the given features only.
    ///
    /// Every index must be a valid feature of `dataset`; an out-of-range
    /// index fails before anything is evaluated.
    pub fn find_best_split_among(
        &self,
        dataset: &dyn FeatureDataset,
        labels: ArrayView1<'_, Label>,
        probs: ArrayView1<'_, Weight>,
        features: &[FeatureIndex],
    ) -> Result<Option<SplitResult>> {
        let num_features = dataset.num_features();
        if let Some(&bad) = features.iter().find(|&&feature| feature >= num_features) {
            return Err(SplitterError::index_out_of_bounds(bad, num_features));
        }

        let global_stats = self.global_stats(dataset, labels, probs)?;
        let ctx = self.context(dataset, labels.reborrow(), probs.reborrow(), &global_stats);

        let best = self.search(&ctx, features)?;
        log_outcome(&best, features.len());
        Ok(best)
    }

    /// Evaluates every feature sequentially, returns the winner and ranks
    /// the features by reduction to form the next active set.
    pub fn full_scan(
        &self,
        dataset: &dyn FeatureDataset,
        labels: ArrayView1<'_, Label>,
        probs: ArrayView1<'_, Weight>,
    ) -> Result<FullScanOutcome> {
        let global_stats = self.global_stats(dataset, labels, probs)?;
        let ctx = self.context(dataset, labels.reborrow(), probs.reborrow(), &global_stats);

        let num_features = dataset.num_features();
        let mut ranking = FeatureRanking::with_capacity(num_features);
        for feature in 0..num_features {
            if let Some(split) = self.evaluate_feature(&ctx, feature)? {
                ranking.push(split);
            }
        }

        let num_valid = ranking.len();
        let best = ranking.peek().cloned();
        let active_features = ranking.take_top_features(self.config.num_active_features);

        log::info!(
            "active features refreshed: kept {} of {} splittable features ({} scanned)",
            active_features.len(),
            num_valid,
            num_features
        );
        log_outcome(&best, num_features);

        Ok(FullScanOutcome {
            best,
            active_features,
        })
    }

    /// Active-feature search with the active set as an in/out parameter.
    ///
    /// With `full_scan` the set is cleared and refilled from
    /// [`Splitter::full_scan`]; otherwise only the listed features are
    /// searched and the set is left untouched. On error the set is not
    /// modified.
    pub fn find_best_split_with_active(
        &self,
        dataset: &dyn FeatureDataset,
        labels: ArrayView1<'_, Label>,
        probs: ArrayView1<'_, Weight>,
        active_features: &mut Vec<FeatureIndex>,
        full_scan: bool,
    ) -> Result<Option<SplitResult>> {
        if full_scan {
            let outcome = self.full_scan(dataset, labels, probs)?;
            active_features.clear();
            active_features.extend(outcome.active_features);
            Ok(outcome.best)
        } else {
            self.find_best_split_among(dataset, labels, probs, active_features)
        }
    }

    fn global_stats(
        &self,
        dataset: &dyn FeatureDataset,
        labels: ArrayView1<'_, Label>,
        probs: ArrayView1<'_, Weight>,
    ) -> Result<GlobalStats> {
        ensure!(
            labels.len() == dataset.num_data(),
            SplitterError::dimension_mismatch(
                format!("{} labels (one per instance)", dataset.num_data()),
                format!("{} labels", labels.len()),
            )
        );

        let global_stats = GlobalStats::new(labels, probs)?;
        log::debug!("global statistics = {}", global_stats);
        Ok(global_stats)
    }

    fn context<'a>(
        &'a self,
        dataset: &'a dyn FeatureDataset,
        labels: ArrayView1<'a, Label>,
        probs: ArrayView1<'a, Weight>,
        global_stats: &'a GlobalStats,
    ) -> SplitContext<'a> {
        SplitContext {
            config: &self.config,
            dataset,
            labels,
            probs,
            global_stats,
        }
    }

    /// Max-by-reduction over `features`, in parallel when configured.
    fn search(
        &self,
        ctx: &SplitContext<'_>,
        features: &[FeatureIndex],
    ) -> Result<Option<SplitResult>> {
        if !self.config.parallel {
            return features.iter().try_fold(None, |best, &feature| -> Result<_> {
                let candidate = self.evaluate_feature(ctx, feature)?;
                Ok(select_best(best, candidate))
            });
        }

        let run = || {
            features
                .par_iter()
                .map(|&feature| self.evaluate_feature(ctx, feature))
                .try_reduce(|| None, |a, b| Ok(select_best(a, b)))
        };

        match &self.thread_pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn evaluate_feature(
        &self,
        ctx: &SplitContext<'_>,
        feature: FeatureIndex,
    ) -> Result<Option<SplitResult>> {
        let candidate = self.evaluator.evaluate(ctx, feature)?;

        if let Some(split) = &candidate {
            if split.feature != feature {
                return Err(SplitterError::internal(format!(
                    "evaluator for feature {} returned a split on feature {}",
                    feature, split.feature
                )));
            }
            if split.reduction.is_nan() {
                return Err(SplitterError::numerical(format!(
                    "evaluator returned a NaN reduction for feature {}",
                    feature
                )));
            }
            log::trace!(
                "feature {}: threshold={}, reduction={}",
                feature,
                split.threshold,
                split.reduction
            );
        }

        Ok(candidate)
    }
}

fn log_outcome(best: &Option<SplitResult>, num_candidates: usize) {
    match best {
        Some(split) => log::debug!(
            "best split over {} candidate features: feature={}, threshold={}, reduction={}",
            num_candidates,
            split.feature,
            split.threshold,
            split.reduction
        ),
        None => log::debug!(
            "no valid split over {} candidate features",
            num_candidates
        ),
    }
}
