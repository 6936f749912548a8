//! Split search for one tree node.
//!
//! - [`global_stats`]: weighted label/probability aggregates built once per search
//! - [`evaluator`]: the per-feature evaluation seam
//! - [`result`]: candidate splits and the winner-selection order
//! - [`ranking`]: top-K ranking for the active-feature protocol
//! - [`splitter`]: the orchestrator

pub mod evaluator;
pub mod global_stats;
pub mod ranking;
pub mod result;
pub mod splitter;

pub use evaluator::{evaluator_fn, FeatureSplitEvaluator, FnEvaluator, SplitContext};
pub use global_stats::GlobalStats;
pub use ranking::FeatureRanking;
pub use result::{select_best, SplitResult};
pub use splitter::{FullScanOutcome, Splitter};

#[cfg(test)]
mod compile_time_assertions {
    use super::*;
    use static_assertions::*;

    assert_impl_all!(GlobalStats: Send, Sync, Copy);
    assert_impl_all!(SplitResult: Send, Sync, Clone);
    assert_impl_all!(SplitContext<'static>: Send, Sync, Copy);
    assert_impl_all!(FullScanOutcome: Send, Sync);
    assert_impl_all!(Splitter<Box<dyn FeatureSplitEvaluator>>: Send, Sync);
}
