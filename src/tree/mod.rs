//! Tree learning: node-level split search.
//!
//! Tree assembly happens elsewhere; this module decides *where* a node
//! splits (or that it should stay a leaf).

pub mod split;

pub use split::{
    evaluator_fn, FeatureRanking, FeatureSplitEvaluator, FnEvaluator, FullScanOutcome,
    GlobalStats, SplitContext, SplitResult, Splitter,
};
