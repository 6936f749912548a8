//! # Boost Splitter
//!
//! Best-split search for one node of a regression tree inside a
//! gradient-boosting ensemble.
//!
//! Given per-instance labels and (possibly fractional) membership
//! probabilities, the [`Splitter`] finds the feature and threshold with the
//! highest *reduction* in weighted impurity. The threshold search of a single
//! feature is plugged in through [`FeatureSplitEvaluator`]; this crate
//! handles everything around it:
//!
//! - aggregating node-level statistics once per search ([`GlobalStats`]),
//! - evaluating candidate features sequentially or on a rayon pool and
//!   reducing them to one winner with a deterministic tie-break,
//! - the *active feature* protocol: a full scan ranks every feature so later
//!   boosting rounds can restrict their search to the top K.
//!
//! ## Quick Start
//!
//! ```rust
//! use boost_splitter::prelude::*;
//! use ndarray::array;
//!
//! # fn main() -> boost_splitter::Result<()> {
//! let dataset = DenseDataset::new(array![[0.0], [0.0], [1.0], [1.0]]);
//! let labels = array![1.0, 0.0, 1.0, 0.0];
//! let probs = array![1.0, 1.0, 1.0, 1.0];
//!
//! // A toy evaluator that always proposes the midpoint split.
//! let evaluator = evaluator_fn(|_ctx: &SplitContext<'_>, feature| {
//!     Ok(Some(SplitResult::new(feature, 0.5, 1.0)))
//! });
//!
//! let splitter = Splitter::new(SplitterConfig::default(), evaluator)?;
//! let best = splitter.find_best_split(&dataset, labels.view(), probs.view())?;
//! assert_eq!(best.map(|split| split.feature), Some(0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: shared types, defaults, error handling and logging setup
//! - [`config`]: [`SplitterConfig`] and its builder, file loading
//! - [`dataset`]: the [`FeatureDataset`] abstraction and [`DenseDataset`]
//! - [`tree`]: global statistics, evaluator seam, ranking and the orchestrator

pub mod config;
pub mod core;
pub mod dataset;
pub mod tree;

pub use crate::config::{SplitterConfig, SplitterConfigBuilder};
pub use crate::core::error::{Result, SplitterError};
pub use crate::core::types::*;
pub use crate::core::{initialize_logging, BOOST_SPLITTER_VERSION};
pub use crate::dataset::{DenseDataset, FeatureDataset};
pub use crate::tree::split::{
    evaluator_fn, select_best, FeatureRanking, FeatureSplitEvaluator, FnEvaluator,
    FullScanOutcome, GlobalStats, SplitContext, SplitResult, Splitter,
};

/// Commonly used items.
pub mod prelude {
    pub use crate::config::{SplitterConfig, SplitterConfigBuilder};
    pub use crate::core::error::{Result, SplitterError};
    pub use crate::core::types::{FeatureIndex, Label, Reduction, Weight};
    pub use crate::dataset::{DenseDataset, FeatureDataset};
    pub use crate::tree::split::{
        evaluator_fn, FeatureSplitEvaluator, FullScanOutcome, GlobalStats, SplitContext,
        SplitResult, Splitter,
    };
}
