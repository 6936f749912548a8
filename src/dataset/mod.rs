//! Feature storage seen by the split search.
//!
//! The orchestrator only needs the feature count and the number of
//! instances; per-feature evaluators additionally read a feature's values.
//! [`FeatureDataset`] captures exactly that, so alternative storage (binned,
//! sparse, memory-mapped) can plug in. [`DenseDataset`] is the in-memory
//! implementation over an `ndarray` matrix.

pub mod dataset;

pub use dataset::DenseDataset;

use crate::core::types::{DataSize, FeatureIndex};
use ndarray::ArrayView1;

/// Read-only access to a feature matrix.
///
/// Implementations must be `Sync`: a parallel search shares one dataset
/// across every worker thread.
pub trait FeatureDataset: Sync {
    /// Number of instances (rows)
    fn num_data(&self) -> DataSize;

    /// Number of features (columns)
    fn num_features(&self) -> usize;

    /// Values of one feature across all instances, or `None` when the index
    /// is out of range.
    fn feature_values(&self, feature: FeatureIndex) -> Option<ArrayView1<'_, f64>>;
}
