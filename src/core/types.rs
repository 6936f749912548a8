//! Core data types shared across the crate.

/// Feature index type for identifying features in the dataset.
pub type FeatureIndex = usize;

/// Instance indexing type.
pub type DataSize = usize;

/// Label value type.
pub type Label = f64;

/// Instance membership weight at the current node (a probability or a
/// non-negative sample weight).
pub type Weight = f64;

/// Reduction score of a split; higher is better.
pub type Reduction = f64;
