//! Dense in-memory dataset.

use crate::core::error::{Result, SplitterError};
use crate::core::types::*;
use crate::dataset::FeatureDataset;

use ndarray::{Array2, ArrayView1, ArrayView2};

/// Dense feature matrix, one row per instance and one column per feature.
///
/// Missing values may be stored as NaN; how they are routed is up to the
/// per-feature evaluator.
#[derive(Debug, Clone)]
pub struct DenseDataset {
    features: Array2<f64>,
    feature_names: Option<Vec<String>>,
}

impl DenseDataset {
    /// Create a dataset from a `num_data × num_features` matrix
    pub fn new(features: Array2<f64>) -> Self {
        DenseDataset {
            features,
            feature_names: None,
        }
    }

    /// Build a dataset from column vectors, one per feature
    pub fn from_columns(columns: &[Vec<f64>]) -> Result<Self> {
        let num_data = columns.first().map_or(0, Vec::len);
        for (index, column) in columns.iter().enumerate() {
            if column.len() != num_data {
                return Err(SplitterError::dimension_mismatch(
                    format!("{} values in every column", num_data),
                    format!("{} values in column {}", column.len(), index),
                ));
            }
        }

        let features =
            Array2::from_shape_fn((num_data, columns.len()), |(row, col)| columns[col][row]);
        Ok(DenseDataset::new(features))
    }

    /// Attach feature names; the count must match the number of columns
    pub fn with_feature_names(mut self, names: Vec<String>) -> Result<Self> {
        if names.len() != self.features.ncols() {
            return Err(SplitterError::dimension_mismatch(
                format!("{} feature names", self.features.ncols()),
                format!("{} feature names", names.len()),
            ));
        }
        self.feature_names = Some(names);
        Ok(self)
    }

    /// Feature names, if any were attached
    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Name of one feature, if names were attached
    pub fn feature_name(&self, feature: FeatureIndex) -> Option<&str> {
        self.feature_names
            .as_ref()
            .and_then(|names| names.get(feature))
            .map(String::as_str)
    }

    /// Returns a view of the feature matrix.
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }
}

impl FeatureDataset for DenseDataset {
    fn num_data(&self) -> DataSize {
        self.features.nrows()
    }

    fn num_features(&self) -> usize {
        self.features.ncols()
    }

    fn feature_values(&self, feature: FeatureIndex) -> Option<ArrayView1<'_, f64>> {
        if feature < self.features.ncols() {
            Some(self.features.column(feature))
        } else {
            None
        }
    }
}
