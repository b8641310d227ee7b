//! Labeled feature datasets and the seeded train/test split.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::error::{EstimationError, Result};
use crate::feature::FeatureBuilder;
use crate::record::LabeledRecord;

/// An ordered collection of (feature vector, power label) pairs sharing one
/// feature column ordering.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
    num_columns: usize,
}

impl Dataset {
    /// Creates a dataset from prebuilt rows.
    ///
    /// # Errors
    /// Returns [`EstimationError::Data`] if the number of labels differs from
    /// the number of rows or some row has a different width.
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<f64>, num_columns: usize) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(EstimationError::Data {
                stage: "dataset",
                message: format!(
                    "{} feature rows do not match {} labels",
                    features.len(),
                    labels.len()
                ),
            });
        }
        if let Some(row) = features.iter().position(|f| f.len() != num_columns) {
            return Err(EstimationError::Data {
                stage: "dataset",
                message: format!(
                    "row {} has {} columns, expected {}",
                    row,
                    features[row].len(),
                    num_columns
                ),
            });
        }
        Ok(Self {
            features,
            labels,
            num_columns,
        })
    }

    /// Builds a dataset from labeled records using one shared feature builder.
    ///
    /// # Errors
    /// Returns [`EstimationError::Schema`] if some record has an operation
    /// code outside the builder's domain.
    pub fn from_labeled(records: &[LabeledRecord], builder: &FeatureBuilder) -> Result<Self> {
        let mut features = Vec::with_capacity(records.len());
        let mut labels = Vec::with_capacity(records.len());
        for (index, labeled) in records.iter().enumerate() {
            features.push(builder.build(index, &labeled.record)?);
            labels.push(labeled.power_mw);
        }
        Self::new(features, labels, builder.num_columns())
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the feature vector width.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Returns the feature vector of a row.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.features[index]
    }

    /// Returns one feature value.
    pub fn feature(&self, row: usize, column: usize) -> f64 {
        self.features[row][column]
    }

    /// Returns the label of a row.
    pub fn label(&self, index: usize) -> f64 {
        self.labels[index]
    }

    /// Returns all labels in row order.
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Partitions the dataset into train and test subsets.
    ///
    /// Rows are assigned by a pseudo-random permutation seeded with `seed`;
    /// the test subset takes `round(test_fraction * len)` rows and the train
    /// subset the remainder. The same seed over the same dataset reproduces
    /// the same partition.
    ///
    /// # Errors
    /// Returns [`EstimationError::Data`] if `test_fraction` is outside (0, 1).
    pub fn split(&self, test_fraction: f64, seed: u64) -> Result<Split> {
        if !(test_fraction > 0. && test_fraction < 1.) {
            return Err(EstimationError::Data {
                stage: "split",
                message: format!("test fraction {} is outside (0, 1)", test_fraction),
            });
        }
        let mut indices: Vec<usize> = (0..self.len()).collect();
        let mut rng = Pcg64::seed_from_u64(seed);
        indices.shuffle(&mut rng);
        let test_size = (test_fraction * self.len() as f64).round() as usize;
        let (test_idx, train_idx) = indices.split_at(test_size);
        Ok(Split {
            train: self.take(train_idx),
            test: self.take(test_idx),
        })
    }

    fn take(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
            num_columns: self.num_columns,
        }
    }
}

/// A disjoint train/test partition of a dataset.
#[derive(Debug, Clone)]
pub struct Split {
    /// Training subset.
    pub train: Dataset,
    /// Held-out evaluation subset.
    pub test: Dataset,
}
