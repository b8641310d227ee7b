//! Regressor and fitted model contracts.

use crate::dataset::Dataset;
use crate::error::Result;

/// A fitted regression model.
///
/// Produced by [`Regressor::fit`] and consumed by the evaluator; the
/// parameters are opaque to the rest of the pipeline.
pub trait FittedModel: Send + std::fmt::Debug {
    /// Predicts the power label of one feature vector.
    ///
    /// The vector must have the same width as the training dataset.
    fn predict(&self, features: &[f64]) -> f64;
}

/// A trainable regressor variant.
///
/// New variants plug into the pipeline by implementing this trait; the
/// trainer and evaluator stages are variant-agnostic.
pub trait Regressor {
    /// Returns the variant name used in reported results.
    fn name(&self) -> &str;

    /// Fits the regressor on the training subset.
    ///
    /// The training dataset is never mutated.
    ///
    /// # Errors
    /// Returns [`crate::error::EstimationError::Data`] if the training set is
    /// empty or too small for the variant, and
    /// [`crate::error::EstimationError::Numerical`] on numerical failures.
    fn fit(&self, train: &Dataset) -> Result<Box<dyn FittedModel>>;
}
