//! Scoring of fitted models on a held-out dataset.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::{EstimationError, Result};
use crate::regressor::FittedModel;

/// Regression metrics of one fitted model on a test dataset.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    /// Name of the evaluated regressor variant.
    pub model_name: String,
    /// Mean squared error of the predictions.
    pub mse: f64,
    /// Coefficient of determination.
    ///
    /// `None` when R² is undefined: the test set has fewer than two rows or
    /// the test labels are constant (zero total variance).
    pub r_squared: Option<f64>,
}

/// One (actual, predicted) pair for an external reporter to visualize.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PredictionRow {
    /// Actual power label in mW.
    pub actual: f64,
    /// Predicted power label in mW.
    pub predicted: f64,
}

/// Computes predictions of a fitted model for every row of a dataset.
pub fn predictions(model: &dyn FittedModel, data: &Dataset) -> Vec<PredictionRow> {
    (0..data.len())
        .map(|row| PredictionRow {
            actual: data.label(row),
            predicted: model.predict(data.row(row)),
        })
        .collect()
}

/// Scores a fitted model on a test dataset.
///
/// `r_squared = 1 - SS_res / SS_tot` and `mse = SS_res / n`. An undefined R²
/// (degenerate test set) is reported as `None`, never as a NaN or infinity.
///
/// # Errors
/// Returns [`EstimationError::Data`] if the test set is empty.
pub fn evaluate(
    model_name: &str,
    model: &dyn FittedModel,
    test: &Dataset,
) -> Result<EvaluationResult> {
    if test.is_empty() {
        return Err(EstimationError::Data {
            stage: "evaluation",
            message: "test set is empty".to_string(),
        });
    }
    let n = test.len();
    let mean = test.labels().iter().sum::<f64>() / n as f64;
    let mut ss_res = 0.;
    let mut ss_tot = 0.;
    for row in 0..n {
        let actual = test.label(row);
        let predicted = model.predict(test.row(row));
        ss_res += (actual - predicted) * (actual - predicted);
        ss_tot += (actual - mean) * (actual - mean);
    }
    let r_squared = if n < 2 || ss_tot == 0. {
        None
    } else {
        Some(1. - ss_res / ss_tot)
    };
    Ok(EvaluationResult {
        model_name: model_name.to_string(),
        mse: ss_res / n as f64,
        r_squared,
    })
}
