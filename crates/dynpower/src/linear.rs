//! Ordinary least squares regressor.

use ndarray::{Array1, Array2};

use crate::dataset::Dataset;
use crate::error::{EstimationError, Result};
use crate::regressor::{FittedModel, Regressor};

/// Ordinary least squares fit of the power label on the feature vector,
/// with no regularization.
///
/// No explicit intercept column is added: the one-hot operation block sums
/// to one for every record, so it already spans the intercept (a separate
/// intercept would make the normal equations singular). The coefficients are
/// obtained from `X^T X beta = X^T y` solved by Gaussian elimination with
/// partial pivoting.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearRegressor;

impl LinearRegressor {
    /// Creates a linear regressor.
    pub fn new() -> Self {
        Self
    }
}

impl Regressor for LinearRegressor {
    fn name(&self) -> &str {
        "linear_regression"
    }

    fn fit(&self, train: &Dataset) -> Result<Box<dyn FittedModel>> {
        let rows = train.len();
        let columns = train.num_columns();
        if rows == 0 {
            return Err(EstimationError::Data {
                stage: "linear_regression",
                message: "training set is empty".to_string(),
            });
        }
        if rows < columns {
            return Err(EstimationError::Data {
                stage: "linear_regression",
                message: format!(
                    "{} training rows are not enough to fit {} coefficients",
                    rows, columns
                ),
            });
        }

        let mut design = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            design.extend_from_slice(train.row(row));
        }
        let x = Array2::from_shape_vec((rows, columns), design).unwrap();
        let y = Array1::from_vec(train.labels().to_vec());

        let xtx = x.t().dot(&x);
        let xty = x.t().dot(&y);
        let coefficients = solve(xtx, xty).ok_or(EstimationError::Numerical {
            stage: "linear_regression",
            message: "normal equations are singular".to_string(),
        })?;
        Ok(Box::new(LinearModel {
            coefficients: coefficients.to_vec(),
        }))
    }
}

/// A fitted linear model: one coefficient per feature column.
#[derive(Debug, Clone)]
pub struct LinearModel {
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Returns the coefficients in feature column order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl FittedModel for LinearModel {
    fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.coefficients.len());
        self.coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum()
    }
}

/// Solves `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` if the system is singular.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Option<Array1<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))?;
        if a[[pivot, col]].abs() < 1e-12 {
            return None;
        }
        if pivot != col {
            for k in 0..n {
                a.swap([pivot, k], [col, k]);
            }
            b.swap(pivot, col);
        }
        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0. {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }
    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in row + 1..n {
            acc -= a[[row, k]] * x[k];
        }
        x[row] = acc / a[[row, row]];
    }
    Some(x)
}
