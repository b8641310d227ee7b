//! Tests for the evaluator.

use approx::assert_abs_diff_eq;

use crate::dataset::Dataset;
use crate::error::EstimationError;
use crate::evaluation::{evaluate, predictions};
use crate::regressor::FittedModel;

/// Predicts the first feature value, so the test dataset fully controls the
/// predictions.
#[derive(Debug)]
struct FirstFeature;

impl FittedModel for FirstFeature {
    fn predict(&self, features: &[f64]) -> f64 {
        features[0]
    }
}

fn dataset(pairs: &[(f64, f64)]) -> Dataset {
    // (prediction, actual) pairs
    let features = pairs.iter().map(|&(p, _)| vec![p]).collect();
    let labels = pairs.iter().map(|&(_, a)| a).collect();
    Dataset::new(features, labels, 1).unwrap()
}

#[test]
fn test_perfect_predictions() {
    let test = dataset(&[(1., 1.), (2., 2.), (3., 3.)]);
    let result = evaluate("probe", &FirstFeature, &test).unwrap();
    assert_eq!(result.mse, 0.);
    assert_eq!(result.r_squared, Some(1.));
}

#[test]
fn test_known_metric_values() {
    let test = dataset(&[(1., 1.), (2., 2.), (4., 3.)]);
    let result = evaluate("probe", &FirstFeature, &test).unwrap();
    assert_abs_diff_eq!(result.mse, 1. / 3., epsilon = 1e-12);
    // SS_res = 1, SS_tot = 2
    assert_abs_diff_eq!(result.r_squared.unwrap(), 0.5, epsilon = 1e-12);
}

#[test]
fn test_constant_labels_make_r_squared_undefined() {
    let test = dataset(&[(1., 2.), (3., 2.), (5., 2.)]);
    let result = evaluate("probe", &FirstFeature, &test).unwrap();
    assert_eq!(result.r_squared, None);
    assert!(result.mse > 0.);
}

#[test]
fn test_single_row_makes_r_squared_undefined() {
    let test = dataset(&[(1., 4.)]);
    let result = evaluate("probe", &FirstFeature, &test).unwrap();
    assert_eq!(result.r_squared, None);
    assert_eq!(result.mse, 9.);
}

#[test]
fn test_empty_test_set_is_a_data_error() {
    let test = Dataset::new(Vec::new(), Vec::new(), 1).unwrap();
    let err = evaluate("probe", &FirstFeature, &test).unwrap_err();
    assert!(matches!(err, EstimationError::Data { stage: "evaluation", .. }));
}

#[test]
fn test_predictions_pair_actual_and_predicted() {
    let test = dataset(&[(1., 2.), (3., 4.)]);
    let rows = predictions(&FirstFeature, &test);
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].actual, rows[0].predicted), (2., 1.));
    assert_eq!((rows[1].actual, rows[1].predicted), (4., 3.));
}
