//! End-to-end train/evaluate pipeline.

use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::Serialize;

use crate::config::ExperimentConfig;
use crate::dataset::Dataset;
use crate::error::{EstimationError, Result};
use crate::evaluation::{evaluate, predictions, EvaluationResult, PredictionRow};
use crate::feature::{FeatureBuilder, OpDomain};
use crate::forest::ForestRegressor;
use crate::label::LabelSynthesizer;
use crate::linear::LinearRegressor;
use crate::record::{ActivityRecord, RecordSource};
use crate::regressor::Regressor;

/// Held-out predictions of one fitted model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelPredictions {
    /// Name of the regressor variant.
    pub model_name: String,
    /// One (actual, predicted) pair per test row.
    pub rows: Vec<PredictionRow>,
}

/// Structured results of an experiment run, returned to the external reporter.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentOutcome {
    /// Evaluation metrics, one entry per regressor variant.
    pub results: Vec<EvaluationResult>,
    /// Held-out (actual, predicted) pairs per variant, for visualization.
    pub predictions: Vec<ModelPredictions>,
}

/// The power estimation pipeline: label synthesis, feature construction,
/// train/test split, fitting of the regressor variants and evaluation.
///
/// All stochastic stages take their seeds from the configuration, so two runs
/// over the same records produce identical outcomes.
pub struct Experiment {
    config: ExperimentConfig,
    records: Vec<ActivityRecord>,
}

impl Experiment {
    /// Creates an experiment over the records of the given source.
    pub fn new(config: ExperimentConfig, source: &dyn RecordSource) -> Self {
        Self {
            config,
            records: source.record_iter().collect(),
        }
    }

    /// Returns the regressor variants configured for this experiment.
    pub fn default_regressors(&self) -> Vec<Box<dyn Regressor>> {
        vec![
            Box::new(LinearRegressor::new()),
            Box::new(ForestRegressor::new(
                self.config.n_trees,
                self.config.ensemble_seed,
            )),
        ]
    }

    /// Runs the pipeline with the default regressor variants.
    ///
    /// # Errors
    /// Propagates schema, data and numerical errors from the pipeline stages;
    /// no partial results are returned.
    pub fn run(&self) -> Result<ExperimentOutcome> {
        self.run_with(&self.default_regressors())
    }

    /// Runs the pipeline with the given regressor variants.
    pub fn run_with(&self, regressors: &[Box<dyn Regressor>]) -> Result<ExperimentOutcome> {
        if self.records.is_empty() {
            return Err(EstimationError::Data {
                stage: "experiment",
                message: "activity trace is empty".to_string(),
            });
        }

        // The op domain is fixed once from the explicit declaration or the
        // complete trace, before any split.
        let domain = match &self.config.op_domain {
            Some(codes) => OpDomain::new(codes.clone()),
            None => OpDomain::from_records(&self.records),
        };
        let builder = FeatureBuilder::new(domain);

        let synthesizer = LabelSynthesizer::from_config(&self.config);
        let mut noise_rng = Pcg64::seed_from_u64(self.config.noise_seed);
        let labeled = synthesizer.synthesize(&self.records, &mut noise_rng);

        let dataset = Dataset::from_labeled(&labeled, &builder)?;
        info!(
            "built dataset: {} rows, {} feature columns",
            dataset.len(),
            dataset.num_columns()
        );

        let split = dataset.split(self.config.test_fraction, self.config.split_seed)?;
        info!(
            "split dataset: {} train rows, {} test rows",
            split.train.len(),
            split.test.len()
        );

        let mut results = Vec::with_capacity(regressors.len());
        let mut model_predictions = Vec::with_capacity(regressors.len());
        for regressor in regressors {
            let model = regressor.fit(&split.train)?;
            let result = evaluate(regressor.name(), model.as_ref(), &split.test)?;
            info!(
                "evaluated {}: mse = {:.6}, r_squared = {:?}",
                result.model_name, result.mse, result.r_squared
            );
            model_predictions.push(ModelPredictions {
                model_name: result.model_name.clone(),
                rows: predictions(model.as_ref(), &split.test),
            });
            results.push(result);
        }
        Ok(ExperimentOutcome {
            results,
            predictions: model_predictions,
        })
    }
}
