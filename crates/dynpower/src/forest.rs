//! Bagged ensemble of regression trees.

use std::sync::mpsc::channel;
use std::sync::Arc;

use rand::prelude::*;
use rand_pcg::Pcg64;
use threadpool::ThreadPool;

use crate::dataset::Dataset;
use crate::error::{EstimationError, Result};
use crate::regressor::{FittedModel, Regressor};
use crate::tree::{RegressionTree, TreeParams};

/// A bagged ensemble of regression trees.
///
/// Each tree is grown on a bootstrap resample of the training rows and
/// considers a random subset of feature columns at each split (about one
/// third of the columns unless overridden). The prediction is the mean of
/// the tree predictions.
///
/// All bootstrap and feature subsampling randomness derives from one seed:
/// per-tree seeds are drawn up front, so the fitted ensemble does not depend
/// on the number of worker threads or their completion order.
pub struct ForestRegressor {
    n_trees: usize,
    seed: u64,
    n_workers: usize,
    tree_params: TreeParams,
}

impl ForestRegressor {
    /// Creates a forest regressor with `n_trees` trees and the given seed.
    pub fn new(n_trees: usize, seed: u64) -> Self {
        Self {
            n_trees,
            seed,
            n_workers: std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            tree_params: Default::default(),
        }
    }

    /// Overrides the tree growth limits.
    pub fn with_tree_params(mut self, tree_params: TreeParams) -> Self {
        self.tree_params = tree_params;
        self
    }

    /// Overrides the number of worker threads used for fitting.
    pub fn with_workers(mut self, n_workers: usize) -> Self {
        self.n_workers = n_workers.max(1);
        self
    }
}

impl Regressor for ForestRegressor {
    fn name(&self) -> &str {
        "random_forest"
    }

    fn fit(&self, train: &Dataset) -> Result<Box<dyn FittedModel>> {
        if train.is_empty() {
            return Err(EstimationError::Data {
                stage: "random_forest",
                message: "training set is empty".to_string(),
            });
        }
        if self.n_trees == 0 {
            return Err(EstimationError::Data {
                stage: "random_forest",
                message: "ensemble size must be positive".to_string(),
            });
        }

        let columns = train.num_columns();
        let params = TreeParams {
            max_features: Some(
                self.tree_params
                    .max_features
                    .unwrap_or_else(|| (columns + 2) / 3)
                    .clamp(1, columns),
            ),
            ..self.tree_params
        };

        let mut seed_gen = Pcg64::seed_from_u64(self.seed);
        let seeds: Vec<u64> = (0..self.n_trees).map(|_| seed_gen.gen()).collect();

        let data = Arc::new(train.clone());
        let pool = ThreadPool::new(self.n_workers);
        let (tx, rx) = channel();
        for (index, seed) in seeds.into_iter().enumerate() {
            let tx = tx.clone();
            let data = data.clone();
            pool.execute(move || {
                let mut rng = Pcg64::seed_from_u64(seed);
                let n = data.len();
                let rows: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                let tree = RegressionTree::fit(&data, rows, &params, &mut rng);
                tx.send((index, tree)).unwrap();
            });
        }
        drop(tx);

        let mut trees: Vec<(usize, RegressionTree)> = rx.iter().collect();
        // Averaging is commutative, but a fixed tree order keeps the fitted
        // model bit-identical across runs.
        trees.sort_by_key(|(index, _)| *index);
        Ok(Box::new(ForestModel {
            trees: trees.into_iter().map(|(_, tree)| tree).collect(),
        }))
    }
}

/// A fitted tree ensemble predicting the mean of its trees.
#[derive(Debug)]
pub struct ForestModel {
    trees: Vec<RegressionTree>,
}

impl ForestModel {
    /// Returns the number of trees in the ensemble.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl FittedModel for ForestModel {
    fn predict(&self, features: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        sum / self.trees.len() as f64
    }
}
