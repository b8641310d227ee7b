//! Regression trees with variance-minimizing splits.

use rand::seq::index;
use rand::Rng;

use crate::dataset::Dataset;
use crate::regressor::FittedModel;

/// Growth limits of a regression tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    /// Number of feature columns considered at each split; `None` considers all.
    pub max_features: Option<usize>,
    /// Minimum number of rows required to attempt a split.
    pub min_samples_split: usize,
    /// Minimum number of rows in each child of a split.
    pub min_samples_leaf: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_features: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

#[derive(Debug)]
enum TreeNode {
    Leaf {
        value: f64,
    },
    Branch {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A regression tree: a hierarchical partition of the feature space where
/// each leaf predicts the mean label of its training rows.
///
/// Splits are chosen to minimize the summed squared error of the child
/// partitions. A node stops splitting when it is pure, falls below the
/// minimum size, or no split reduces the error.
#[derive(Debug)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Grows a tree on the given rows of a dataset.
    ///
    /// `rows` may contain duplicate indices (bootstrap resamples). The random
    /// source drives the per-split feature subsampling; a tree grown with the
    /// same rows and the same seeded source is identical.
    pub fn fit<R: Rng>(data: &Dataset, rows: Vec<usize>, params: &TreeParams, rng: &mut R) -> Self {
        assert!(!rows.is_empty(), "cannot grow a tree on zero rows");
        let mut tree = Self { nodes: Vec::new() };
        tree.grow(data, rows, params, rng);
        tree
    }

    fn grow<R: Rng>(
        &mut self,
        data: &Dataset,
        rows: Vec<usize>,
        params: &TreeParams,
        rng: &mut R,
    ) -> usize {
        let n = rows.len();
        let sum: f64 = rows.iter().map(|&r| data.label(r)).sum();
        let sum_sq: f64 = rows.iter().map(|&r| data.label(r) * data.label(r)).sum();
        let mean = sum / n as f64;
        let node_sse = sum_sq - sum * sum / n as f64;

        if n < params.min_samples_split || node_sse <= 1e-12 {
            self.nodes.push(TreeNode::Leaf { value: mean });
            return self.nodes.len() - 1;
        }

        let best = self.best_split(data, &rows, node_sse, params, rng);
        let Some((feature, threshold)) = best else {
            self.nodes.push(TreeNode::Leaf { value: mean });
            return self.nodes.len() - 1;
        };

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
            .into_iter()
            .partition(|&r| data.feature(r, feature) <= threshold);
        // The midpoint threshold may round onto one of the two values.
        if left_rows.is_empty() || right_rows.is_empty() {
            self.nodes.push(TreeNode::Leaf { value: mean });
            return self.nodes.len() - 1;
        }

        // Reserve the branch slot before recursing into the children.
        let node = self.nodes.len();
        self.nodes.push(TreeNode::Leaf { value: mean });
        let left = self.grow(data, left_rows, params, rng);
        let right = self.grow(data, right_rows, params, rng);
        self.nodes[node] = TreeNode::Branch {
            feature,
            threshold,
            left,
            right,
        };
        node
    }

    fn best_split<R: Rng>(
        &self,
        data: &Dataset,
        rows: &[usize],
        node_sse: f64,
        params: &TreeParams,
        rng: &mut R,
    ) -> Option<(usize, f64)> {
        let columns = data.num_columns();
        let max_features = params.max_features.unwrap_or(columns).clamp(1, columns);
        let mut candidates: Vec<usize> = if max_features < columns {
            index::sample(rng, columns, max_features).into_vec()
        } else {
            (0..columns).collect()
        };
        // Canonical candidate order makes tie-breaking independent of the sampling order.
        candidates.sort_unstable();

        let total_sum: f64 = rows.iter().map(|&r| data.label(r)).sum();
        let total_sq: f64 = rows.iter().map(|&r| data.label(r) * data.label(r)).sum();
        let n = rows.len();

        let mut best_sse = node_sse;
        let mut best: Option<(usize, f64)> = None;
        let mut sorted: Vec<(f64, f64)> = Vec::with_capacity(n);
        for feature in candidates {
            sorted.clear();
            sorted.extend(rows.iter().map(|&r| (data.feature(r, feature), data.label(r))));
            sorted.sort_by(|x, y| x.0.total_cmp(&y.0));

            let mut left_sum = 0.;
            let mut left_sq = 0.;
            for i in 1..n {
                let (value, label) = sorted[i - 1];
                left_sum += label;
                left_sq += label * label;
                if value == sorted[i].0 {
                    continue;
                }
                if i < params.min_samples_leaf || n - i < params.min_samples_leaf {
                    continue;
                }
                let left_sse = left_sq - left_sum * left_sum / i as f64;
                let right_sum = total_sum - left_sum;
                let right_sse = (total_sq - left_sq) - right_sum * right_sum / (n - i) as f64;
                let sse = left_sse + right_sse;
                if sse < best_sse - 1e-12 {
                    best_sse = sse;
                    best = Some((feature, (value + sorted[i].0) / 2.));
                }
            }
        }
        best
    }
}

impl FittedModel for RegressionTree {
    fn predict(&self, features: &[f64]) -> f64 {
        let mut node = 0;
        loop {
            match &self.nodes[node] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Branch {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}
