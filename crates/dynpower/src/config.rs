//! Experiment configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

fn default_voltage() -> f64 {
    1.
}

fn default_frequency() -> f64 {
    100e6
}

fn default_c_bit() -> f64 {
    1e-15
}

fn default_noise_factor() -> f64 {
    0.1
}

fn default_test_fraction() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}

fn default_n_trees() -> usize {
    200
}

/// YAML-serializable experiment configuration.
///
/// Every field has a default, so a partial (or empty) config file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Supply voltage in V.
    #[serde(default = "default_voltage")]
    pub voltage: f64,
    /// Clock frequency in Hz.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Effective capacitance per toggled bit in F.
    #[serde(default = "default_c_bit")]
    pub c_bit: f64,
    /// Label noise scale as a fraction of the ideal power standard deviation.
    #[serde(default = "default_noise_factor")]
    pub noise_factor: f64,
    /// Fraction of the dataset held out for evaluation.
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    /// Seed of the label noise draws.
    #[serde(default = "default_seed")]
    pub noise_seed: u64,
    /// Seed of the train/test permutation.
    #[serde(default = "default_seed")]
    pub split_seed: u64,
    /// Seed of the ensemble bootstrap and feature subsampling.
    #[serde(default = "default_seed")]
    pub ensemble_seed: u64,
    /// Number of trees in the ensemble variant.
    #[serde(default = "default_n_trees")]
    pub n_trees: usize,
    /// Explicit operation code domain; derived from the full trace if absent.
    #[serde(default)]
    pub op_domain: Option<Vec<u32>>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            voltage: default_voltage(),
            frequency: default_frequency(),
            c_bit: default_c_bit(),
            noise_factor: default_noise_factor(),
            test_fraction: default_test_fraction(),
            noise_seed: default_seed(),
            split_seed: default_seed(),
            ensemble_seed: default_seed(),
            n_trees: default_n_trees(),
            op_domain: None,
        }
    }
}

impl ExperimentConfig {
    /// Loads the configuration from a YAML file.
    ///
    /// # Panics
    /// Panics if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Can't read config from file {}: {}", path.display(), e));
        serde_yaml::from_str(&content)
            .unwrap_or_else(|e| panic!("Can't parse config from file {}: {}", path.display(), e))
    }
}
