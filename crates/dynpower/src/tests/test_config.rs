//! Tests for the experiment configuration.

use crate::config::ExperimentConfig;

#[test]
fn test_empty_yaml_gives_defaults() {
    let config: ExperimentConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config.voltage, 1.);
    assert_eq!(config.frequency, 100e6);
    assert_eq!(config.c_bit, 1e-15);
    assert_eq!(config.noise_factor, 0.1);
    assert_eq!(config.test_fraction, 0.2);
    assert_eq!(config.split_seed, 42);
    assert_eq!(config.n_trees, 200);
    assert_eq!(config.op_domain, None);
}

#[test]
fn test_partial_yaml_overrides_defaults() {
    let yaml = "n_trees: 10\nnoise_factor: 0.0\nop_domain: [0, 1, 2]\n";
    let config: ExperimentConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.n_trees, 10);
    assert_eq!(config.noise_factor, 0.);
    assert_eq!(config.op_domain, Some(vec![0, 1, 2]));
    assert_eq!(config.test_fraction, 0.2);
}

#[test]
fn test_yaml_round_trip() {
    let config = ExperimentConfig {
        n_trees: 50,
        split_seed: 7,
        ..Default::default()
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: ExperimentConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.n_trees, 50);
    assert_eq!(parsed.split_seed, 7);
    assert_eq!(parsed.voltage, config.voltage);
}
