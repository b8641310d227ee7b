//! Tests for datasets and the seeded split.

use crate::dataset::Dataset;
use crate::error::EstimationError;
use crate::feature::{FeatureBuilder, OpDomain};
use crate::record::{ActivityRecord, LabeledRecord};

fn dataset_with_row_ids(rows: usize) -> Dataset {
    // Each label encodes its row index, so partitions can be checked exactly.
    let features = (0..rows).map(|i| vec![i as f64]).collect();
    let labels = (0..rows).map(|i| i as f64).collect();
    Dataset::new(features, labels, 1).unwrap()
}

#[test]
fn test_from_labeled_shares_one_column_layout() {
    let builder = FeatureBuilder::new(OpDomain::new(vec![0, 1, 2]));
    let records: Vec<LabeledRecord> = (0..4)
        .map(|i| LabeledRecord {
            record: ActivityRecord::new(1., 2., 3., 4., 5., 6., i % 3),
            power_mw: i as f64,
        })
        .collect();
    let dataset = Dataset::from_labeled(&records, &builder).unwrap();
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.num_columns(), 9);
    assert_eq!(dataset.labels(), &[0., 1., 2., 3.]);
}

#[test]
fn test_mismatched_row_width_is_rejected() {
    let err = Dataset::new(vec![vec![1., 2.], vec![3.]], vec![0., 0.], 2).unwrap_err();
    assert!(matches!(err, EstimationError::Data { stage: "dataset", .. }));
}

#[test]
fn test_split_sizes_and_partition() {
    let dataset = dataset_with_row_ids(10);
    let split = dataset.split(0.2, 42).unwrap();
    assert_eq!(split.test.len(), 2);
    assert_eq!(split.train.len(), 8);

    let mut ids: Vec<f64> = split
        .train
        .labels()
        .iter()
        .chain(split.test.labels())
        .copied()
        .collect();
    ids.sort_by(f64::total_cmp);
    let expected: Vec<f64> = (0..10).map(|i| i as f64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_split_is_reproducible_with_same_seed() {
    let dataset = dataset_with_row_ids(100);
    let first = dataset.split(0.3, 7).unwrap();
    let second = dataset.split(0.3, 7).unwrap();
    assert_eq!(first.test.labels(), second.test.labels());
    assert_eq!(first.train.labels(), second.train.labels());
}

#[test]
fn test_split_is_a_permutation_not_a_prefix_cut() {
    let dataset = dataset_with_row_ids(100);
    let split = dataset.split(0.2, 42).unwrap();
    let prefix: Vec<f64> = (0..20).map(|i| i as f64).collect();
    assert_ne!(split.test.labels(), &prefix[..]);
}

#[test]
fn test_different_seeds_give_different_partitions() {
    let dataset = dataset_with_row_ids(100);
    let first = dataset.split(0.2, 1).unwrap();
    let second = dataset.split(0.2, 2).unwrap();
    assert_ne!(first.test.labels(), second.test.labels());
}

#[test]
fn test_invalid_test_fraction_is_rejected() {
    let dataset = dataset_with_row_ids(10);
    for fraction in [0., 1., -0.5, 1.5] {
        let err = dataset.split(fraction, 42).unwrap_err();
        assert!(matches!(err, EstimationError::Data { stage: "split", .. }));
    }
}
