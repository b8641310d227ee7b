//! Tests for the synthetic power label.

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::label::LabelSynthesizer;
use crate::record::ActivityRecord;

fn record(toggles: f64, hw_a: f64, hw_b: f64) -> ActivityRecord {
    ActivityRecord::new(1., 2., 3., toggles, hw_a, hw_b, 0)
}

#[test]
fn test_noiseless_label_is_exact() {
    let synthesizer = LabelSynthesizer::new(1., 100e6, 1e-15, 0.);
    let records = vec![record(10., 4., 2.), record(0., 0., 0.), record(3., 1., 1.)];
    let mut rng = Pcg64::seed_from_u64(1);
    let labeled = synthesizer.synthesize(&records, &mut rng);
    // C_bit * V^2 * f = 1e-7 W per unit of switching activity.
    assert_abs_diff_eq!(labeled[0].power_mw, 13. * 1e-7 * 1e3, epsilon = 1e-15);
    assert_eq!(labeled[1].power_mw, 0.);
    assert_abs_diff_eq!(labeled[2].power_mw, 4. * 1e-7 * 1e3, epsilon = 1e-15);
}

#[test]
fn test_base_activity_weights() {
    assert_abs_diff_eq!(
        LabelSynthesizer::base_activity(&record(10., 4., 2.)),
        13.,
        epsilon = 1e-12
    );
}

#[test]
fn test_noiseless_synthesis_is_deterministic() {
    let synthesizer = LabelSynthesizer::new(1., 100e6, 1e-15, 0.);
    let records = vec![record(5., 2., 1.), record(7., 3., 3.)];
    let first = synthesizer.synthesize(&records, &mut Pcg64::seed_from_u64(1));
    let second = synthesizer.synthesize(&records, &mut Pcg64::seed_from_u64(2));
    assert_eq!(first, second);
}

#[test]
fn test_noisy_synthesis_reproducible_with_same_seed() {
    let synthesizer = LabelSynthesizer::new(1., 100e6, 1e-15, 0.1);
    let records: Vec<ActivityRecord> = (0..50).map(|i| record(i as f64, 1., 2.)).collect();
    let first = synthesizer.synthesize(&records, &mut Pcg64::seed_from_u64(42));
    let second = synthesizer.synthesize(&records, &mut Pcg64::seed_from_u64(42));
    assert_eq!(first, second);
    let other = synthesizer.synthesize(&records, &mut Pcg64::seed_from_u64(43));
    assert_ne!(first, other);
}

#[test]
fn test_zero_variance_trace_degenerates_to_no_noise() {
    let synthesizer = LabelSynthesizer::new(1., 100e6, 1e-15, 0.1);
    let records = vec![record(4., 2., 2.); 10];
    let labeled = synthesizer.synthesize(&records, &mut Pcg64::seed_from_u64(7));
    let expected = synthesizer.ideal_power_w(&records[0]) * 1e3;
    for labeled_record in labeled {
        assert_eq!(labeled_record.power_mw, expected);
    }
}

#[test]
fn test_single_record_trace_is_noiseless() {
    let synthesizer = LabelSynthesizer::new(1., 100e6, 1e-15, 0.1);
    let records = vec![record(4., 2., 2.)];
    let labeled = synthesizer.synthesize(&records, &mut Pcg64::seed_from_u64(7));
    assert_eq!(
        labeled[0].power_mw,
        synthesizer.ideal_power_w(&records[0]) * 1e3
    );
}
