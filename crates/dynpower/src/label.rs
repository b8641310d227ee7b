//! Synthetic power label generation.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::ExperimentConfig;
use crate::record::{ActivityRecord, LabeledRecord};

/// Computes a physically-motivated dynamic power label for activity records.
///
/// The ideal power of a record is `C_bit * V^2 * f * base_activity`, where
/// `base_activity = toggles + 0.5 * hw_a + 0.5 * hw_b`. Gaussian noise with
/// standard deviation `noise_factor * stddev(ideal power over the whole
/// trace)` is added on top, and the result is converted from W to mW.
///
/// The noise draws consume a caller-supplied random source, so the labels
/// are reproducible given a seed.
#[derive(Debug, Clone, Copy)]
pub struct LabelSynthesizer {
    voltage: f64,
    frequency: f64,
    c_bit: f64,
    noise_factor: f64,
}

impl LabelSynthesizer {
    /// Creates a label synthesizer.
    ///
    /// * `voltage` - Supply voltage in V.
    /// * `frequency` - Clock frequency in Hz.
    /// * `c_bit` - Effective capacitance per toggled bit in F.
    /// * `noise_factor` - Noise standard deviation as a fraction of the
    ///   ideal power standard deviation over the trace.
    pub fn new(voltage: f64, frequency: f64, c_bit: f64, noise_factor: f64) -> Self {
        Self {
            voltage,
            frequency,
            c_bit,
            noise_factor,
        }
    }

    /// Creates a label synthesizer from the physical constants in `config`.
    pub fn from_config(config: &ExperimentConfig) -> Self {
        Self::new(
            config.voltage,
            config.frequency,
            config.c_bit,
            config.noise_factor,
        )
    }

    /// Returns the switching activity of a record used by the power model.
    pub fn base_activity(record: &ActivityRecord) -> f64 {
        record.toggles + 0.5 * record.hw_a + 0.5 * record.hw_b
    }

    /// Returns the noiseless dynamic power of a record in W.
    pub fn ideal_power_w(&self, record: &ActivityRecord) -> f64 {
        self.c_bit * self.voltage * self.voltage * self.frequency * Self::base_activity(record)
    }

    /// Attaches a power label in mW to every record.
    ///
    /// The noise scale is derived from the ideal power spread of the whole
    /// trace, so all records must be labeled in one call. A trace with zero
    /// ideal power variance (a single record, all-zero activity) degenerates
    /// to noiseless labels rather than failing.
    pub fn synthesize<R: Rng>(
        &self,
        records: &[ActivityRecord],
        rng: &mut R,
    ) -> Vec<LabeledRecord> {
        let ideal: Vec<f64> = records.iter().map(|r| self.ideal_power_w(r)).collect();
        let sigma = self.noise_factor * sample_stddev(&ideal);
        let noise: Option<Normal<f64>> = if sigma > 0. && sigma.is_finite() {
            Some(Normal::new(0., sigma).unwrap())
        } else {
            None
        };
        records
            .iter()
            .zip(ideal)
            .map(|(&record, power_w)| {
                let noise_w = noise.as_ref().map(|n| n.sample(rng)).unwrap_or(0.);
                LabeledRecord {
                    record,
                    power_mw: (power_w + noise_w) * 1e3,
                }
            })
            .collect()
    }
}

/// Sample standard deviation (ddof = 1); returns 0 for fewer than two values.
fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
        / (values.len() - 1) as f64;
    var.sqrt()
}
