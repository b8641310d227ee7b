//! Synthetic activity trace generator.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::record::{ActivityRecord, RecordSource};

/// Synthetic trace generation settings.
#[derive(Debug, Clone)]
pub struct SyntheticTraceConfig {
    /// Number of records to generate.
    pub records: usize,
    /// Operation codes sampled uniformly for each record.
    pub op_codes: Vec<u32>,
    /// Operand width in bits (at most 32).
    pub operand_bits: u32,
    /// Random generator seed.
    pub random_seed: u64,
}

impl Default for SyntheticTraceConfig {
    fn default() -> Self {
        Self {
            records: 1000,
            op_codes: vec![0, 1, 2, 3, 4],
            operand_bits: 8,
            random_seed: 42,
        }
    }
}

/// Synthetically generated activity trace.
#[derive(Debug, Clone, Default)]
pub struct SyntheticTrace {
    records: Vec<ActivityRecord>,
}

impl SyntheticTrace {
    /// Returns the generated records.
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }
}

impl RecordSource for SyntheticTrace {
    fn record_iter(&self) -> Box<dyn Iterator<Item = ActivityRecord> + '_> {
        Box::new(self.records.iter().copied())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Generates a synthetic activity trace.
///
/// Operands are sampled uniformly over the operand width, the result is
/// computed by a small ALU (add, sub, and, or, xor selected by the operation
/// code), the Hamming weights come from the operands and the toggle count is
/// the Hamming distance between the operands and the result.
pub fn generate_synthetic_trace(config: &SyntheticTraceConfig) -> SyntheticTrace {
    assert!(!config.op_codes.is_empty(), "op code set must not be empty");
    assert!(config.operand_bits >= 1 && config.operand_bits <= 32);
    let mask: u32 = if config.operand_bits == 32 {
        u32::MAX
    } else {
        (1u32 << config.operand_bits) - 1
    };
    let mut gen = Pcg64::seed_from_u64(config.random_seed);
    let mut trace = SyntheticTrace::default();
    for _ in 0..config.records {
        let a = gen.gen_range(0..=mask);
        let b = gen.gen_range(0..=mask);
        let op = config.op_codes[gen.gen_range(0..config.op_codes.len())];
        let y = match op % 5 {
            0 => a.wrapping_add(b),
            1 => a.wrapping_sub(b),
            2 => a & b,
            3 => a | b,
            _ => a ^ b,
        } & mask;
        let toggles = (a ^ y).count_ones() + (b ^ y).count_ones();
        trace.records.push(ActivityRecord::new(
            a as f64,
            b as f64,
            y as f64,
            toggles as f64,
            a.count_ones() as f64,
            b.count_ones() as f64,
            op,
        ));
    }
    trace
}
