//! Activity records and record sources.

use serde::{Deserialize, Serialize};

/// A single record of an activity trace: operand values, the produced result,
/// per-operation activity counters and the operation code.
///
/// Records are produced once by a [`RecordSource`] and never mutated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// First operand value.
    pub a: f64,
    /// Second operand value.
    pub b: f64,
    /// Result value.
    pub y: f64,
    /// Number of bit toggles caused by the operation.
    pub toggles: f64,
    /// Hamming weight of the first operand.
    pub hw_a: f64,
    /// Hamming weight of the second operand.
    pub hw_b: f64,
    /// Operation code from a fixed finite domain.
    pub op: u32,
}

impl ActivityRecord {
    /// Creates an activity record with the specified fields.
    pub fn new(a: f64, b: f64, y: f64, toggles: f64, hw_a: f64, hw_b: f64, op: u32) -> Self {
        Self {
            a,
            b,
            y,
            toggles,
            hw_a,
            hw_b,
            op,
        }
    }
}

/// An activity record with the synthetic power label attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledRecord {
    /// The original activity record.
    pub record: ActivityRecord,
    /// Synthesized dynamic power consumption in mW.
    pub power_mw: f64,
}

/// Supplier of an ordered sequence of activity records.
///
/// The estimation pipeline only consumes this interface and owns no I/O;
/// see [`crate::extra`] for the provided implementations.
pub trait RecordSource {
    /// Returns an iterator over the records in trace order.
    fn record_iter(&self) -> Box<dyn Iterator<Item = ActivityRecord> + '_>;

    /// Returns the number of records in the trace.
    fn len(&self) -> usize;

    /// Returns true if the trace contains no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
