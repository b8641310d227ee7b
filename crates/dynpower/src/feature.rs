//! Feature representation of activity records.

use crate::error::{EstimationError, Result};
use crate::record::ActivityRecord;

/// Number of numeric columns preceding the one-hot operation encoding.
pub const NUMERIC_COLUMNS: usize = 6;

/// The fixed domain of operation codes.
///
/// The domain is declared once, before any train/test split, and defines the
/// one-hot column ordering for every feature vector. Deriving it separately
/// for subsets of the data would risk inconsistent column counts, which this
/// type prevents structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpDomain {
    codes: Vec<u32>,
}

impl OpDomain {
    /// Creates a domain from the given operation codes (sorted, deduplicated).
    pub fn new(mut codes: Vec<u32>) -> Self {
        codes.sort_unstable();
        codes.dedup();
        Self { codes }
    }

    /// Derives the domain from the codes observed in a complete trace.
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        Self::new(records.iter().map(|r| r.op).collect())
    }

    /// Returns the number of codes in the domain.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the codes in one-hot column order.
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// Returns the one-hot column index of an operation code if it belongs to the domain.
    pub fn index_of(&self, op: u32) -> Option<usize> {
        self.codes.binary_search(&op).ok()
    }
}

/// Builds fixed-width feature vectors from activity records.
///
/// The vector layout is `[a, b, y, toggles, hw_a, hw_b]` followed by a
/// one-hot encoding of the operation code over the full declared domain,
/// identical for every record regardless of which subset it lands in.
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    domain: OpDomain,
}

impl FeatureBuilder {
    /// Creates a feature builder over the given operation code domain.
    pub fn new(domain: OpDomain) -> Self {
        Self { domain }
    }

    /// Returns the operation code domain.
    pub fn domain(&self) -> &OpDomain {
        &self.domain
    }

    /// Returns the feature vector width.
    pub fn num_columns(&self) -> usize {
        NUMERIC_COLUMNS + self.domain.len()
    }

    /// Returns the feature column names in vector order.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = ["a", "b", "y", "toggles", "hw_a", "hw_b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        names.extend(self.domain.codes().iter().map(|code| format!("op_{}", code)));
        names
    }

    /// Builds the feature vector of a record.
    ///
    /// `index` is the position of the record in the trace and is only used
    /// for error context.
    ///
    /// # Errors
    /// Returns [`EstimationError::Schema`] if the operation code is outside
    /// the declared domain.
    pub fn build(&self, index: usize, record: &ActivityRecord) -> Result<Vec<f64>> {
        let slot = self
            .domain
            .index_of(record.op)
            .ok_or_else(|| EstimationError::Schema {
                record: index,
                message: format!("op code {} is outside the declared domain", record.op),
            })?;
        let mut features = Vec::with_capacity(self.num_columns());
        features.extend_from_slice(&[
            record.a,
            record.b,
            record.y,
            record.toggles,
            record.hw_a,
            record.hw_b,
        ]);
        features.resize(self.num_columns(), 0.);
        features[NUMERIC_COLUMNS + slot] = 1.;
        Ok(features)
    }
}
