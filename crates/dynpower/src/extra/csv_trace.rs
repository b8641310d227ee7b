//! CSV activity trace reader.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{EstimationError, Result};
use crate::record::{ActivityRecord, RecordSource};

/// An activity trace read from a CSV file with named columns
/// `a, b, y, toggles, hw_a, hw_b, op`.
#[derive(Debug, Clone, Default)]
pub struct CsvTrace {
    records: Vec<ActivityRecord>,
}

impl CsvTrace {
    /// Reads a trace from a CSV file.
    ///
    /// # Errors
    /// Returns [`EstimationError::Schema`] if some row is missing a field or
    /// holds a malformed value.
    ///
    /// # Panics
    /// Panics if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .unwrap_or_else(|e| panic!("Can't open trace file {}: {}", path.display(), e));
        Self::from_reader(file)
    }

    /// Reads a trace from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<ActivityRecord>().enumerate() {
            let record = row.map_err(|e| EstimationError::Schema {
                record: index,
                message: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(Self { records })
    }

    /// Returns the parsed records.
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }
}

impl RecordSource for CsvTrace {
    fn record_iter(&self) -> Box<dyn Iterator<Item = ActivityRecord> + '_> {
        Box::new(self.records.iter().copied())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
