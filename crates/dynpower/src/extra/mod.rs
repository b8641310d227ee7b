//! Record source implementations: synthetic trace generation and CSV ingestion.

pub mod csv_trace;
pub mod synthetic;
