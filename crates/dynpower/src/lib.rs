#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod experiment;
pub mod extra;
pub mod feature;
pub mod forest;
pub mod label;
pub mod linear;
pub mod record;
pub mod regressor;
pub mod tree;

#[cfg(test)]
mod tests;
