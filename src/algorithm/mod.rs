//! Record parsing, classification and aggregation

pub mod aggregator;
pub mod categories;
pub mod classifier;
pub mod parser;
