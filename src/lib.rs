//! A Rust library for computing categorical attendance statistics over
//! patient appointment records.
//!
//! Each input line is parsed into a [`Record`], classified into a set of
//! independent [`AnalysisKey`]s and counted by an associative aggregation
//! that can run as a per-worker combiner and as the final reduction.

pub mod algorithm;
pub mod async_io;
pub mod config;
pub mod counter;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod results;
pub mod summary;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::aggregator::{AggregateResult, merge, reduce};
pub use algorithm::classifier::{Observations, classify, try_classify};
pub use algorithm::parser::RecordParser;
pub use config::AnalysisConfig;
pub use counter::{AtomicRecordCounter, RecordCounter};
pub use error::{AnalysisError, RecordError, Result};
pub use models::{AnalysisKey, AttendanceStatus, Dimension, Record};

// Driver
pub use pipeline::{JobReport, process_line, run_job, run_lines};
pub use results::read_results;
pub use summary::AnalysisReport;
