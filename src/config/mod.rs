//! Configuration for analysis runs.

use std::fmt;

use crate::error::{AnalysisError, Result};

/// Default number of lines handed to one parallel work unit
pub const DEFAULT_CHUNK_SIZE: usize = 16384;

/// First field of the CSV header line
pub const DEFAULT_HEADER_SENTINEL: &str = "PatientId";

/// Helper function to get the chunk size from environment
#[must_use]
pub fn get_chunk_size() -> Option<usize> {
    std::env::var("NOSHOW_CHUNK_SIZE")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
}

/// Configuration for an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Field delimiter of input lines
    pub delimiter: char,
    /// Value of the first field that marks a header line
    pub header_sentinel: String,
    /// Number of lines per parallel work unit
    pub chunk_size: usize,
    /// Number of classification worker threads
    pub worker_threads: usize,
    /// Pre-aggregate observations per worker before the final reduction
    pub use_combiner: bool,
    /// Show progress bars while loading and classifying
    pub show_progress: bool,
    /// Minimum bucket total for a row to appear in summary tables
    pub min_sample_size: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            header_sentinel: DEFAULT_HEADER_SENTINEL.to_string(),
            chunk_size: get_chunk_size().unwrap_or(DEFAULT_CHUNK_SIZE),
            worker_threads: num_cpus::get(),
            use_combiner: true,
            show_progress: true,
            min_sample_size: 0,
        }
    }
}

impl AnalysisConfig {
    /// Check that the configuration can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(AnalysisError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.worker_threads == 0 {
            return Err(AnalysisError::InvalidConfig(
                "worker_threads must be greater than zero".to_string(),
            ));
        }
        if self.header_sentinel.contains(self.delimiter) {
            return Err(AnalysisError::InvalidConfig(format!(
                "header sentinel '{}' contains the delimiter",
                self.header_sentinel
            )));
        }
        Ok(())
    }
}

impl fmt::Display for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Configuration:")?;
        writeln!(f, "  Delimiter: '{}'", self.delimiter)?;
        writeln!(f, "  Header Sentinel: {}", self.header_sentinel)?;
        writeln!(f, "  Chunk Size: {}", self.chunk_size)?;
        writeln!(f, "  Worker Threads: {}", self.worker_threads)?;
        writeln!(f, "  Combiner: {}", self.use_combiner)?;
        writeln!(f, "  Minimum Sample Size: {}", self.min_sample_size)?;
        Ok(())
    }
}
