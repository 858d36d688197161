//! Batch job runner
//!
//! Wires input loading, parallel classification and result writing into
//! one run over an input path, producing a [`JobReport`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;

use crate::algorithm::aggregator::AggregateResult;
use crate::async_io::load_input_async;
use crate::config::AnalysisConfig;
use crate::counter::{AtomicRecordCounter, RecordCounter};
use crate::error::{AnalysisError, Result};
use crate::pipeline::engine::run_lines;
use crate::results::{
    SUMMARY_FILE_NAME, prepare_output_dir, write_json, write_success_marker, write_totals,
};
use crate::summary::AnalysisReport;
use crate::utils::logging::{create_spinner, finish_progress_bar};

/// Outcome of a completed job
#[derive(Debug, Clone)]
pub struct JobReport {
    /// Number of input files read
    pub input_files: usize,
    /// Number of input lines read, header included
    pub lines_read: usize,
    /// Number of records that were classified
    pub classified_records: u64,
    /// Number of distinct analysis keys
    pub distinct_keys: usize,
    /// Value of the malformed-record counter after the run
    pub malformed_records: u64,
    /// File holding the totals
    pub output_file: PathBuf,
    /// Wall-clock time of the whole job
    pub elapsed: Duration,
    /// Per-dimension summary written as JSON next to the totals
    pub summary: AnalysisReport,
}

impl fmt::Display for JobReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Execution Time: {} ms", self.elapsed.as_millis())?;
        writeln!(f, "Input Files: {}", self.input_files)?;
        writeln!(f, "Lines Read: {}", self.lines_read)?;
        writeln!(f, "Classified Records: {}", self.classified_records)?;
        writeln!(f, "Distinct Keys: {}", self.distinct_keys)?;
        write!(f, "Malformed Records: {}", self.malformed_records)
    }
}

/// Load and classify everything under `input`, counting malformed records
/// into `counter`
pub async fn analyze_input(
    input: &Path,
    config: &AnalysisConfig,
    counter: Arc<dyn RecordCounter>,
) -> Result<(usize, usize, AggregateResult)> {
    config.validate()?;
    let loaded = load_input_async(input, config.show_progress).await?;
    let input_files = loaded.files.len();
    let lines_read = loaded.line_count();

    // Classification is CPU bound; keep it off the async workers
    let config = config.clone();
    let result = tokio::task::spawn_blocking(move || {
        run_lines(&loaded.lines, &config, counter.as_ref())
    })
    .await
    .map_err(|e| AnalysisError::Task(e.to_string()))??;

    Ok((input_files, lines_read, result))
}

/// Run the full job: classify `input` and write totals and summary into
/// the fresh directory `output`
pub async fn run_job(input: &Path, output: &Path, config: &AnalysisConfig) -> Result<JobReport> {
    let start = Instant::now();
    if output.exists() {
        return Err(AnalysisError::OutputExists(output.to_path_buf()));
    }

    let counter = Arc::new(AtomicRecordCounter::malformed());
    let (input_files, lines_read, result) =
        analyze_input(input, config, counter.clone()).await?;

    let summary = AnalysisReport::from_result(&result, config.min_sample_size);

    let spinner = create_spinner(Some("Writing results"), config.show_progress);
    prepare_output_dir(output)?;
    let output_file = write_totals(output, &result)?;
    write_json(&output.join(SUMMARY_FILE_NAME), &summary)?;
    write_success_marker(output)?;
    finish_progress_bar(&spinner, Some("Results written"));

    let malformed_records = counter.value();
    info!("{counter}");

    Ok(JobReport {
        input_files,
        lines_read,
        classified_records: summary.overall.total,
        distinct_keys: result.len(),
        malformed_records,
        output_file,
        elapsed: start.elapsed(),
        summary,
    })
}
