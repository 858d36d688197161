//! Result file writer
//!
//! Final totals are written as one `key<TAB>count` line per analysis key,
//! sorted by key, into `part-r-00000` inside a fresh output directory. An
//! empty `_SUCCESS` marker is written last.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::algorithm::aggregator::AggregateResult;
use crate::error::{AnalysisError, Result};
use crate::utils::logging::log_operation_complete;

/// Name of the file holding the totals
pub const RESULT_FILE_NAME: &str = "part-r-00000";

/// Name of the marker written after a complete run
pub const SUCCESS_MARKER: &str = "_SUCCESS";

/// Name of the JSON summary written next to the totals
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// Create the output directory, failing if it already exists
pub fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        return Err(AnalysisError::OutputExists(output_dir.to_path_buf()));
    }
    fs::create_dir_all(output_dir)?;
    Ok(())
}

/// Write the totals file into a prepared output directory
pub fn write_totals(output_dir: &Path, result: &AggregateResult) -> Result<PathBuf> {
    let path = output_dir.join(RESULT_FILE_NAME);
    let mut writer = BufWriter::with_capacity(512 * 1024, File::create(&path)?);

    let entries = result.sorted_entries();
    for (key, count) in &entries {
        writeln!(writer, "{key}\t{count}")?;
    }
    writer.flush()?;

    log_operation_complete("wrote", &path, entries.len(), None);
    Ok(path)
}

/// Write any serializable report as pretty JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Mark the output directory as complete
pub fn write_success_marker(output_dir: &Path) -> Result<()> {
    File::create(output_dir.join(SUCCESS_MARKER))?;
    Ok(())
}

/// Prepare `output_dir`, write the totals and mark the directory complete
pub fn write_results(output_dir: &Path, result: &AggregateResult) -> Result<PathBuf> {
    prepare_output_dir(output_dir)?;
    let path = write_totals(output_dir, result)?;
    write_success_marker(output_dir)?;
    Ok(path)
}
