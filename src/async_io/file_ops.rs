//! Async operations for locating and reading input files

use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::{AnalysisError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_path_warning};

/// Whether a directory entry is a bookkeeping file rather than input.
///
/// Names starting with `.` or `_` (such as `_SUCCESS`) are skipped.
#[must_use]
pub fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') || name.starts_with('_'))
}

/// Find the input files for a path
///
/// A file path yields itself. A directory yields every regular, non-hidden
/// file directly inside it, sorted by path.
///
/// # Errors
/// Returns [`AnalysisError::InputNotFound`] if the path does not exist or a
/// directory holds no input files
pub async fn find_input_files_async(input: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(input)
        .await
        .map_err(|_| AnalysisError::InputNotFound(input.to_path_buf()))?;

    if metadata.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    log_operation_start("searching for input files", input);

    let mut files = Vec::new();
    let mut entries = fs::read_dir(input).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && !is_hidden_file(&path) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        log_path_warning("no input files found", input);
        return Err(AnalysisError::InputNotFound(input.to_path_buf()));
    }

    log_operation_complete("found", input, files.len(), None);
    Ok(files)
}

/// Read all lines of a text file
///
/// Line terminators (`\n` or `\r\n`) are stripped.
pub async fn read_lines_async(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut collected = Vec::new();
    while let Some(line) = lines.next_line().await? {
        collected.push(line);
    }
    Ok(collected)
}
