//! Concurrent loading of input files

use std::path::{Path, PathBuf};
use std::time::Instant;

use futures::future::try_join_all;

use crate::async_io::file_ops::{find_input_files_async, read_lines_async};
use crate::error::{AnalysisError, Result};
use crate::utils::logging::{
    create_main_progress_bar, finish_and_clear, log_operation_complete, log_operation_start,
};

/// Lines loaded from the input files of one job
#[derive(Debug, Clone, Default)]
pub struct LoadedInput {
    /// Files that were read, in load order
    pub files: Vec<PathBuf>,
    /// Lines of every file, concatenated in file order
    pub lines: Vec<String>,
}

impl LoadedInput {
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Load every input file under `input` concurrently
///
/// # Errors
/// Returns an error if input discovery fails or any file cannot be read
pub async fn load_input_async(input: &Path, show_progress: bool) -> Result<LoadedInput> {
    let start = Instant::now();
    let files = find_input_files_async(input).await?;
    log_operation_start("loading input files", input);

    let pb = create_main_progress_bar(files.len() as u64, Some("Reading input files"), show_progress);
    let per_file = try_join_all(files.iter().map(|path| {
        let pb = pb.clone();
        async move {
            let lines = read_lines_async(path).await?;
            pb.inc(1);
            Ok::<_, AnalysisError>(lines)
        }
    }))
    .await?;
    finish_and_clear(&pb);

    let lines: Vec<String> = per_file.into_iter().flatten().collect();
    log_operation_complete("loaded", input, lines.len(), Some(start.elapsed()));

    Ok(LoadedInput { files, lines })
}
