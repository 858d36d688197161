//! Result file reader
//!
//! Reads `key<TAB>count` files back into an [`AggregateResult`]. Several
//! part files are merged with the same associative merge used by workers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithm::aggregator::{AggregateResult, merge};
use crate::error::{AnalysisError, Result};
use crate::models::key::AnalysisKey;

/// Prefix of part files inside a result directory
pub const PART_FILE_PREFIX: &str = "part-r-";

/// Parse one result line, `None` for blank lines
pub fn parse_result_line(line: &str, line_number: usize) -> Result<Option<(AnalysisKey, u64)>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let invalid = |reason: String| AnalysisError::InvalidResultLine {
        line_number,
        reason,
    };

    let (key, count) = line
        .split_once('\t')
        .ok_or_else(|| invalid("missing tab separator".to_string()))?;
    let key: AnalysisKey = key
        .parse()
        .map_err(|e: AnalysisError| invalid(e.to_string()))?;
    let count: u64 = count
        .trim()
        .parse()
        .map_err(|e| invalid(format!("invalid count '{count}': {e}")))?;

    Ok(Some((key, count)))
}

/// Parse the contents of one result file
pub fn parse_results(contents: &str) -> Result<AggregateResult> {
    let mut result = AggregateResult::new();
    for (idx, line) in contents.lines().enumerate() {
        if let Some((key, count)) = parse_result_line(line, idx + 1)? {
            result.add(key, count);
        }
    }
    Ok(result)
}

fn part_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut parts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_part = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(PART_FILE_PREFIX));
        if is_part && path.is_file() {
            parts.push(path);
        }
    }
    parts.sort();
    Ok(parts)
}

/// Read a result file, or every part file of a result directory
pub fn read_results(path: &Path) -> Result<AggregateResult> {
    if !path.exists() {
        return Err(AnalysisError::InputNotFound(path.to_path_buf()));
    }

    let files = if path.is_dir() {
        part_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    files.iter().try_fold(AggregateResult::new(), |acc, file| {
        let contents = fs::read_to_string(file)?;
        Ok(merge(acc, parse_results(&contents)?))
    })
}
