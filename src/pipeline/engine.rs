//! Parallel classification engine
//!
//! Lines are processed in independent chunks on the rayon pool. Each chunk
//! is one worker's share of the input; no state is shared between workers
//! except the malformed-record counter.

use std::time::Instant;

use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::algorithm::aggregator::{AggregateResult, merge, reduce};
use crate::algorithm::classifier::{Observations, try_classify};
use crate::algorithm::parser::RecordParser;
use crate::config::AnalysisConfig;
use crate::counter::RecordCounter;
use crate::error::{RecordError, Result};
use crate::models::key::AnalysisKey;
use crate::utils::logging::{create_main_progress_bar, finish_and_clear, log_malformed_record};

/// Parse and classify one line.
///
/// This is the per-record boundary: every rejection is absorbed here and
/// only malformed records are counted.
pub fn process_line(
    parser: &RecordParser,
    line: &str,
    counter: &dyn RecordCounter,
) -> Observations {
    match classify_line(parser, line) {
        Ok(keys) => keys,
        Err(err) => {
            if err.is_malformed() {
                counter.increment(1);
                log_malformed_record(line, &err.to_string());
            }
            Observations::new()
        }
    }
}

/// Parse and classify one line, reporting why it produced nothing
pub fn classify_line(
    parser: &RecordParser,
    line: &str,
) -> std::result::Result<Observations, RecordError> {
    let record = parser.parse(line)?;
    try_classify(&record)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Classify all lines and aggregate the observations.
///
/// With the combiner enabled every chunk collapses its own observations
/// before the partials are merged. Without it, raw observations are
/// grouped by key and reduced in one final pass. Both produce the same
/// totals.
pub fn run_lines<S>(
    lines: &[S],
    config: &AnalysisConfig,
    counter: &dyn RecordCounter,
) -> Result<AggregateResult>
where
    S: AsRef<str> + Sync,
{
    config.validate()?;
    let start = Instant::now();
    let parser = RecordParser::from_config(config);

    let chunk_count = lines.len().div_ceil(config.chunk_size);
    let pb = create_main_progress_bar(
        chunk_count as u64,
        Some("Classifying records"),
        config.show_progress,
    );

    let result = if config.use_combiner {
        lines
            .par_chunks(config.chunk_size)
            .map(|chunk| {
                let partial = AggregateResult::from_observations(
                    chunk
                        .iter()
                        .map(|line| line.as_ref())
                        .filter(|line| !is_blank(line))
                        .flat_map(|line| process_line(&parser, line, counter)),
                );
                pb.inc(1);
                partial
            })
            .reduce(AggregateResult::new, merge)
    } else {
        let observed: Vec<AnalysisKey> = lines
            .par_chunks(config.chunk_size)
            .flat_map_iter(|chunk| {
                let keys: Vec<AnalysisKey> = chunk
                    .iter()
                    .map(|line| line.as_ref())
                    .filter(|line| !is_blank(line))
                    .flat_map(|line| process_line(&parser, line, counter))
                    .collect();
                pb.inc(1);
                keys
            })
            .collect();
        reduce_observations(observed)
    };
    finish_and_clear(&pb);

    info!(
        "Classified {} lines into {} keys in {:?} using {} threads",
        lines.len(),
        result.len(),
        start.elapsed(),
        rayon::current_num_threads()
    );
    Ok(result)
}

/// Group raw observations by key and reduce each group
fn reduce_observations(observed: Vec<AnalysisKey>) -> AggregateResult {
    let mut grouped: FxHashMap<AnalysisKey, Vec<u64>> = FxHashMap::default();
    for key in observed {
        grouped.entry(key).or_default().push(1);
    }
    grouped
        .into_iter()
        .map(|(key, counts)| {
            let total = reduce(&key, counts);
            (key, total)
        })
        .collect()
}
