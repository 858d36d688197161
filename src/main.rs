use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use log::error;
use noshow_stats::{AnalysisConfig, run_job};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

const USAGE: &str = "Usage: noshow-stats <input path> <output path>";
const EXAMPLE: &str =
    "Example: noshow-stats /patient_no_show_analysis/raw_data /patient_no_show_analysis/results/patient_demographics";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output] = args.as_slice() else {
        eprintln!("{USAGE}");
        eprintln!("{EXAMPLE}");
        return Ok(ExitCode::from(255));
    };
    let (input, output) = (PathBuf::from(input), PathBuf::from(output));

    let config = AnalysisConfig::default();
    log::debug!("{config}");
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build_global()
        .context("failed to start worker pool")?;

    println!("Starting Patient Demographics Analysis Job...");
    println!("Input Path: {}", input.display());
    println!("Output Path: {}", output.display());

    match run_job(&input, &output, &config)
        .await
        .with_context(|| format!("analysis of {} failed", input.display()))
    {
        Ok(report) => {
            println!("Job completed successfully!");
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{e:#}");
            println!("Job failed!");
            Ok(ExitCode::FAILURE)
        }
    }
}
