//! Local batch driver
//!
//! The engine applies the per-record boundary to every line in parallel;
//! the job runner adds input loading and result files around it.

pub mod engine;
pub mod job;

pub use engine::{classify_line, process_line, run_lines};
pub use job::{JobReport, analyze_input, run_job};
