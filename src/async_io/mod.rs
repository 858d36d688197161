//! Async input loading
//!
//! Input files are located and read with tokio; the files of a job are
//! read concurrently.

pub mod file_ops;
pub mod loader;

pub use file_ops::{find_input_files_async, is_hidden_file, read_lines_async};
pub use loader::{LoadedInput, load_input_async};
