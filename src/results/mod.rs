//! Reading and writing final totals

pub mod reader;
pub mod writer;

pub use reader::{parse_result_line, parse_results, read_results};
pub use writer::{
    RESULT_FILE_NAME, SUCCESS_MARKER, SUMMARY_FILE_NAME, prepare_output_dir, write_json,
    write_results, write_success_marker, write_totals,
};
