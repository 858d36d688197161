//! Operation logging
//!
//! Input discovery, loading and result writing report through these
//! helpers, so every message names the path it concerns first.

use std::path::Path;
use std::time::Duration;

/// Log the start of an operation on `path`
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{}: {operation}", path.display());
}

/// Log how many items an operation handled for `path`
///
/// `verb` completes the message, e.g. `loaded 120 items in 3ms`.
pub fn log_operation_complete(verb: &str, path: &Path, items: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!("{}: {verb} {items} items in {duration:?}", path.display()),
        None => log::info!("{}: {verb} {items} items", path.display()),
    }
}

/// Log a warning about `path`
pub fn log_path_warning(message: &str, path: &Path) {
    log::warn!("{}: {message}", path.display());
}

/// Log a record that was dropped because it is malformed
pub fn log_malformed_record(line: &str, reason: &str) {
    log::debug!("Skipping malformed record ({reason}): {line}");
}
