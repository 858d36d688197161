//! Domain models
//!
//! This module contains the appointment record and the analysis key types.

pub mod key;
pub mod record;

pub use key::{AnalysisKey, Dimension};
pub use record::{AttendanceStatus, Record};
