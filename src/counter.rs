//! Record counters
//!
//! Data-quality counters are passed into the processing boundary rather
//! than living in global state, so concurrent workers share one instance
//! through a reference.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter group for data-quality signals
pub const DATA_QUALITY_GROUP: &str = "DATA_QUALITY";

/// Counter name for records that failed with a structural error
pub const MALFORMED_RECORDS: &str = "MALFORMED_RECORDS";

/// A named, thread-safe counter
pub trait RecordCounter: Send + Sync {
    /// Add `n` to the counter
    fn increment(&self, n: u64);

    /// Current value
    fn value(&self) -> u64;
}

/// Counter backed by an atomic integer
#[derive(Debug)]
pub struct AtomicRecordCounter {
    group: &'static str,
    name: &'static str,
    count: AtomicU64,
}

impl AtomicRecordCounter {
    #[must_use]
    pub const fn new(group: &'static str, name: &'static str) -> Self {
        Self {
            group,
            name,
            count: AtomicU64::new(0),
        }
    }

    /// The `DATA_QUALITY.MALFORMED_RECORDS` counter
    #[must_use]
    pub const fn malformed() -> Self {
        Self::new(DATA_QUALITY_GROUP, MALFORMED_RECORDS)
    }

    #[must_use]
    pub const fn group(&self) -> &'static str {
        self.group
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// `GROUP.NAME`
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }
}

impl RecordCounter for AtomicRecordCounter {
    fn increment(&self, n: u64) {
        self.count.fetch_add(n, Ordering::Relaxed);
    }

    fn value(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

impl fmt::Display for AtomicRecordCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.qualified_name(), self.value())
    }
}
