//! Appointment record model
//!
//! A [`Record`] is the typed form of one input line. It is built by the
//! record parser, consumed by the classifier and dropped afterwards.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the patient showed up for the appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Attended,
    NoShow,
}

impl AttendanceStatus {
    /// Derive the status from the raw `No-show` field.
    ///
    /// Only a case-insensitive `Yes` marks a no-show.
    #[must_use]
    pub fn from_no_show(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("yes") {
            Self::NoShow
        } else {
            Self::Attended
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attended => "Attended",
            Self::NoShow => "NoShow",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Attended" => Ok(Self::Attended),
            "NoShow" => Ok(Self::NoShow),
            other => Err(format!("unknown attendance status '{other}'")),
        }
    }
}

/// One validated appointment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Gender code as found in the input, e.g. `F` or `M`
    pub gender: String,
    /// Age in years, within 0..=120
    pub age: u8,
    /// Neighbourhood name, `None` when the field was empty
    pub neighbourhood: Option<String>,
    pub hypertension: bool,
    pub diabetes: bool,
    pub alcoholism: bool,
    /// Handicap degree, 0 means none
    pub handicap_level: u8,
    pub sms_received: bool,
    pub scheduled_date: NaiveDate,
    pub appointment_date: NaiveDate,
    pub attendance: AttendanceStatus,
}

impl Record {
    /// Calendar days between scheduling and appointment, negative when the
    /// appointment precedes the scheduling date
    #[must_use]
    pub fn lead_time_days(&self) -> i64 {
        (self.appointment_date - self.scheduled_date).num_days()
    }

    #[must_use]
    pub const fn has_handicap(&self) -> bool {
        self.handicap_level != 0
    }

    /// Number of the four tracked conditions present
    #[must_use]
    pub fn condition_count(&self) -> u8 {
        [
            self.hypertension,
            self.diabetes,
            self.alcoholism,
            self.has_handicap(),
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }
}
