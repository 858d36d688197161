//! Record parser
//!
//! Turns one delimited input line into a validated [`Record`]. The expected
//! layout is the 14-column appointment export:
//!
//! `PatientId,AppointmentID,Gender,ScheduledDay,AppointmentDay,Age,Neighbourhood,
//! Scholarship,Hipertension,Diabetes,Alcoholism,Handcap,SMS_received,No-show`

use chrono::NaiveDate;

use crate::config::AnalysisConfig;
use crate::error::RecordError;
use crate::models::record::{AttendanceStatus, Record};

/// Number of positional fields in an input line
pub const FIELD_COUNT: usize = 14;

/// Column positions of the fields the analysis reads
pub mod columns {
    pub const PATIENT_ID: usize = 0;
    pub const GENDER: usize = 2;
    pub const SCHEDULED_DAY: usize = 3;
    pub const APPOINTMENT_DAY: usize = 4;
    pub const AGE: usize = 5;
    pub const NEIGHBOURHOOD: usize = 6;
    pub const HYPERTENSION: usize = 8;
    pub const DIABETES: usize = 9;
    pub const ALCOHOLISM: usize = 10;
    pub const HANDICAP: usize = 11;
    pub const SMS_RECEIVED: usize = 12;
    pub const NO_SHOW: usize = 13;
}

/// Oldest accepted age in years
pub const MAX_AGE: i64 = 120;

/// Length of the `YYYY-MM-DD` prefix of date fields
const DATE_PREFIX_LEN: usize = 10;

/// Parser for appointment lines
#[derive(Debug, Clone)]
pub struct RecordParser {
    delimiter: char,
    header_sentinel: String,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl RecordParser {
    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            header_sentinel: config.header_sentinel.clone(),
        }
    }

    /// Parse one line into a record.
    ///
    /// Rejections other than [`RecordError::Malformed`] are ordinary and
    /// carry no data-quality signal.
    pub fn parse(&self, line: &str) -> Result<Record, RecordError> {
        let fields: Vec<&str> = line.split(self.delimiter).map(str::trim).collect();

        if fields[columns::PATIENT_ID] == self.header_sentinel {
            return Err(RecordError::HeaderLine);
        }
        if fields.len() < FIELD_COUNT {
            return Err(RecordError::malformed(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            )));
        }

        let gender = required(&fields, columns::GENDER, "Gender")?;
        let scheduled_day = required(&fields, columns::SCHEDULED_DAY, "ScheduledDay")?;
        let appointment_day = required(&fields, columns::APPOINTMENT_DAY, "AppointmentDay")?;
        let age_raw = required(&fields, columns::AGE, "Age")?;
        let no_show = required(&fields, columns::NO_SHOW, "No-show")?;

        let age = parse_age(age_raw)?;
        let attendance = AttendanceStatus::from_no_show(no_show);

        let scheduled_date = parse_date_prefix(scheduled_day, "ScheduledDay")?;
        let appointment_date = parse_date_prefix(appointment_day, "AppointmentDay")?;

        let neighbourhood = Some(fields[columns::NEIGHBOURHOOD])
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Record {
            gender: gender.to_string(),
            age,
            neighbourhood,
            hypertension: parse_flag(fields[columns::HYPERTENSION]),
            diabetes: parse_flag(fields[columns::DIABETES]),
            alcoholism: parse_flag(fields[columns::ALCOHOLISM]),
            handicap_level: parse_handicap(fields[columns::HANDICAP]),
            sms_received: parse_flag(fields[columns::SMS_RECEIVED]),
            scheduled_date,
            appointment_date,
            attendance,
        })
    }
}

fn required<'a>(
    fields: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, RecordError> {
    let value = fields[index];
    if value.is_empty() {
        Err(RecordError::IncompleteRecord { field: name })
    } else {
        Ok(value)
    }
}

fn parse_age(raw: &str) -> Result<u8, RecordError> {
    let invalid = || RecordError::InvalidAge {
        raw: raw.to_string(),
    };
    let age: i64 = raw.parse().map_err(|_| invalid())?;
    if !(0..=MAX_AGE).contains(&age) {
        return Err(invalid());
    }
    u8::try_from(age).map_err(|_| invalid())
}

/// Parse the calendar date from the first ten characters of a date field.
///
/// Any time component after the date is ignored.
pub fn parse_date_prefix(raw: &str, name: &str) -> Result<NaiveDate, RecordError> {
    let prefix = raw.get(..DATE_PREFIX_LEN).ok_or_else(|| {
        RecordError::malformed(format!("{name} '{raw}' is shorter than a date"))
    })?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        .map_err(|e| RecordError::malformed(format!("{name} '{raw}' is not a date: {e}")))
}

/// Condition and SMS flags are optional. Only `1` marks a flag as set; an
/// empty or unexpected value reads as absent.
fn parse_flag(raw: &str) -> bool {
    raw == "1"
}

/// Handicap degree. An empty field or `0` means none; any other value marks
/// a handicap, at level 1 when it is not a usable degree.
fn parse_handicap(raw: &str) -> u8 {
    match raw {
        "" | "0" => 0,
        other => other
            .parse::<u8>()
            .ok()
            .filter(|level| *level > 0)
            .unwrap_or(1),
    }
}
