//! Categorisation helpers
//!
//! This module defines the value domains of the analysis dimensions and the
//! rules that map raw record values onto them.

use std::fmt;

/// Scheduling lead time categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeadTimeCategory {
    /// Appointment on the day it was scheduled
    SameDay,
    /// 1 to 3 days
    Short,
    /// 4 to 7 days
    Medium,
    /// 8 to 30 days
    Long,
    /// 31 to 90 days
    VeryLong,
    /// More than 90 days
    ExtremelyLong,
}

impl LeadTimeCategory {
    /// Categorise a lead time in days, `None` if it is negative
    #[must_use]
    pub const fn from_days(days: i64) -> Option<Self> {
        match days {
            i64::MIN..=-1 => None,
            0 => Some(Self::SameDay),
            1..=3 => Some(Self::Short),
            4..=7 => Some(Self::Medium),
            8..=30 => Some(Self::Long),
            31..=90 => Some(Self::VeryLong),
            _ => Some(Self::ExtremelyLong),
        }
    }

    /// Label used in analysis keys
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SameDay => "SAME_DAY",
            Self::Short => "SHORT",
            Self::Medium => "MEDIUM",
            Self::Long => "LONG",
            Self::VeryLong => "VERY_LONG",
            Self::ExtremelyLong => "EXTREMELY_LONG",
        }
    }

    /// Get all categories in ascending order of lead time
    #[must_use]
    pub fn all_categories() -> Vec<Self> {
        vec![
            Self::SameDay,
            Self::Short,
            Self::Medium,
            Self::Long,
            Self::VeryLong,
            Self::ExtremelyLong,
        ]
    }

    /// Inverse of [`Self::label`]
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all_categories()
            .into_iter()
            .find(|category| category.label() == label)
    }
}

impl fmt::Display for LeadTimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeGroup {
    /// 18 and younger
    ChildrenYouth,
    /// 19 to 35
    YoungAdults,
    /// 36 to 55
    MiddleAged,
    /// Older than 55
    Seniors,
}

impl AgeGroup {
    /// Bracket for an age in years
    #[must_use]
    pub const fn from_age(age: u8) -> Self {
        match age {
            0..=18 => Self::ChildrenYouth,
            19..=35 => Self::YoungAdults,
            36..=55 => Self::MiddleAged,
            _ => Self::Seniors,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ChildrenYouth => "CHILDREN_YOUTH",
            Self::YoungAdults => "YOUNG_ADULTS",
            Self::MiddleAged => "MIDDLE_AGED",
            Self::Seniors => "SENIORS",
        }
    }

    #[must_use]
    pub fn all_groups() -> Vec<Self> {
        vec![
            Self::ChildrenYouth,
            Self::YoungAdults,
            Self::MiddleAged,
            Self::Seniors,
        ]
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all_groups()
            .into_iter()
            .find(|group| group.label() == label)
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ten-year age interval, identified by its lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgeDecade(u8);

impl AgeDecade {
    #[must_use]
    pub const fn from_age(age: u8) -> Self {
        Self(age / 10 * 10)
    }

    /// Lower bound of the interval
    #[must_use]
    pub const fn start(self) -> u8 {
        self.0
    }

    /// Upper bound of the interval, inclusive
    #[must_use]
    pub const fn end(self) -> u8 {
        self.0.saturating_add(9)
    }

    /// Parse a label such as `40-49`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let (start, end) = label.split_once('-')?;
        let start: u8 = start.parse().ok()?;
        let end: u8 = end.parse().ok()?;
        (start % 10 == 0 && start <= 120 && end == start + 9).then_some(Self(start))
    }
}

impl fmt::Display for AgeDecade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

/// Health condition buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthCondition {
    Hypertension,
    Diabetes,
    Alcoholism,
    Handicap,
    /// None of the four conditions present
    Healthy,
    /// Two or more conditions present, with the number of conditions
    MultipleDiseases(u8),
}

impl HealthCondition {
    /// Number of tracked conditions a record can carry
    pub const TRACKED_CONDITIONS: u8 = 4;

    /// Multiple-disease bucket for a condition count, `None` below two
    #[must_use]
    pub const fn multiple(count: u8) -> Option<Self> {
        if count >= 2 {
            Some(Self::MultipleDiseases(count))
        } else {
            None
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Hypertension" => Some(Self::Hypertension),
            "Diabetes" => Some(Self::Diabetes),
            "Alcoholism" => Some(Self::Alcoholism),
            "Handicap" => Some(Self::Handicap),
            "Healthy" => Some(Self::Healthy),
            _ => {
                let count = label.strip_prefix("MultipleDiseases_")?.parse().ok()?;
                (2..=Self::TRACKED_CONDITIONS)
                    .contains(&count)
                    .then_some(Self::MultipleDiseases(count))
            }
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hypertension => f.write_str("Hypertension"),
            Self::Diabetes => f.write_str("Diabetes"),
            Self::Alcoholism => f.write_str("Alcoholism"),
            Self::Handicap => f.write_str("Handicap"),
            Self::Healthy => f.write_str("Healthy"),
            Self::MultipleDiseases(count) => write!(f, "MultipleDiseases_{count}"),
        }
    }
}

/// SMS reminder status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SmsStatus {
    Received,
    NotReceived,
}

impl SmsStatus {
    #[must_use]
    pub const fn from_flag(received: bool) -> Self {
        if received {
            Self::Received
        } else {
            Self::NotReceived
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Received => "SMS_RECEIVED",
            Self::NotReceived => "NO_SMS",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "SMS_RECEIVED" => Some(Self::Received),
            "NO_SMS" => Some(Self::NotReceived),
            _ => None,
        }
    }
}

impl fmt::Display for SmsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
