//! Analysis keys
//!
//! An [`AnalysisKey`] identifies one statistical bucket: a dimension, a value
//! within that dimension and the attendance outcome. Keys are plain values;
//! equal buckets produced by different records compare and hash equal.
//!
//! The textual form joins the dimension prefix, the value and the outcome
//! with underscores, e.g. `AgeGroup_MIDDLE_AGED_NoShow`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::algorithm::categories::{AgeDecade, AgeGroup, HealthCondition, LeadTimeCategory, SmsStatus};
use crate::error::AnalysisError;
use crate::models::record::AttendanceStatus;

/// The independent dimensions a record is broken down by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dimension {
    LeadTime,
    Gender,
    AgeGroup,
    DetailedAgeDecade,
    Neighbourhood,
    HealthCondition,
    Sms,
}

impl Dimension {
    /// Prefix of keys in this dimension
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::LeadTime => "LeadTime",
            Self::Gender => "Gender",
            Self::AgeGroup => "AgeGroup",
            Self::DetailedAgeDecade => "DetailedAgeDecade",
            Self::Neighbourhood => "Neighbourhood",
            Self::HealthCondition => "Health",
            Self::Sms => "Sms",
        }
    }

    /// Get all dimensions in report order
    #[must_use]
    pub fn all_dimensions() -> Vec<Self> {
        vec![
            Self::LeadTime,
            Self::Gender,
            Self::AgeGroup,
            Self::DetailedAgeDecade,
            Self::Neighbourhood,
            Self::HealthCondition,
            Self::Sms,
        ]
    }

    /// Human readable title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::LeadTime => "Scheduling Lead Time",
            Self::Gender => "Gender",
            Self::AgeGroup => "Age Group",
            Self::DetailedAgeDecade => "Detailed Age",
            Self::Neighbourhood => "Neighbourhood",
            Self::HealthCondition => "Health Condition",
            Self::Sms => "SMS Reminder",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One statistical bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnalysisKey {
    LeadTime {
        category: LeadTimeCategory,
        status: AttendanceStatus,
    },
    Gender {
        gender: String,
        status: AttendanceStatus,
    },
    AgeGroup {
        group: AgeGroup,
        status: AttendanceStatus,
    },
    AgeDecade {
        decade: AgeDecade,
        status: AttendanceStatus,
    },
    Neighbourhood {
        name: String,
        status: AttendanceStatus,
    },
    Health {
        condition: HealthCondition,
        status: AttendanceStatus,
    },
    Sms {
        sms: SmsStatus,
        status: AttendanceStatus,
    },
}

impl AnalysisKey {
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::LeadTime { .. } => Dimension::LeadTime,
            Self::Gender { .. } => Dimension::Gender,
            Self::AgeGroup { .. } => Dimension::AgeGroup,
            Self::AgeDecade { .. } => Dimension::DetailedAgeDecade,
            Self::Neighbourhood { .. } => Dimension::Neighbourhood,
            Self::Health { .. } => Dimension::HealthCondition,
            Self::Sms { .. } => Dimension::Sms,
        }
    }

    #[must_use]
    pub const fn status(&self) -> AttendanceStatus {
        match self {
            Self::LeadTime { status, .. }
            | Self::Gender { status, .. }
            | Self::AgeGroup { status, .. }
            | Self::AgeDecade { status, .. }
            | Self::Neighbourhood { status, .. }
            | Self::Health { status, .. }
            | Self::Sms { status, .. } => *status,
        }
    }

    /// The dimension value as it appears between prefix and outcome
    #[must_use]
    pub fn value_label(&self) -> String {
        match self {
            Self::LeadTime { category, .. } => category.label().to_string(),
            Self::Gender { gender, .. } => gender.clone(),
            Self::AgeGroup { group, .. } => group.label().to_string(),
            Self::AgeDecade { decade, .. } => decade.to_string(),
            Self::Neighbourhood { name, .. } => name.clone(),
            Self::Health { condition, .. } => condition.to_string(),
            Self::Sms { sms, .. } => sms.label().to_string(),
        }
    }

    fn from_parts(
        dimension: Dimension,
        value: &str,
        status: AttendanceStatus,
    ) -> Option<Self> {
        let key = match dimension {
            Dimension::LeadTime => Self::LeadTime {
                category: LeadTimeCategory::from_label(value)?,
                status,
            },
            Dimension::Gender => Self::Gender {
                gender: value.to_string(),
                status,
            },
            Dimension::AgeGroup => Self::AgeGroup {
                group: AgeGroup::from_label(value)?,
                status,
            },
            Dimension::DetailedAgeDecade => Self::AgeDecade {
                decade: AgeDecade::from_label(value)?,
                status,
            },
            Dimension::Neighbourhood => Self::Neighbourhood {
                name: value.to_string(),
                status,
            },
            Dimension::HealthCondition => Self::Health {
                condition: HealthCondition::from_label(value)?,
                status,
            },
            Dimension::Sms => Self::Sms {
                sms: SmsStatus::from_label(value)?,
                status,
            },
        };
        Some(key)
    }
}

impl fmt::Display for AnalysisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.dimension().prefix(),
            self.value_label(),
            self.status()
        )
    }
}

impl FromStr for AnalysisKey {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnalysisError::InvalidKey(s.to_string());

        // Longest prefix first so that no prefix shadows another
        let (dimension, rest) = Dimension::all_dimensions()
            .into_iter()
            .filter_map(|dimension| {
                s.strip_prefix(dimension.prefix())
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| (dimension, rest))
            })
            .max_by_key(|(dimension, _)| dimension.prefix().len())
            .ok_or_else(invalid)?;

        let (value, status) = rest.rsplit_once('_').ok_or_else(invalid)?;
        if value.is_empty() {
            return Err(invalid());
        }
        let status: AttendanceStatus = status.parse().map_err(|_| invalid())?;

        Self::from_parts(dimension, value, status).ok_or_else(invalid)
    }
}

impl Serialize for AnalysisKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
