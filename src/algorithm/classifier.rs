//! Record classifier
//!
//! Produces the set of analysis keys that apply to one validated record.
//! Every dimension is evaluated independently, except the lead time, which
//! gates the whole record: a record whose appointment precedes its
//! scheduling date contributes to no dimension at all.

use smallvec::SmallVec;

use crate::algorithm::categories::{AgeDecade, AgeGroup, HealthCondition, LeadTimeCategory, SmsStatus};
use crate::algorithm::parser::MAX_AGE;
use crate::error::RecordError;
use crate::models::key::AnalysisKey;
use crate::models::record::{AttendanceStatus, Record};

/// Keys emitted for one record. A record emits at most eleven keys.
pub type Observations = SmallVec<[AnalysisKey; 12]>;

/// Neighbourhood placeholder used by exports for missing values
pub const NULL_NEIGHBOURHOOD: &str = "NULL";

/// Classify a record, returning no keys when it cannot be classified
#[must_use]
pub fn classify(record: &Record) -> Observations {
    try_classify(record).unwrap_or_default()
}

/// Classify a record, reporting a negative lead time or an age outside
/// 0..=120 as an error
pub fn try_classify(record: &Record) -> Result<Observations, RecordError> {
    if i64::from(record.age) > MAX_AGE {
        return Err(RecordError::InvalidAge {
            raw: record.age.to_string(),
        });
    }
    let status = record.attendance;
    let mut keys = Observations::new();

    analyze_lead_time(record, status, &mut keys)?;
    analyze_gender(record, status, &mut keys);
    analyze_age(record, status, &mut keys);
    analyze_neighbourhood(record, status, &mut keys);
    analyze_health(record, status, &mut keys);
    analyze_sms(record, status, &mut keys);

    Ok(keys)
}

fn analyze_lead_time(
    record: &Record,
    status: AttendanceStatus,
    keys: &mut Observations,
) -> Result<(), RecordError> {
    let days = record.lead_time_days();
    let category =
        LeadTimeCategory::from_days(days).ok_or(RecordError::InvalidLeadTime { days })?;
    keys.push(AnalysisKey::LeadTime { category, status });
    Ok(())
}

fn analyze_gender(record: &Record, status: AttendanceStatus, keys: &mut Observations) {
    keys.push(AnalysisKey::Gender {
        gender: record.gender.clone(),
        status,
    });
}

fn analyze_age(record: &Record, status: AttendanceStatus, keys: &mut Observations) {
    keys.push(AnalysisKey::AgeGroup {
        group: AgeGroup::from_age(record.age),
        status,
    });
    keys.push(AnalysisKey::AgeDecade {
        decade: AgeDecade::from_age(record.age),
        status,
    });
}

fn analyze_neighbourhood(record: &Record, status: AttendanceStatus, keys: &mut Observations) {
    if let Some(name) = record
        .neighbourhood
        .as_deref()
        .filter(|name| !name.is_empty() && *name != NULL_NEIGHBOURHOOD)
    {
        keys.push(AnalysisKey::Neighbourhood {
            name: name.to_string(),
            status,
        });
    }
}

fn analyze_health(record: &Record, status: AttendanceStatus, keys: &mut Observations) {
    let present = [
        (record.hypertension, HealthCondition::Hypertension),
        (record.diabetes, HealthCondition::Diabetes),
        (record.alcoholism, HealthCondition::Alcoholism),
        (record.has_handicap(), HealthCondition::Handicap),
    ];

    for (_, condition) in present.iter().filter(|(flag, _)| *flag) {
        keys.push(AnalysisKey::Health {
            condition: *condition,
            status,
        });
    }

    let count = record.condition_count();
    if count == 0 {
        keys.push(AnalysisKey::Health {
            condition: HealthCondition::Healthy,
            status,
        });
    }
    if let Some(condition) = HealthCondition::multiple(count) {
        keys.push(AnalysisKey::Health { condition, status });
    }
}

fn analyze_sms(record: &Record, status: AttendanceStatus, keys: &mut Observations) {
    keys.push(AnalysisKey::Sms {
        sms: SmsStatus::from_flag(record.sms_received),
        status,
    });
}
