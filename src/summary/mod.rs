//! Attendance summaries
//!
//! This module turns final totals into per-dimension tables of attended
//! and no-show counts with no-show rates, and renders them as a report.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::aggregator::AggregateResult;
use crate::models::key::Dimension;
use crate::models::record::AttendanceStatus;

/// Percentage of no-shows among all appointments, 0 when there are none
#[must_use]
pub fn no_show_rate(attended: u64, no_show: u64) -> f64 {
    let total = attended + no_show;
    if total == 0 {
        0.0
    } else {
        no_show as f64 / total as f64 * 100.0
    }
}

/// Counts for one value of a dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub value: String,
    pub attended: u64,
    pub no_show: u64,
    pub total: u64,
    pub no_show_rate: f64,
}

impl SummaryRow {
    #[must_use]
    pub fn new(value: String, attended: u64, no_show: u64) -> Self {
        Self {
            value,
            attended,
            no_show,
            total: attended + no_show,
            no_show_rate: no_show_rate(attended, no_show),
        }
    }
}

/// Table of one dimension, highest no-show rate first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionSummary {
    pub dimension: Dimension,
    pub rows: Vec<SummaryRow>,
}

impl DimensionSummary {
    /// Build the table for `dimension`, dropping rows whose total is below
    /// `min_sample`
    #[must_use]
    pub fn from_result(result: &AggregateResult, dimension: Dimension, min_sample: u64) -> Self {
        let mut counts: FxHashMap<String, (u64, u64)> = FxHashMap::default();
        for (key, count) in result.iter().filter(|(key, _)| key.dimension() == dimension) {
            let entry = counts.entry(key.value_label()).or_default();
            match key.status() {
                AttendanceStatus::Attended => entry.0 += count,
                AttendanceStatus::NoShow => entry.1 += count,
            }
        }

        let mut rows: Vec<SummaryRow> = counts
            .into_iter()
            .map(|(value, (attended, no_show))| SummaryRow::new(value, attended, no_show))
            .filter(|row| row.total >= min_sample)
            .collect();
        rows.sort_by(|a, b| {
            b.no_show_rate
                .total_cmp(&a.no_show_rate)
                .then_with(|| a.value.cmp(&b.value))
        });

        Self { dimension, rows }
    }

    /// The `n` values with the highest no-show rate
    #[must_use]
    pub fn highest_risk(&self, n: usize) -> &[SummaryRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    #[must_use]
    pub fn row(&self, value: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.value == value)
    }
}

/// Totals over all classified records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallSummary {
    pub attended: u64,
    pub no_show: u64,
    pub total: u64,
    pub no_show_rate: f64,
}

impl OverallSummary {
    /// Every classified record emits exactly one SMS key, so the SMS
    /// dimension counts each record once.
    #[must_use]
    pub fn from_result(result: &AggregateResult) -> Self {
        let attended = result.dimension_total(Dimension::Sms, AttendanceStatus::Attended);
        let no_show = result.dimension_total(Dimension::Sms, AttendanceStatus::NoShow);
        Self {
            attended,
            no_show,
            total: attended + no_show,
            no_show_rate: no_show_rate(attended, no_show),
        }
    }
}

/// Overall totals plus one table per dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub overall: OverallSummary,
    pub dimensions: Vec<DimensionSummary>,
}

impl AnalysisReport {
    #[must_use]
    pub fn from_result(result: &AggregateResult, min_sample: u64) -> Self {
        let dimensions = Dimension::all_dimensions()
            .into_iter()
            .map(|dimension| DimensionSummary::from_result(result, dimension, min_sample))
            .collect();
        Self {
            overall: OverallSummary::from_result(result),
            dimensions,
        }
    }

    #[must_use]
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionSummary> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Appointment Attendance Summary:")?;
        writeln!(f, "  Total Records: {}", self.overall.total)?;
        writeln!(f, "  Attended: {}", self.overall.attended)?;
        writeln!(f, "  No-Shows: {}", self.overall.no_show)?;
        writeln!(f, "  No-Show Rate: {:.1}%", self.overall.no_show_rate)?;

        for summary in &self.dimensions {
            if summary.rows.is_empty() {
                continue;
            }
            writeln!(f, "\n{}:", summary.dimension)?;
            for row in &summary.rows {
                writeln!(
                    f,
                    "  {:<28} attended {:>8}  no-show {:>8}  rate {:>5.1}%",
                    row.value, row.attended, row.no_show, row.no_show_rate
                )?;
            }
        }
        Ok(())
    }
}
