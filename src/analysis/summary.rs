use serde::Serialize;

use crate::data::model::Employee;

/// Headline numbers for a view.
///
/// Rates and means are `0.0` for an empty view, never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SummaryMetrics {
    pub total: usize,
    /// Percentage of employees with `Attrition = Yes`, 0..=100.
    pub attrition_rate: f64,
    /// Mean job satisfaction on the 1-4 scale.
    pub mean_satisfaction: f64,
    pub mean_age: f64,
}

/// Compute [`SummaryMetrics`] over a view.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a Employee>) -> SummaryMetrics {
    let mut total = 0usize;
    let mut left = 0usize;
    let mut satisfaction_sum = 0u64;
    let mut age_sum = 0u64;

    for e in records {
        total += 1;
        if e.has_left() {
            left += 1;
        }
        satisfaction_sum += u64::from(e.job_satisfaction);
        age_sum += u64::from(e.age);
    }

    if total == 0 {
        return SummaryMetrics::default();
    }

    let n = total as f64;
    SummaryMetrics {
        total,
        attrition_rate: left as f64 / n * 100.0,
        mean_satisfaction: satisfaction_sum as f64 / n,
        mean_age: age_sum as f64 / n,
    }
}
