use std::collections::BTreeMap;

use crate::data::model::{Employee, Flag};

// ---------------------------------------------------------------------------
// Attrition cross-tabulation
// ---------------------------------------------------------------------------

/// Stayed / left counts for one category value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttritionSplit {
    pub stayed: usize,
    pub left: usize,
}

impl AttritionSplit {
    pub fn count(&self, attrition: Flag) -> usize {
        match attrition {
            Flag::Yes => self.left,
            Flag::No => self.stayed,
        }
    }

    pub fn total(&self) -> usize {
        self.stayed + self.left
    }
}

/// Category value → attrition split. Keys iterate in ascending order so the
/// same view always yields the same chart.
pub type CrossTab<K> = BTreeMap<K, AttritionSplit>;

/// Count records per (`key`, attrition).
pub fn cross_tab<'a, K, I, F>(records: I, key: F) -> CrossTab<K>
where
    K: Ord,
    I: IntoIterator<Item = &'a Employee>,
    F: Fn(&Employee) -> K,
{
    let mut tab = CrossTab::new();
    for e in records {
        let split: &mut AttritionSplit = tab.entry(key(e)).or_default();
        if e.has_left() {
            split.left += 1;
        } else {
            split.stayed += 1;
        }
    }
    tab
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

/// Box-plot statistics. Quartiles use linear interpolation between the
/// closest ranks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub count: usize,
}

/// `None` when `values` is empty.
pub fn five_number_summary(mut values: Vec<f64>) -> Option<FiveNumberSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    Some(FiveNumberSummary {
        min: values[0],
        q1: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q3: quantile(&values, 0.75),
        max: values[values.len() - 1],
        count: values.len(),
    })
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Five-number summary of `value` per attrition group. Groups with no
/// records are absent.
pub fn distribution_by_attrition<'a, I, F>(
    records: I,
    value: F,
) -> BTreeMap<Flag, FiveNumberSummary>
where
    I: IntoIterator<Item = &'a Employee>,
    F: Fn(&Employee) -> f64,
{
    let mut groups: BTreeMap<Flag, Vec<f64>> = BTreeMap::new();
    for e in records {
        groups.entry(e.attrition).or_default().push(value(e));
    }
    groups
        .into_iter()
        .filter_map(|(flag, vals)| five_number_summary(vals).map(|s| (flag, s)))
        .collect()
}

// ---------------------------------------------------------------------------
// Work-life balance of leavers
// ---------------------------------------------------------------------------

/// One slice of the leavers' work-life-balance breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelShare {
    pub level: u8,
    pub count: usize,
    /// Percentage of all leavers in the view.
    pub share: f64,
}

pub fn leaver_work_life_balance<'a>(
    records: impl IntoIterator<Item = &'a Employee>,
) -> Vec<LevelShare> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for e in records.into_iter().filter(|e| e.has_left()) {
        *counts.entry(e.work_life_balance).or_default() += 1;
    }
    let leavers: usize = counts.values().sum();
    counts
        .into_iter()
        .map(|(level, count)| LevelShare {
            level,
            count,
            share: count as f64 / leavers as f64 * 100.0,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Everything the chart grid needs
// ---------------------------------------------------------------------------

/// Chart-ready aggregates for one filtered view.
#[derive(Debug, Clone, Default)]
pub struct DashboardAggregates {
    pub by_department: CrossTab<String>,
    pub income_by_attrition: BTreeMap<Flag, FiveNumberSummary>,
    pub age_by_attrition: BTreeMap<Flag, FiveNumberSummary>,
    pub by_overtime: CrossTab<Flag>,
    pub leaver_work_life: Vec<LevelShare>,
    pub by_job_level: CrossTab<u8>,
    pub by_distance: CrossTab<u32>,
    pub by_tenure: CrossTab<u32>,
}

impl DashboardAggregates {
    pub fn compute(view: &[&Employee]) -> Self {
        let records = || view.iter().copied();
        DashboardAggregates {
            by_department: cross_tab(records(), |e| e.department.clone()),
            income_by_attrition: distribution_by_attrition(records(), |e| {
                f64::from(e.monthly_income)
            }),
            age_by_attrition: distribution_by_attrition(records(), |e| f64::from(e.age)),
            by_overtime: cross_tab(records(), |e| e.over_time),
            leaver_work_life: leaver_work_life_balance(records()),
            by_job_level: cross_tab(records(), |e| e.job_level),
            by_distance: cross_tab(records(), |e| e.distance_from_home),
            by_tenure: cross_tab(records(), |e| e.years_at_company),
        }
    }
}
