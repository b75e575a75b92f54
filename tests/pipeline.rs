//! End-to-end tests of the filter → summary → export pipeline.
//!
//! Covers:
//! - Department filtering and attrition rate
//! - Identifier override
//! - Empty views and zero-valued metrics
//! - CSV export / re-import fidelity
//! - Report payload for a filtered view

use std::collections::BTreeSet;
use std::sync::Arc;

use attrition_dash::analysis::{summarize, DashboardAggregates};
use attrition_dash::data::export::{filtered_csv, raw_csv};
use attrition_dash::data::filter::{apply, filtered_indices, FilterCriteria};
use attrition_dash::data::loader::load_reader;
use attrition_dash::data::model::{Dataset, Employee, Flag};
use attrition_dash::report::ReportContent;
use attrition_dash::state::{AppState, Category};

// =============================================================================
// Test Helpers
// =============================================================================

fn employee(id: u32, dept: &str, income: u32, attrition: Flag) -> Employee {
    Employee {
        age: 35,
        attrition,
        department: dept.to_string(),
        distance_from_home: 3,
        education_field: "Medical".to_string(),
        employee_number: id,
        job_level: 2,
        job_role: "Manager".to_string(),
        job_satisfaction: 3,
        monthly_income: income,
        over_time: Flag::No,
        work_life_balance: 2,
        years_at_company: 4,
    }
}

fn two_records() -> Vec<Employee> {
    vec![
        employee(1, "Sales", 5000, Flag::Yes),
        employee(2, "R&D", 9000, Flag::No),
    ]
}

fn open_criteria(records: &[Employee]) -> FilterCriteria {
    let ds = Dataset::from_employees(records).unwrap();
    let mut c = FilterCriteria::all(&ds);
    c.income_min = 0;
    c.income_max = 10_000;
    c
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn sales_only_view_has_full_attrition() {
    let records = two_records();
    let mut c = open_criteria(&records);
    c.departments = BTreeSet::from(["Sales".to_string()]);

    let view = apply(&records, &c);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].employee_number, 1);

    let m = summarize(view);
    assert_eq!(m.total, 1);
    assert_eq!(m.attrition_rate, 100.0);
}

#[test]
fn identifier_search_ignores_department_restriction() {
    let records = two_records();
    let mut c = open_criteria(&records);
    c.departments = BTreeSet::from(["Sales".to_string()]);
    c.employee_id = "2".to_string();

    let view = apply(&records, &c);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].employee_number, 2);
}

#[test]
fn unmatched_income_range_degrades_to_zeros() {
    let records = two_records();
    let mut c = open_criteria(&records);
    c.income_min = 20_000;
    c.income_max = 30_000;

    let view = apply(&records, &c);
    assert!(view.is_empty());

    let m = summarize(view.iter().copied());
    assert_eq!(m.total, 0);
    assert_eq!(m.attrition_rate, 0.0);
    assert_eq!(m.mean_age, 0.0);
    assert_eq!(m.mean_satisfaction, 0.0);

    let agg = DashboardAggregates::compute(&view);
    assert!(agg.by_department.is_empty());

    let lines = ReportContent::new(m).summary_lines();
    assert_eq!(lines[1].1, "0.00%");
}

#[test]
fn unknown_identifier_is_an_empty_view() {
    let records = two_records();
    let mut c = open_criteria(&records);
    c.employee_id = "999".to_string();
    assert!(filtered_indices(&records, &c).is_empty());
}

// =============================================================================
// Export fidelity
// =============================================================================

#[test]
fn exported_csv_reimports_to_same_records() {
    let mut records = two_records();
    records.push(employee(3, "Sales, Inside", 4200, Flag::No));
    records[0].job_role = "Quote \"Lead\"".to_string();

    let ds = Dataset::from_employees(&records).unwrap();
    let text = raw_csv(&ds).unwrap();
    let again = load_reader(text.as_bytes()).unwrap();

    assert_eq!(again.employees, records);
    assert_eq!(raw_csv(&again).unwrap(), text);
}

#[test]
fn filtered_export_reimports_to_filtered_view() {
    let records = two_records();
    let ds = Dataset::from_employees(&records).unwrap();
    let mut c = FilterCriteria::all(&ds);
    c.departments = BTreeSet::from(["R&D".to_string()]);

    let indices = filtered_indices(&ds.employees, &c);
    let again = load_reader(filtered_csv(&ds, &indices).unwrap().as_bytes()).unwrap();
    assert_eq!(again.employees, vec![records[1].clone()]);
}

// =============================================================================
// App state
// =============================================================================

#[test]
fn state_pipeline_tracks_filter_changes() {
    let ds = Dataset::from_employees(&two_records()).unwrap();
    let mut state = AppState::new(Arc::new(ds), None);
    assert_eq!(state.summary.total, 2);
    assert_eq!(state.summary.attrition_rate, 50.0);

    state.toggle(Category::Department, "R&D");
    assert_eq!(state.summary.total, 1);
    assert_eq!(state.summary.attrition_rate, 100.0);
    assert_eq!(state.report().summary.total, 1);
}
