use std::collections::BTreeSet;

use attrition_dash::analysis::summarize;
use attrition_dash::data::export::raw_csv;
use attrition_dash::data::filter::{apply, FilterCriteria};
use attrition_dash::data::loader::load_reader;
use attrition_dash::data::model::{Dataset, Employee, Flag};
use proptest::prelude::*;

const DEPARTMENTS: [&str; 3] = ["Sales", "Research & Development", "Human Resources"];
const ROLES: [&str; 3] = ["Manager", "Sales Executive", "Research Scientist"];
const FIELDS: [&str; 3] = ["Life Sciences", "Medical", "Other"];

fn employee_strategy() -> impl Strategy<Value = Employee> {
    (
        (18u32..61, any::<bool>(), 0usize..3, 1u32..30, 0usize..3),
        (1u8..6, 0usize..3, 1u8..5, 1000u32..20_000, any::<bool>()),
        (1u8..5, 0u32..40),
    )
        .prop_map(
            |(
                (age, left, dept, distance, field),
                (job_level, role, satisfaction, income, overtime),
                (balance, years),
            )| Employee {
                age,
                attrition: Flag::from(left),
                department: DEPARTMENTS[dept].to_string(),
                distance_from_home: distance,
                education_field: FIELDS[field].to_string(),
                employee_number: 0,
                job_level,
                job_role: ROLES[role].to_string(),
                job_satisfaction: satisfaction,
                monthly_income: income,
                over_time: Flag::from(overtime),
                work_life_balance: balance,
                years_at_company: years,
            },
        )
}

/// Employees with unique, sequential identifiers.
fn records_strategy() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(employee_strategy(), 0..40).prop_map(|mut v| {
        for (i, e) in v.iter_mut().enumerate() {
            e.employee_number = i as u32 + 1;
        }
        v
    })
}

fn subset(all: &[&str], mask: u8) -> BTreeSet<String> {
    all.iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, s)| s.to_string())
        .collect()
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        0u8..8,
        0u8..8,
        0u8..8,
        0u32..21_000,
        0u32..21_000,
        prop_oneof![Just(String::new()), (0u32..50).prop_map(|n| n.to_string())],
    )
        .prop_map(|(d, r, f, a, b, id)| FilterCriteria {
            departments: subset(&DEPARTMENTS, d),
            job_roles: subset(&ROLES, r),
            education_fields: subset(&FIELDS, f),
            income_min: a.min(b),
            income_max: a.max(b),
            employee_id: id,
        })
}

proptest! {
    #[test]
    fn apply_is_idempotent(records in records_strategy(), c in criteria_strategy()) {
        let once: Vec<Employee> = apply(&records, &c).into_iter().cloned().collect();
        let twice: Vec<Employee> = apply(&once, &c).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn id_search_returns_only_that_id(records in records_strategy(), c in criteria_strategy()) {
        prop_assume!(!c.employee_id.is_empty());
        let view = apply(&records, &c);
        prop_assert!(view.len() <= 1);
        for e in view {
            prop_assert_eq!(e.employee_number.to_string(), c.employee_id.clone());
        }
    }

    #[test]
    fn summary_total_matches_view(records in records_strategy(), c in criteria_strategy()) {
        let view = apply(&records, &c);
        let m = summarize(view.iter().copied());
        prop_assert_eq!(m.total, view.len());
        prop_assert!(m.attrition_rate.is_finite());
        prop_assert!((0.0..=100.0).contains(&m.attrition_rate));
        prop_assert!(m.mean_age.is_finite());
    }

    #[test]
    fn csv_round_trip_preserves_records(records in records_strategy()) {
        let ds = Dataset::from_employees(&records).unwrap();
        let again = load_reader(raw_csv(&ds).unwrap().as_bytes()).unwrap();
        prop_assert_eq!(again.employees, records);
    }
}
