use std::collections::BTreeSet;

use super::model::{Dataset, Employee};

// ---------------------------------------------------------------------------
// Filter criteria: what the sidebar controls currently select
// ---------------------------------------------------------------------------

/// Per-interaction selection state.
///
/// An empty category set selects nothing. A non-empty `employee_id`
/// overrides every other field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub departments: BTreeSet<String>,
    pub job_roles: BTreeSet<String>,
    pub education_fields: BTreeSet<String>,
    /// Inclusive lower bound on monthly income.
    pub income_min: u32,
    /// Inclusive upper bound on monthly income.
    pub income_max: u32,
    /// Exact-match search on `EmployeeNumber`.
    pub employee_id: String,
}

impl FilterCriteria {
    /// Everything selected and the full income range: the startup state.
    pub fn all(dataset: &Dataset) -> Self {
        let (income_min, income_max) = dataset.income_bounds;
        FilterCriteria {
            departments: dataset.departments.iter().cloned().collect(),
            job_roles: dataset.job_roles.iter().cloned().collect(),
            education_fields: dataset.education_fields.iter().cloned().collect(),
            income_min,
            income_max,
            employee_id: String::new(),
        }
    }

    /// Whether the identifier override is active.
    pub fn searches_id(&self) -> bool {
        !self.employee_id.is_empty()
    }

    /// Whether a single employee passes.
    pub fn matches(&self, employee: &Employee) -> bool {
        if self.searches_id() {
            return employee.employee_number.to_string() == self.employee_id;
        }
        self.departments.contains(&employee.department)
            && self.job_roles.contains(&employee.job_role)
            && self.education_fields.contains(&employee.education_field)
            && (self.income_min..=self.income_max).contains(&employee.monthly_income)
    }
}

// ---------------------------------------------------------------------------
// Applying the criteria
// ---------------------------------------------------------------------------

/// Records passing `criteria`, in input order.
pub fn apply<'a>(records: &'a [Employee], criteria: &FilterCriteria) -> Vec<&'a Employee> {
    records.iter().filter(|e| criteria.matches(e)).collect()
}

/// Indices of records passing `criteria`, in input order.
pub fn filtered_indices(records: &[Employee], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, e)| criteria.matches(e))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::employee;
    use crate::data::model::Flag;

    fn records() -> Vec<Employee> {
        vec![
            employee(1, "Sales", 5000, Flag::Yes),
            employee(2, "R&D", 9000, Flag::No),
        ]
    }

    fn open_criteria() -> FilterCriteria {
        let ds = Dataset::from_employees(&records()).unwrap();
        let mut c = FilterCriteria::all(&ds);
        c.income_min = 0;
        c.income_max = 10_000;
        c
    }

    #[test]
    fn department_restriction() {
        let mut c = open_criteria();
        c.departments = BTreeSet::from(["Sales".to_string()]);
        let recs = records();
        let out = apply(&recs, &c);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].employee_number, 1);
    }

    #[test]
    fn identifier_overrides_other_filters() {
        let mut c = open_criteria();
        c.departments = BTreeSet::from(["Sales".to_string()]);
        c.income_min = 0;
        c.income_max = 1;
        c.employee_id = "2".to_string();
        let recs = records();
        let out = apply(&recs, &c);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].employee_number, 2);
    }

    #[test]
    fn identifier_is_exact_string_match() {
        let mut c = open_criteria();
        c.employee_id = "02".to_string();
        assert!(apply(&records(), &c).is_empty());
        c.employee_id = " 2".to_string();
        assert!(apply(&records(), &c).is_empty());
    }

    #[test]
    fn empty_category_set_matches_nothing() {
        let mut c = open_criteria();
        c.job_roles.clear();
        assert!(apply(&records(), &c).is_empty());
    }

    #[test]
    fn income_bounds_are_inclusive() {
        let mut c = open_criteria();
        c.income_min = 5000;
        c.income_max = 9000;
        assert_eq!(filtered_indices(&records(), &c), vec![0, 1]);
        c.income_min = 5001;
        assert_eq!(filtered_indices(&records(), &c), vec![1]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let mut c = open_criteria();
        c.income_min = 9000;
        c.income_max = 5000;
        assert!(apply(&records(), &c).is_empty());
    }

    #[test]
    fn income_range_outside_data_is_empty() {
        let mut c = open_criteria();
        c.income_min = 20_000;
        c.income_max = 30_000;
        assert!(filtered_indices(&records(), &c).is_empty());
    }

    #[test]
    fn all_selects_every_record() {
        let recs = records();
        let ds = Dataset::from_employees(&recs).unwrap();
        let c = FilterCriteria::all(&ds);
        assert!(!c.searches_id());
        assert_eq!(filtered_indices(&ds.employees, &c), vec![0, 1]);
    }
}
