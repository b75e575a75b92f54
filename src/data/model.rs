use std::collections::BTreeSet;
use std::fmt;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Flag – a Yes/No column
// ---------------------------------------------------------------------------

/// A `Yes` / `No` column such as `Attrition` or `OverTime`.
///
/// Serialized exactly as the source spells it so exports round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Flag {
    No,
    Yes,
}

impl Flag {
    pub fn is_yes(self) -> bool {
        self == Flag::Yes
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Yes => "Yes",
            Flag::No => "No",
        }
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        if b { Flag::Yes } else { Flag::No }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Employee – one row of the CSV
// ---------------------------------------------------------------------------

/// The typed subset of an HR attrition row.
///
/// Field names follow the IBM HR Analytics header; columns outside this set
/// are ignored here but kept verbatim in [`Dataset::records`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Attrition")]
    pub attrition: Flag,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "DistanceFromHome")]
    pub distance_from_home: u32,
    #[serde(rename = "EducationField")]
    pub education_field: String,
    #[serde(rename = "EmployeeNumber")]
    pub employee_number: u32,
    #[serde(rename = "JobLevel")]
    pub job_level: u8,
    #[serde(rename = "JobRole")]
    pub job_role: String,
    #[serde(rename = "JobSatisfaction")]
    pub job_satisfaction: u8,
    #[serde(rename = "MonthlyIncome")]
    pub monthly_income: u32,
    #[serde(rename = "OverTime")]
    pub over_time: Flag,
    #[serde(rename = "WorkLifeBalance")]
    pub work_life_balance: u8,
    #[serde(rename = "YearsAtCompany")]
    pub years_at_company: u32,
}

impl Employee {
    /// Header names every input file must carry.
    pub const REQUIRED_COLUMNS: [&'static str; 13] = [
        "Age",
        "Attrition",
        "Department",
        "DistanceFromHome",
        "EducationField",
        "EmployeeNumber",
        "JobLevel",
        "JobRole",
        "JobSatisfaction",
        "MonthlyIncome",
        "OverTime",
        "WorkLifeBalance",
        "YearsAtCompany",
    ];

    pub fn has_left(&self) -> bool {
        self.attrition.is_yes()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The loaded dataset plus the indices the filter controls are built from.
///
/// `employees[i]` is the typed view of `records[i]`. Never mutated after
/// construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Source header row, in file order.
    pub headers: StringRecord,
    /// Typed rows.
    pub employees: Vec<Employee>,
    /// Untouched source rows, used for exports.
    pub records: Vec<StringRecord>,
    /// Departments in order of first appearance.
    pub departments: Vec<String>,
    /// Job roles in order of first appearance.
    pub job_roles: Vec<String>,
    /// Education fields in order of first appearance.
    pub education_fields: Vec<String>,
    /// Smallest and largest monthly income; `(0, 0)` when empty.
    pub income_bounds: (u32, u32),
}

impl Dataset {
    /// Build the category and income indices from parsed rows.
    pub fn new(
        headers: StringRecord,
        employees: Vec<Employee>,
        records: Vec<StringRecord>,
    ) -> Self {
        debug_assert_eq!(employees.len(), records.len());

        let departments = unique_in_order(employees.iter().map(|e| e.department.as_str()));
        let job_roles = unique_in_order(employees.iter().map(|e| e.job_role.as_str()));
        let education_fields =
            unique_in_order(employees.iter().map(|e| e.education_field.as_str()));

        let income_bounds = employees
            .iter()
            .map(|e| e.monthly_income)
            .fold(None, |acc: Option<(u32, u32)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0, 0));

        Dataset {
            headers,
            employees,
            records,
            departments,
            job_roles,
            education_fields,
            income_bounds,
        }
    }

    /// Build a dataset from in-memory records by serializing them through
    /// the same CSV path a file takes.
    pub fn from_employees(employees: &[Employee]) -> Result<Self> {
        let text = super::export::employees_to_csv(employees)?;
        super::loader::load_reader(text.as_bytes())
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
