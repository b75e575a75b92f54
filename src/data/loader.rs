use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use super::model::{Dataset, Employee};
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the HR dataset from a CSV file.
///
/// The header must contain every column in [`Employee::REQUIRED_COLUMNS`];
/// extra columns are allowed and kept for export. Any missing column,
/// unparseable cell or duplicated `EmployeeNumber` fails the whole load.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!(
        "Loaded {} employees ({} columns) from {}",
        dataset.len(),
        dataset.headers.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV text from any reader. Used by [`load_file`], re-imports of
/// exported data and tests.
pub fn load_reader<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();
    check_schema(&headers)?;

    let mut employees = Vec::new();
    let mut records = Vec::new();
    let mut seen_ids = BTreeSet::new();

    for (idx, result) in reader.records().enumerate() {
        // 1-based data row numbers, header excluded.
        let row = idx + 1;
        let record = result?;

        let employee: Employee =
            record
                .deserialize(Some(&headers))
                .map_err(|e| DashboardError::InvalidRow {
                    row,
                    message: e.to_string(),
                })?;

        if !seen_ids.insert(employee.employee_number) {
            return Err(DashboardError::InvalidRow {
                row,
                message: format!("duplicate EmployeeNumber {}", employee.employee_number),
            });
        }

        employees.push(employee);
        records.push(record);
    }

    Ok(Dataset::new(headers, employees, records))
}

fn check_schema(headers: &StringRecord) -> Result<()> {
    for column in Employee::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DashboardError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Flag;

    const HEADER: &str = "Age,Attrition,BusinessTravel,Department,DistanceFromHome,EducationField,EmployeeNumber,JobLevel,JobRole,JobSatisfaction,MonthlyIncome,OverTime,WorkLifeBalance,YearsAtCompany";

    #[test]
    fn parses_rows_and_keeps_extra_columns() {
        let text = format!(
            "{HEADER}\n\
             41,Yes,Travel_Rarely,Sales,1,Life Sciences,1,2,Sales Executive,4,5993,Yes,1,6\n\
             49,No,Travel_Frequently,Research & Development,8,Life Sciences,2,2,Research Scientist,2,5130,No,3,10\n"
        );
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.headers.len(), 14);
        assert_eq!(&ds.records[0][2], "Travel_Rarely");

        let first = &ds.employees[0];
        assert_eq!(first.age, 41);
        assert_eq!(first.attrition, Flag::Yes);
        assert_eq!(first.over_time, Flag::Yes);
        assert_eq!(first.monthly_income, 5993);
        assert_eq!(ds.employees[1].department, "Research & Development");
    }

    #[test]
    fn missing_column_is_fatal() {
        let text = "Age,Attrition\n41,Yes\n";
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn { ref column } if column == "Department"));
    }

    #[test]
    fn malformed_value_reports_row() {
        let text = format!(
            "{HEADER}\n\
             41,Yes,Travel_Rarely,Sales,1,Life Sciences,1,2,Sales Executive,4,5993,Yes,1,6\n\
             abc,No,Travel_Rarely,Sales,1,Life Sciences,2,2,Sales Executive,4,5993,No,1,6\n"
        );
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRow { row: 2, .. }));
    }

    #[test]
    fn unknown_flag_spelling_is_rejected() {
        let text = format!(
            "{HEADER}\n41,Maybe,Travel_Rarely,Sales,1,Life Sciences,1,2,Sales Executive,4,5993,Yes,1,6\n"
        );
        assert!(load_reader(text.as_bytes()).is_err());
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let text = format!(
            "{HEADER}\n\
             41,Yes,Travel_Rarely,Sales,1,Life Sciences,7,2,Sales Executive,4,5993,Yes,1,6\n\
             30,No,Travel_Rarely,Sales,1,Life Sciences,7,2,Sales Executive,4,5993,Yes,1,6\n"
        );
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("duplicate EmployeeNumber 7"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::Io { .. }));
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let ds = load_reader(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(ds.is_empty());
    }
}
