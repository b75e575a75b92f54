use std::path::Path;

use csv::StringRecord;

use super::model::{Dataset, Employee};
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// CSV serialization
// ---------------------------------------------------------------------------

/// Header included, comma separated, quoting only where needed, `\n`
/// line endings. Matches what `DataFrame.to_csv(index=False)` writes.
fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| DashboardError::Export {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| DashboardError::Export {
        message: e.to_string(),
    })
}

fn records_to_csv<'a>(
    headers: &StringRecord,
    records: impl IntoIterator<Item = &'a StringRecord>,
) -> Result<String> {
    let mut writer = csv_writer();
    if !headers.is_empty() {
        writer.write_record(headers)?;
    }
    for record in records {
        writer.write_record(record)?;
    }
    finish(writer)
}

/// Every row of the dataset, all source columns.
pub fn raw_csv(dataset: &Dataset) -> Result<String> {
    records_to_csv(&dataset.headers, &dataset.records)
}

/// The rows at `indices` (a filtered view), all source columns.
pub fn filtered_csv(dataset: &Dataset, indices: &[usize]) -> Result<String> {
    records_to_csv(
        &dataset.headers,
        indices.iter().filter_map(|&i| dataset.records.get(i)),
    )
}

/// Typed records serialized with the typed columns only.
pub fn employees_to_csv(employees: &[Employee]) -> Result<String> {
    let mut writer = csv_writer();
    if employees.is_empty() {
        // serde only emits the header alongside the first row.
        writer.write_record(Employee::REQUIRED_COLUMNS)?;
    }
    for employee in employees {
        writer.serialize(employee)?;
    }
    finish(writer)
}

/// Write an export to disk.
pub fn write_export(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| DashboardError::Export {
        message: format!("writing {}: {e}", path.display()),
    })?;
    log::info!("Exported {} bytes to {}", contents.len(), path.display());
    Ok(())
}
