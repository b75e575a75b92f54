use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::StringRecord;

use crate::analysis::{summarize, DashboardAggregates, SummaryMetrics};
use crate::data::export;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::{Dataset, Employee};
use crate::error::Result;
use crate::report::ReportContent;

// ---------------------------------------------------------------------------
// Categorical filter columns
// ---------------------------------------------------------------------------

/// The three multi-select filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Department,
    JobRole,
    EducationField,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Department,
        Category::JobRole,
        Category::EducationField,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Department => "Department",
            Category::JobRole => "Job Role",
            Category::EducationField => "Education Background",
        }
    }

    /// Every value of this column, in order of first appearance.
    pub fn options(self, dataset: &Dataset) -> &[String] {
        match self {
            Category::Department => &dataset.departments,
            Category::JobRole => &dataset.job_roles,
            Category::EducationField => &dataset.education_fields,
        }
    }

    fn selection(self, criteria: &mut FilterCriteria) -> &mut BTreeSet<String> {
        match self {
            Category::Department => &mut criteria.departments,
            Category::JobRole => &mut criteria.job_roles,
            Category::EducationField => &mut criteria.education_fields,
        }
    }
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    RawCsv,
    FilteredCsv,
    ReportHtml,
    ReportJson,
}

impl ExportKind {
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportKind::RawCsv => "raw_hr_data.csv",
            ExportKind::FilteredCsv => "cleaned_hr_data.csv",
            ExportKind::ReportHtml => "HR_Attrition_Report.html",
            ExportKind::ReportJson => "HR_Attrition_Report.json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::RawCsv | ExportKind::FilteredCsv => "csv",
            ExportKind::ReportHtml => "html",
            ExportKind::ReportJson => "json",
        }
    }
}

/// Outcome of the last user action, shown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never modified.
    pub dataset: Arc<Dataset>,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Indices of employees passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Metrics over `visible_indices` (cached).
    pub summary: SummaryMetrics,

    /// Chart aggregates over `visible_indices` (cached).
    pub aggregates: DashboardAggregates,

    /// Directory the export dialogs start in.
    pub export_dir: Option<PathBuf>,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,
}

impl AppState {
    /// Start with every filter open.
    pub fn new(dataset: Arc<Dataset>, export_dir: Option<PathBuf>) -> Self {
        let criteria = FilterCriteria::all(&dataset);
        let mut state = Self {
            dataset,
            criteria,
            visible_indices: Vec::new(),
            summary: SummaryMetrics::default(),
            aggregates: DashboardAggregates::default(),
            export_dir,
            status: None,
        };
        state.refilter();
        state
    }

    /// Rerun the filter → metrics → aggregates pipeline.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset.employees, &self.criteria);
        let view: Vec<&Employee> = self.visible_employees().collect();
        let summary = summarize(view.iter().copied());
        let aggregates = DashboardAggregates::compute(&view);
        self.summary = summary;
        self.aggregates = aggregates;
        log::debug!(
            "Filter matched {} of {} employees",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }

    /// Employees in the current view, in dataset order.
    pub fn visible_employees(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.visible_indices
            .iter()
            .map(|&i| &self.dataset.employees[i])
    }

    /// Source rows of the current view, every column as read.
    pub fn visible_records(&self) -> impl Iterator<Item = &StringRecord> + '_ {
        self.visible_indices
            .iter()
            .map(|&i| &self.dataset.records[i])
    }

    pub fn is_selected(&self, category: Category, value: &str) -> bool {
        let set = match category {
            Category::Department => &self.criteria.departments,
            Category::JobRole => &self.criteria.job_roles,
            Category::EducationField => &self.criteria.education_fields,
        };
        set.contains(value)
    }

    /// Toggle a single value in a category filter.
    pub fn toggle(&mut self, category: Category, value: &str) {
        let selected = category.selection(&mut self.criteria);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select all values in a category.
    pub fn select_all(&mut self, category: Category) {
        let all = category.options(&self.dataset).iter().cloned().collect();
        *category.selection(&mut self.criteria) = all;
        self.refilter();
    }

    /// Deselect all values in a category.
    pub fn select_none(&mut self, category: Category) {
        category.selection(&mut self.criteria).clear();
        self.refilter();
    }

    /// Set the income range, clamped to the data extrema.
    pub fn set_income_range(&mut self, min: u32, max: u32) {
        let (lo, hi) = self.dataset.income_bounds;
        self.criteria.income_min = min.clamp(lo, hi);
        self.criteria.income_max = max.clamp(lo, hi);
        self.refilter();
    }

    pub fn set_employee_id(&mut self, id: &str) {
        self.criteria.employee_id = id.to_string();
        self.refilter();
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::all(&self.dataset);
        self.refilter();
    }

    /// Report payload for the current view.
    pub fn report(&self) -> ReportContent {
        ReportContent::new(self.summary)
    }

    fn render_export(&self, kind: ExportKind) -> Result<String> {
        match kind {
            ExportKind::RawCsv => export::raw_csv(&self.dataset),
            ExportKind::FilteredCsv => export::filtered_csv(&self.dataset, &self.visible_indices),
            ExportKind::ReportHtml => Ok(self.report().to_html()),
            ExportKind::ReportJson => self.report().to_json(),
        }
    }

    /// Write an export and record the outcome in `status`. A failure leaves
    /// dataset and filters untouched.
    pub fn export_to(&mut self, kind: ExportKind, path: &Path) {
        let result = self
            .render_export(kind)
            .and_then(|contents| export::write_export(path, &contents));
        self.status = Some(match result {
            Ok(()) => Status::Info(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("Export to {} failed: {e}", path.display());
                Status::Error(format!("Error: {e}"))
            }
        });
    }
}
