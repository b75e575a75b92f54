//! The exportable report: computed summary plus fixed commentary.

pub mod content;
pub mod html;

use serde::Serialize;

use crate::analysis::SummaryMetrics;
use crate::error::{DashboardError, Result};

/// Everything the report document shows.
///
/// `summary` is computed from the current view; `insights` and
/// `conclusion` are authored text from [`content`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportContent {
    pub title: &'static str,
    pub summary: SummaryMetrics,
    pub insights: Vec<&'static str>,
    pub conclusion: &'static str,
    /// Always true: marks `insights` as fixed text for JSON consumers.
    pub insights_are_static: bool,
}

impl ReportContent {
    pub fn new(summary: SummaryMetrics) -> Self {
        ReportContent {
            title: content::REPORT_TITLE,
            summary,
            insights: content::REPORT_INSIGHTS.to_vec(),
            conclusion: content::REPORT_CONCLUSION,
            insights_are_static: true,
        }
    }

    /// The executive summary block as `(label, value)` pairs: rate to 2
    /// decimals, age to 1, satisfaction to 2.
    pub fn summary_lines(&self) -> [(&'static str, String); 4] {
        let s = &self.summary;
        [
            ("Total Employees Analyzed", s.total.to_string()),
            ("Attrition Rate", format!("{:.2}%", s.attrition_rate)),
            ("Average Age", format!("{:.1}", s.mean_age)),
            (
                "Average Job Satisfaction",
                format!("{:.2} / 4", s.mean_satisfaction),
            ),
        ]
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DashboardError::Export {
            message: e.to_string(),
        })
    }

    pub fn to_html(&self) -> String {
        html::render_report(self)
    }
}
