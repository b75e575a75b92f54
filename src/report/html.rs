//! Self-contained HTML rendering of a [`ReportContent`].
//!
//! Printable from any browser; no external assets.

use super::ReportContent;

/// Render the full report document.
pub fn render_report(report: &ReportContent) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    {summary}
    {insights}
    {conclusion}
</body>
</html>
"#,
        title = escape(report.title),
        css = inline_css(),
        summary = render_summary(report),
        insights = render_insights(&report.insights),
        conclusion = render_conclusion(report.conclusion),
    )
}

fn render_summary(report: &ReportContent) -> String {
    let rows: String = report
        .summary_lines()
        .iter()
        .map(|(label, value)| format!("<li><b>{}:</b> {}</li>", escape(label), escape(value)))
        .collect();
    format!("<h2>Executive Summary</h2>\n    <ul class=\"summary\">{rows}</ul>")
}

fn render_insights(insights: &[&str]) -> String {
    let items: String = insights
        .iter()
        .map(|i| format!("<li>{}</li>", escape(i)))
        .collect();
    format!(
        "<h2>Key Insights</h2>\n    <p class=\"note\">Authored commentary; not computed from the selected data.</p>\n    <ul>{items}</ul>"
    )
}

fn render_conclusion(text: &str) -> String {
    format!("<h2>Conclusion</h2>\n    <p>{}</p>", escape(text))
}

fn inline_css() -> &'static str {
    r#"
body { font-family: system-ui, sans-serif; margin: 30px; color: #111827; }
h1 { color: #4F46E5; }
ul.summary { list-style: none; padding-left: 0; }
.note { color: #6b7280; font-size: 0.85rem; }
"#
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SummaryMetrics;

    #[test]
    fn report_contains_every_section() {
        let report = ReportContent::new(SummaryMetrics {
            total: 1,
            attrition_rate: 100.0,
            mean_satisfaction: 3.0,
            mean_age: 30.0,
        });
        let html = render_report(&report);
        assert!(html.contains("<h1>HR Employees Attrition Analysis Report</h1>"));
        assert!(html.contains("<b>Attrition Rate:</b> 100.00%"));
        assert!(html.contains("<b>Average Age:</b> 30.0"));
        assert!(html.contains("<b>Average Job Satisfaction:</b> 3.00 / 4"));
        assert!(html.contains("Junior-level roles require focused retention strategies."));
        assert!(html.contains("<h2>Conclusion</h2>"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("R&D <b>"), "R&amp;D &lt;b&gt;");
    }
}
