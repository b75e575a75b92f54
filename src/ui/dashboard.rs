use std::sync::Arc;

use csv::StringRecord;
use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_extras::{Column, TableBuilder};

use crate::report::content::{
    ActionCard, CHART_NOTES, DASHBOARD_CONCLUSION, DATA_SOURCE_CAPTION, KEY_FINDINGS,
    RETENTION_OPPORTUNITIES, RISK_FACTORS,
};
use crate::state::{AppState, ExportKind};
use crate::style::{risk_style, tone_color, METRIC_ACCENTS};
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the scrollable dashboard body.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("HR Employees Attrition Analysis");
            ui.add_space(8.0);
            metric_cards(ui, state);
            ui.separator();

            chart_grid(ui, state);
            ui.separator();

            action_plan(ui);
            ui.separator();

            data_explorer(ui, state);
            ui.separator();

            report_section(ui, state);
        });
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

fn metric_cards(ui: &mut Ui, state: &AppState) {
    let s = &state.summary;
    let cards = [
        ("Total Staff", s.total.to_string()),
        ("Attrition Rate", format!("{:.1}%", s.attrition_rate)),
        ("Avg Satisfaction", format!("{:.2}/4", s.mean_satisfaction)),
        ("Avg Age", format!("{:.0}", s.mean_age)),
    ];

    ui.columns(cards.len(), |cols| {
        for ((col, (label, value)), accent) in cols.iter_mut().zip(cards).zip(METRIC_ACCENTS) {
            egui::Frame::group(col.style())
                .stroke(Stroke::new(2.0, accent))
                .show(col, |ui: &mut Ui| {
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.label(RichText::new(label).small());
                        ui.label(RichText::new(value).size(28.0).strong().color(accent));
                    });
                });
        }
    });
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn chart_grid(ui: &mut Ui, state: &AppState) {
    for (row_idx, notes) in CHART_NOTES.chunks(2).enumerate() {
        ui.columns(2, |cols| {
            for (col_idx, (col, note)) in cols.iter_mut().zip(notes).enumerate() {
                let index = row_idx * 2 + col_idx;
                col.strong(note.title);
                charts::dashboard_chart(col, index, &state.aggregates);
                let caption = RichText::new(format!("Insight: {}", note.insight))
                    .color(tone_color(note.tone));
                col.label(caption);
            }
        });
        ui.add_space(12.0);
    }
}

// ---------------------------------------------------------------------------
// Strategic insights (fixed commentary)
// ---------------------------------------------------------------------------

fn action_plan(ui: &mut Ui) {
    ui.heading("Strategic Insights & Action Plan");
    ui.label("Executive summary of the eight charts above:");

    ui.columns(2, |cols| {
        action_card(&mut cols[0], &RISK_FACTORS, Color32::from_rgb(0xFF, 0x4B, 0x4B));
        action_card(
            &mut cols[1],
            &RETENTION_OPPORTUNITIES,
            Color32::from_rgb(0x00, 0xCC, 0x96),
        );
    });

    ui.add_space(8.0);
    ui.strong("Key Findings Recap");
    ui.push_id("key_findings", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(120.0), 4)
            .header(20.0, |mut header| {
                for name in ["Category", "Primary Driver", "Risk Level", "Recommended Action"] {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for finding in &KEY_FINDINGS {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(finding.category);
                        });
                        row.col(|ui| {
                            ui.label(finding.primary_driver);
                        });
                        row.col(|ui| {
                            let color = risk_style(finding.risk_level).color();
                            ui.label(RichText::new(finding.risk_level).strong().color(color));
                        });
                        row.col(|ui| {
                            ui.label(finding.recommended_action);
                        });
                    });
                }
            });
    });

    ui.add_space(8.0);
    ui.label(
        RichText::new(format!("Conclusion: {DASHBOARD_CONCLUSION}")).color(Color32::LIGHT_GREEN),
    );
}

fn action_card(ui: &mut Ui, card: &ActionCard, accent: Color32) {
    egui::Frame::group(ui.style())
        .stroke(Stroke::new(2.0, accent))
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(card.title).strong().size(16.0));
            for (label, text) in card.points {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.label(RichText::new(format!("{label}:")).strong());
                    ui.label(*text);
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Data explorer
// ---------------------------------------------------------------------------

fn data_explorer(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Explorer");

    let dataset = Arc::clone(&state.dataset);

    egui::CollapsingHeader::new("View RAW dataset (original data)")
        .id_salt("raw_view")
        .show(ui, |ui: &mut Ui| {
            ui.label(format!("Total records: {}", dataset.len()));
            if ui.button("Download RAW data").clicked() {
                panels::save_file_dialog(state, ExportKind::RawCsv);
            }
            let rows: Vec<&StringRecord> = dataset.records.iter().collect();
            record_table(ui, "raw_table", &dataset.headers, &rows);
        });

    egui::CollapsingHeader::new("View FILTERED dataset")
        .id_salt("filtered_view")
        .show(ui, |ui: &mut Ui| {
            ui.label(format!("Filtered records: {}", state.visible_indices.len()));
            if ui.button("Download FILTERED data").clicked() {
                panels::save_file_dialog(state, ExportKind::FilteredCsv);
            }
            let rows: Vec<&StringRecord> = state.visible_records().collect();
            record_table(ui, "filtered_table", &dataset.headers, &rows);
        });
}

/// Every source column, the same cells the CSV exports write.
fn record_table(ui: &mut Ui, id: &str, headers: &StringRecord, rows: &[&StringRecord]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(true)
            .max_scroll_height(300.0)
            .columns(Column::auto().at_least(60.0), headers.len())
            .header(20.0, |mut header| {
                for name in headers {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let record = rows[row.index()];
                    for cell in record {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Report download
// ---------------------------------------------------------------------------

fn report_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Download HR Attrition Report");
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Download Dashboard Report (HTML)").clicked() {
            panels::save_file_dialog(state, ExportKind::ReportHtml);
        }
        if ui.button("Report data (JSON)").clicked() {
            panels::save_file_dialog(state, ExportKind::ReportJson);
        }
    });
    ui.label(RichText::new(DATA_SOURCE_CAPTION).small().weak());
}
