use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Category, ExportKind, Status};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dashboard Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Employee ID search (overrides everything below) ----
            ui.strong("Search Employee ID");
            let mut search = state.criteria.employee_id.clone();
            if ui.text_edit_singleline(&mut search).changed() {
                state.set_employee_id(&search);
            }
            if state.criteria.searches_id() {
                ui.label(
                    RichText::new("ID search active: other filters ignored")
                        .small()
                        .italics(),
                );
            }
            ui.separator();

            // ---- Per-category multi-selects (collapsible) ----
            let dataset = Arc::clone(&state.dataset);
            for category in Category::ALL {
                let options = category.options(&dataset);
                let n_selected = options
                    .iter()
                    .filter(|v| state.is_selected(category, v))
                    .count();
                let header_text =
                    format!("{}  ({n_selected}/{})", category.label(), options.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(category.label())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all(category);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_none(category);
                            }
                        });

                        for value in options {
                            let mut checked = state.is_selected(category, value);
                            if ui.checkbox(&mut checked, value.as_str()).changed() {
                                state.toggle(category, value);
                            }
                        }
                    });
            }
            ui.separator();

            // ---- Monthly income range ----
            ui.strong("Monthly Income Range");
            let (lo, hi) = dataset.income_bounds;
            let mut min = state.criteria.income_min;
            let mut max = state.criteria.income_max;
            let min_changed = ui
                .add(egui::Slider::new(&mut min, lo..=hi).text("min"))
                .changed();
            let max_changed = ui
                .add(egui::Slider::new(&mut max, lo..=hi).text("max"))
                .changed();
            if min_changed || max_changed {
                // Keep min <= max: the handle being dragged pushes the other.
                if min > max {
                    if min_changed {
                        max = min;
                    } else {
                        min = max;
                    }
                }
                state.set_income_range(min, max);
            }
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Export", |ui: &mut Ui| {
            for (kind, label) in [
                (ExportKind::RawCsv, "Raw data (CSV)…"),
                (ExportKind::FilteredCsv, "Filtered data (CSV)…"),
                (ExportKind::ReportHtml, "Report (HTML)…"),
                (ExportKind::ReportJson, "Report data (JSON)…"),
            ] {
                if ui.button(label).clicked() {
                    save_file_dialog(state, kind);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        ui.label(format!(
            "{} employees loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        ui.separator();

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(msg).color(Color32::LIGHT_GREEN));
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask for a destination and write the export there.
pub fn save_file_dialog(state: &mut AppState, kind: ExportKind) {
    let ext = kind.extension();
    let mut dialog = rfd::FileDialog::new()
        .set_title("Save export")
        .set_file_name(kind.default_file_name())
        .add_filter(ext.to_ascii_uppercase(), &[ext]);
    if let Some(dir) = &state.export_dir {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.save_file() {
        state.export_to(kind, &path);
    }
}
