use std::collections::BTreeMap;

use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints};

use crate::analysis::aggregate::{CrossTab, FiveNumberSummary, LevelShare};
use crate::analysis::DashboardAggregates;
use crate::data::model::Flag;
use crate::style::{attrition_color, generate_palette};

const CHART_HEIGHT: f32 = 240.0;
const GROUPS: [Flag; 2] = [Flag::Yes, Flag::No];

// ---------------------------------------------------------------------------
// The eight dashboard charts
// ---------------------------------------------------------------------------

/// Draw chart `index` (0-based, grid order) of the dashboard.
pub fn dashboard_chart(ui: &mut Ui, index: usize, agg: &DashboardAggregates) {
    match index {
        0 => categorical_bars(
            ui,
            "by_department",
            &agg.by_department,
            |d| d.clone(),
            "Department",
        ),
        1 => distribution(ui, "income_box", &agg.income_by_attrition, "Monthly Income"),
        2 => distribution(ui, "age_box", &agg.age_by_attrition, "Age"),
        3 => categorical_bars(ui, "by_overtime", &agg.by_overtime, |f| f.to_string(), "OverTime"),
        4 => level_shares(ui, "work_life", &agg.leaver_work_life),
        5 => categorical_bars(
            ui,
            "by_job_level",
            &agg.by_job_level,
            |l| format!("Level {l}"),
            "Job Level",
        ),
        6 => numeric_bars(ui, "by_distance", &agg.by_distance, "Distance From Home"),
        _ => tenure_area(ui, "by_tenure", &agg.by_tenure),
    }
}

fn base_plot(id: &str) -> Plot {
    Plot::new(id)
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
}

/// Grouped Yes/No bars over a categorical axis; categories sit at integer
/// positions and the axis prints their labels.
fn categorical_bars<K>(
    ui: &mut Ui,
    id: &str,
    tab: &CrossTab<K>,
    label: impl Fn(&K) -> String,
    x_label: &str,
) {
    let labels: Vec<String> = tab.keys().map(&label).collect();

    let charts: Vec<BarChart> = GROUPS
        .iter()
        .map(|&flag| {
            let offset = if flag.is_yes() { -0.2 } else { 0.2 };
            let bars = tab
                .values()
                .enumerate()
                .map(|(i, split)| {
                    Bar::new(i as f64 + offset, split.count(flag) as f64).width(0.4)
                })
                .collect();
            BarChart::new(bars)
                .name(flag.as_str())
                .color(attrition_color(flag))
        })
        .collect();

    base_plot(id)
        .x_axis_label(x_label)
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| {
            let pos = mark.value;
            if pos.fract() == 0.0 && pos >= 0.0 {
                labels.get(pos as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Stacked Yes/No bars over a numeric axis (a histogram of integer values).
fn numeric_bars(ui: &mut Ui, id: &str, tab: &CrossTab<u32>, x_label: &str) {
    let stayed: Vec<Bar> = tab
        .iter()
        .map(|(&k, split)| Bar::new(f64::from(k), split.stayed as f64).width(0.9))
        .collect();
    let left: Vec<Bar> = tab
        .iter()
        .map(|(&k, split)| Bar::new(f64::from(k), split.left as f64).width(0.9))
        .collect();

    let stayed_chart = BarChart::new(stayed)
        .name(Flag::No.as_str())
        .color(attrition_color(Flag::No));
    let left_chart = BarChart::new(left)
        .name(Flag::Yes.as_str())
        .color(attrition_color(Flag::Yes))
        .stack_on(&[&stayed_chart]);

    base_plot(id)
        .x_axis_label(x_label)
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(stayed_chart);
            plot_ui.bar_chart(left_chart);
        });
}

/// One box per attrition group.
fn distribution(
    ui: &mut Ui,
    id: &str,
    groups: &BTreeMap<Flag, FiveNumberSummary>,
    y_label: &str,
) {
    let plots: Vec<BoxPlot> = GROUPS
        .iter()
        .enumerate()
        .filter_map(|(pos, flag)| {
            let s = groups.get(flag)?;
            let color = attrition_color(*flag);
            let spread = BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max);
            let elem = BoxElem::new(pos as f64, spread)
                .name(format!("{flag} (n={})", s.count))
                .box_width(0.5)
                .fill(color.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, color));
            Some(BoxPlot::new(vec![elem]).name(flag.as_str()).color(color))
        })
        .collect();

    base_plot(id)
        .x_axis_label("Attrition")
        .y_axis_label(y_label)
        .x_axis_formatter(|mark, _range| match mark.value {
            v if v == 0.0 => Flag::Yes.to_string(),
            v if v == 1.0 => Flag::No.to_string(),
            _ => String::new(),
        })
        .show(ui, |plot_ui| {
            for plot in plots {
                plot_ui.box_plot(plot);
            }
        });
}

/// Share of leavers per work-life-balance level.
fn level_shares(ui: &mut Ui, id: &str, shares: &[LevelShare]) {
    let palette = generate_palette(shares.len());
    let charts: Vec<BarChart> = shares
        .iter()
        .zip(palette)
        .map(|(s, color)| {
            let bar = Bar::new(f64::from(s.level), s.share)
                .name(format!("{} leavers", s.count))
                .width(0.7);
            BarChart::new(vec![bar])
                .name(format!("Level {}", s.level))
                .color(color)
        })
        .collect();

    base_plot(id)
        .x_axis_label("Work-Life Balance (leavers)")
        .y_axis_label("% of leavers")
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Filled lines of head count per tenure year.
fn tenure_area(ui: &mut Ui, id: &str, tab: &CrossTab<u32>) {
    let lines: Vec<Line> = GROUPS
        .iter()
        .map(|&flag| {
            let points: PlotPoints = tab
                .iter()
                .map(|(&years, split)| [f64::from(years), split.count(flag) as f64])
                .collect();
            Line::new(points)
                .name(flag.as_str())
                .color(attrition_color(flag))
                .fill(0.0_f32)
                .width(1.5)
        })
        .collect();

    base_plot(id)
        .x_axis_label("Years At Company")
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            for line in lines {
                plot_ui.line(line);
            }
        });
}
