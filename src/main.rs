use std::sync::Arc;

use anyhow::Context;
use attrition_dash::app::AttritionApp;
use attrition_dash::config::Config;
use attrition_dash::data::loader;
use attrition_dash::state::AppState;
use clap::Parser;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    // A dataset that fails to load ends the process; there is nothing to show.
    let dataset = loader::load_file(&config.data)
        .with_context(|| format!("loading {}", config.data.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;
    let state = AppState::new(Arc::new(dataset), config.export_dir);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "HR Employees Attrition",
        options,
        Box::new(|_cc| Ok(Box::new(AttritionApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
