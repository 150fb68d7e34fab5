mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::anyhow;
use app::RatesDashboardApp;
use config::{APP_TITLE, DashboardConfig, MIN_WINDOW_SIZE, WINDOW_SIZE};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(RatesDashboardApp::new(cc, DashboardConfig::default())))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
