use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::config::{CHART_WIDTH_FRACTION, DashboardConfig};
use crate::data::loader::{FetchTask, HttpRateSource};
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RatesDashboardApp {
    pub state: AppState,
    fetch: Option<FetchTask>,
}

impl RatesDashboardApp {
    /// Build the app and kick off the one and only feed request.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let source = HttpRateSource::new(config.endpoint.clone());
        let fetch = FetchTask::spawn(Box::new(source), Some(cc.egui_ctx.clone()));
        Self {
            state: AppState::new(config),
            fetch: Some(fetch),
        }
    }

    fn poll_fetch(&mut self) {
        let Some(task) = &mut self.fetch else {
            return;
        };
        if let Some(result) = task.poll() {
            self.state.apply_fetch_result(result);
            self.fetch = None;
        }
    }
}

impl eframe::App for RatesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();
        self.state.update_layout(ctx.screen_rect().width());

        // ---- Top panel: title + currency switch ----
        egui::TopBottomPanel::top("header")
            .exact_height(56.0)
            .show(ctx, |ui| {
                panels::header(ui, &mut self.state);
            });

        // ---- Bottom panel: load status ----
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            panels::status_line(ui, &self.state);
        });

        // ---- Central panel: chart | average ----
        egui::CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(CHART_WIDTH_FRACTION))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| plot::rate_plot(ui, &self.state));
                    strip.cell(|ui| panels::average_panel(ui, &self.state));
                });
        });
    }
}
