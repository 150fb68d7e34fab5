use std::sync::Arc;

use eframe::egui::{RichText, Ui};
use egui_plot::{GridMark, Line, Plot, PlotBounds, PlotPoint, PlotPoints};

use crate::config::{MUTED_TEXT_COLOR, SERIES_COLOR};
use crate::data::model::DerivedStats;
use crate::state::{AppState, LoadStatus};

// ---------------------------------------------------------------------------
// Rate chart (left part of the body)
// ---------------------------------------------------------------------------

/// Exact plot window: x spans the series positions, y spans `[min, max]`.
///
/// A flat series (or a single point) would give a zero-height or zero-width
/// window, so those axes are widened by half a unit around the value.
pub fn chart_bounds(len: usize, stats: &DerivedStats) -> PlotBounds {
    let x_max = len.saturating_sub(1) as f64;
    let (x_min, x_max) = if x_max > 0.0 { (0.0, x_max) } else { (-0.5, 0.5) };
    let (y_min, y_max) = if stats.max > stats.min {
        (stats.min, stats.max)
    } else {
        (stats.min - 0.5, stats.max + 0.5)
    };
    PlotBounds::from_min_max([x_min, y_min], [x_max, y_max])
}

/// Render the selected series as a line over a date-category x-axis.
pub fn rate_plot(ui: &mut Ui, state: &AppState) {
    let Some(stats) = state.selection.stats else {
        let text = match state.status {
            LoadStatus::Loading => "",
            LoadStatus::Ready | LoadStatus::Failed => "No data",
        };
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(text).color(MUTED_TEXT_COLOR));
        });
        return;
    };

    // Formatters must own what they read.
    let axis_selection = Arc::clone(&state.selection);
    let hover_selection = Arc::clone(&state.selection);
    let bounds = chart_bounds(state.selection.series.len(), &stats);

    let points: PlotPoints = state.selection.points().into_iter().collect();
    let line = Line::new(points)
        .name(&state.selection.indicator)
        .color(SERIES_COLOR)
        .width(2.0);

    Plot::new("rate_plot")
        .x_axis_formatter(move |mark: GridMark, _range| {
            axis_selection
                .date_at(mark.value)
                .map(str::to_string)
                .unwrap_or_default()
        })
        .label_formatter(move |_name, point: &PlotPoint| {
            match hover_selection.date_at(point.x.round()) {
                Some(date) => format!("{date}\n{:.2}", point.y),
                None => String::new(),
            }
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(bounds);
            plot_ui.line(line);
        });
}
