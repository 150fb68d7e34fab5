use eframe::egui::{self, Color32, RichText, Ui};

use crate::config::{AVERAGE_COLOR, MUTED_TEXT_COLOR, SELECTED_BUTTON_FILL};
use crate::data::model::{Currency, DerivedStats};
use crate::state::{AppState, LayoutMode, LoadStatus};

// ---------------------------------------------------------------------------
// Header – title + currency switch
// ---------------------------------------------------------------------------

/// Render the title and the three currency buttons.
pub fn header(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(state.currency.label()).size(20.0).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            // right_to_left lays out in reverse, so walk the buttons backwards.
            for currency in Currency::ALL.into_iter().rev() {
                if currency_button(ui, currency, state.currency == currency).clicked() {
                    state.select_currency(currency);
                }
            }
        });
    });
}

fn currency_button(ui: &mut Ui, currency: Currency, selected: bool) -> egui::Response {
    let (fill, text_color) = if selected {
        (SELECTED_BUTTON_FILL, Color32::WHITE)
    } else {
        (Color32::WHITE, Color32::BLACK)
    };
    let text = RichText::new(currency.symbol()).size(16.0).color(text_color);
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .min_size(egui::vec2(40.0, 28.0)),
    )
    .on_hover_text(currency.indicator())
}

// ---------------------------------------------------------------------------
// Average panel (right of the chart)
// ---------------------------------------------------------------------------

struct AverageFonts {
    caption: f32,
    value: f32,
    unit: f32,
}

fn average_fonts(layout: LayoutMode) -> AverageFonts {
    match layout {
        LayoutMode::Mobile => AverageFonts {
            caption: 10.0,
            value: 28.0,
            unit: 14.0,
        },
        LayoutMode::Desktop => AverageFonts {
            caption: 16.0,
            value: 48.0,
            unit: 20.0,
        },
    }
}

/// Mean with one decimal, or a dash when nothing is selected.
pub fn format_average(stats: Option<&DerivedStats>) -> String {
    match stats {
        Some(s) => format!("{:.1}", s.mean),
        None => "—".to_string(),
    }
}

/// Render "average over the period" for the current selection.
pub fn average_panel(ui: &mut Ui, state: &AppState) {
    let fonts = average_fonts(state.layout);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.label(
            RichText::new("Среднее за период")
                .size(fonts.caption)
                .color(MUTED_TEXT_COLOR),
        );
        ui.horizontal(|ui: &mut Ui| {
            ui.label(
                RichText::new(format_average(state.selection.stats.as_ref()))
                    .size(fonts.value)
                    .strong()
                    .color(AVERAGE_COLOR),
            );
            ui.label(RichText::new("₽").size(fonts.unit).color(MUTED_TEXT_COLOR));
        });
    });
}

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

/// Small footer showing load progress or a failure note.
pub fn status_line(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| match state.status {
        LoadStatus::Loading => {
            ui.spinner();
            ui.label(RichText::new("Loading rates…").small().color(MUTED_TEXT_COLOR));
        }
        LoadStatus::Ready if state.selection.is_empty() => {
            ui.label(
                RichText::new(format!("No observations for {}", state.currency))
                    .small()
                    .color(MUTED_TEXT_COLOR),
            );
        }
        LoadStatus::Ready => {
            ui.label(
                RichText::new(format!(
                    "{} observations, {} shown",
                    state.observations.len(),
                    state.selection.series.len()
                ))
                .small()
                .color(MUTED_TEXT_COLOR),
            );
        }
        LoadStatus::Failed => {
            if let Some(msg) = &state.status_message {
                ui.label(RichText::new(msg).small().color(MUTED_TEXT_COLOR));
            }
        }
    });
}
