use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Compile-time settings
// ---------------------------------------------------------------------------

/// Remote feed returning `[{ "date", "value", "indicator" }, ...]`.
pub const RATES_ENDPOINT: &str = "https://65d9b500bcc50200fcdbf92c.mockapi.io/graph/v1/point";

/// Windows narrower than this (in points) use the compact layout.
pub const MOBILE_BREAKPOINT: f32 = 895.0;

pub const APP_TITLE: &str = "Rates Dashboard";
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 700.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [420.0, 320.0];

/// Share of the body width given to the chart; the rest holds the average.
pub const CHART_WIDTH_FRACTION: f32 = 0.85;

pub const SERIES_COLOR: Color32 = Color32::from_rgb(0xF3, 0x8B, 0x00);
pub const AVERAGE_COLOR: Color32 = Color32::from_rgb(0xFF, 0xA5, 0x00);
pub const MUTED_TEXT_COLOR: Color32 = Color32::from_rgb(0x66, 0x79, 0x85);
pub const SELECTED_BUTTON_FILL: Color32 = Color32::from_rgb(0x19, 0x76, 0xD2);

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

/// Settings handed to the app at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub endpoint: String,
    pub mobile_breakpoint: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: RATES_ENDPOINT.to_string(),
            mobile_breakpoint: MOBILE_BREAKPOINT,
        }
    }
}
