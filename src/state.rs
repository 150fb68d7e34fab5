use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::data::model::{Currency, Observation};
use crate::data::select::{SeriesSelection, select};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Layout mode
// ---------------------------------------------------------------------------

/// Compact vs. wide rendering, chosen from the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    Mobile,
    #[default]
    Desktop,
}

impl LayoutMode {
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

/// Where the single fetch currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Everything the feed returned. Replaced as a whole, never edited.
    pub observations: Arc<[Observation]>,

    /// Currently chosen indicator.
    pub currency: Currency,

    /// Series + stats for `currency` over `observations` (cached). Shared
    /// with the plot formatters without copying the series each frame.
    pub selection: Arc<SeriesSelection>,

    pub layout: LayoutMode,

    pub status: LoadStatus,

    /// Short status / error text for the footer.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let currency = Currency::default();
        Self {
            config,
            observations: Arc::from(Vec::new()),
            currency,
            selection: Arc::new(SeriesSelection {
                indicator: currency.indicator().to_string(),
                ..SeriesSelection::default()
            }),
            layout: LayoutMode::default(),
            status: LoadStatus::Loading,
            status_message: None,
        }
    }

    /// Ingest the outcome of the fetch.
    ///
    /// On failure the observation set stays empty and the error only goes to
    /// the log and the status line.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<Observation>>) {
        match result {
            Ok(observations) => {
                log::info!("Loaded {} observations", observations.len());
                self.set_observations(observations);
            }
            Err(e) => {
                log::error!("Error fetching rates: {e}");
                self.observations = Arc::from(Vec::new());
                self.refresh_selection();
                self.status = LoadStatus::Failed;
                self.status_message = Some(if e.is_fetch_error() {
                    "Data unavailable".to_string()
                } else {
                    "Data could not be read".to_string()
                });
            }
        }
    }

    pub fn set_observations(&mut self, observations: Vec<Observation>) {
        self.observations = Arc::from(observations);
        self.status = LoadStatus::Ready;
        self.status_message = None;
        self.refresh_selection();
    }

    pub fn select_currency(&mut self, currency: Currency) {
        if self.currency == currency {
            return;
        }
        log::debug!("Selected {currency}");
        self.currency = currency;
        self.refresh_selection();
    }

    /// Recompute `selection` from the current data and currency.
    pub fn refresh_selection(&mut self) {
        self.selection = Arc::new(select(&self.observations, self.currency.indicator()));
        // Before the data arrives an empty series is expected, not noteworthy.
        if self.status != LoadStatus::Ready {
            return;
        }
        if let Err(e) = self.selection.require_stats() {
            log::warn!("{e}");
        }
    }

    /// Track the window width; returns `true` when the mode flipped.
    pub fn update_layout(&mut self, width: f32) -> bool {
        let layout = LayoutMode::from_width(width, self.config.mobile_breakpoint);
        if layout == self.layout {
            return false;
        }
        log::debug!("Layout {:?} -> {:?} at width {width}", self.layout, layout);
        self.layout = layout;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    fn feed() -> Vec<Observation> {
        vec![
            Observation::new("2024-01-01", 90.0, "Курс доллара"),
            Observation::new("2024-01-02", 92.0, "Курс доллара"),
            Observation::new("2024-01-01", 99.0, "Курс евро"),
            Observation::new("2024-01-02", 97.0, "Курс евро"),
        ]
    }

    #[test]
    fn starts_loading_with_default_currency() {
        let state = AppState::default();
        assert_eq!(state.status, LoadStatus::Loading);
        assert_eq!(state.currency, Currency::Dollar);
        assert!(state.observations.is_empty());
        assert_eq!(state.selection.indicator, "Курс доллара");
        assert!(state.selection.stats.is_none());
    }

    #[test]
    fn successful_fetch_selects_default_currency() {
        let mut state = AppState::default();
        state.apply_fetch_result(Ok(feed()));
        assert_eq!(state.status, LoadStatus::Ready);
        let stats = state.selection.stats.unwrap();
        assert_eq!((stats.min, stats.max, stats.mean), (90.0, 92.0, 91.0));
    }

    #[test]
    fn switching_currency_recomputes_stats() {
        let mut state = AppState::default();
        state.apply_fetch_result(Ok(feed()));
        state.select_currency(Currency::Euro);
        let stats = state.selection.stats.unwrap();
        assert_eq!((stats.min, stats.max, stats.mean), (97.0, 99.0, 98.0));

        state.select_currency(Currency::Yuan);
        assert!(state.selection.is_empty());
        assert!(state.selection.stats.is_none());

        state.select_currency(Currency::Dollar);
        assert_eq!(state.selection.stats.unwrap().max, 92.0);
    }

    #[test]
    fn unchanged_selection_is_shared_not_rebuilt() {
        let mut state = AppState::default();
        state.apply_fetch_result(Ok(feed()));
        let before = Arc::clone(&state.selection);
        state.select_currency(Currency::Dollar);
        assert!(Arc::ptr_eq(&before, &state.selection));

        state.select_currency(Currency::Euro);
        assert!(!Arc::ptr_eq(&before, &state.selection));
    }

    #[test]
    fn failed_fetch_leaves_data_empty() {
        let mut state = AppState::default();
        state.apply_fetch_result(Err(DashboardError::WorkerLost));
        assert_eq!(state.status, LoadStatus::Failed);
        assert!(state.observations.is_empty());
        assert!(state.selection.is_empty());
        assert_eq!(state.status_message.as_deref(), Some("Data unavailable"));
    }

    #[test]
    fn parse_failure_has_its_own_message() {
        let mut state = AppState::default();
        let err = serde_json::from_str::<Vec<Observation>>("{").unwrap_err();
        state.apply_fetch_result(Err(DashboardError::Parse(err)));
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.status_message.as_deref(), Some("Data could not be read"));
    }

    #[test]
    fn layout_flips_at_breakpoint() {
        let mut state = AppState::default();
        assert_eq!(state.layout, LayoutMode::Desktop);
        assert!(!state.update_layout(1200.0));
        assert!(state.update_layout(894.0));
        assert_eq!(state.layout, LayoutMode::Mobile);
        assert!(!state.update_layout(500.0));
        assert!(state.update_layout(895.0));
        assert_eq!(state.layout, LayoutMode::Desktop);
    }
}
