use crate::error::{DashboardError, Result};

use super::model::{DerivedStats, Observation};

// ---------------------------------------------------------------------------
// Selection: observations of one indicator plus their summary
// ---------------------------------------------------------------------------

/// The series currently on screen.
///
/// `series` keeps the feed order because it is drawn as-is along a category
/// x-axis. `stats` is `None` exactly when `series` is empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesSelection {
    pub indicator: String,
    pub series: Vec<Observation>,
    pub stats: Option<DerivedStats>,
}

impl SeriesSelection {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Stats, or [`DashboardError::EmptySelection`] when nothing matched.
    pub fn require_stats(&self) -> Result<DerivedStats> {
        self.stats.ok_or_else(|| DashboardError::EmptySelection {
            indicator: self.indicator.clone(),
        })
    }

    /// `(x, y)` pairs for plotting: x is the position in the series.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.series
            .iter()
            .enumerate()
            .map(|(i, obs)| [i as f64, obs.value])
            .collect()
    }

    /// Date label for an x position, if it lands on an observation.
    pub fn date_at(&self, x: f64) -> Option<&str> {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.series.get(rounded as usize).map(|obs| obs.date.as_str())
    }
}

/// Keep the observations whose indicator equals `indicator` and summarise them.
///
/// Pure: the result depends only on the arguments.
pub fn select(observations: &[Observation], indicator: &str) -> SeriesSelection {
    let series: Vec<Observation> = observations
        .iter()
        .filter(|obs| obs.indicator == indicator)
        .cloned()
        .collect();

    let values: Vec<f64> = series.iter().map(|obs| obs.value).collect();

    SeriesSelection {
        indicator: indicator.to_string(),
        stats: DerivedStats::from_values(&values),
        series,
    }
}
