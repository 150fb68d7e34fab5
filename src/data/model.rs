use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Observation – one point of the feed
// ---------------------------------------------------------------------------

/// A single `(date, value, indicator)` record as served by the feed.
///
/// `date` is kept as the feed's text label: it is only ever used as a
/// category on the chart's x-axis, never parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    pub date: String,
    pub value: f64,
    pub indicator: String,
}

#[cfg(test)]
impl Observation {
    pub fn new(date: impl Into<String>, value: f64, indicator: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value,
            indicator: indicator.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Currency – the fixed set of selectable indicators
// ---------------------------------------------------------------------------

/// The indicators the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Dollar,
    Euro,
    Yuan,
}

impl Currency {
    /// Button order in the header.
    pub const ALL: [Currency; 3] = [Currency::Dollar, Currency::Euro, Currency::Yuan];

    /// Category string used by the feed's `indicator` field.
    pub fn indicator(self) -> &'static str {
        match self {
            Currency::Dollar => "Курс доллара",
            Currency::Euro => "Курс евро",
            Currency::Yuan => "Курс юаня",
        }
    }

    /// Header title shown while this currency is selected.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Dollar => "КУРС ДОЛЛАРА, $/₽",
            Currency::Euro => "КУРС ЕВРО, €/₽",
            Currency::Yuan => "КУРС ЮАНЯ, ¥/₽",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Dollar => "$",
            Currency::Euro => "€",
            Currency::Yuan => "¥",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.indicator())
    }
}

// ---------------------------------------------------------------------------
// DerivedStats – min / max / mean of a selection
// ---------------------------------------------------------------------------

/// Summary of the values in a non-empty selection. All fields are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl DerivedStats {
    /// `None` for an empty slice; there is no meaningful min/max/mean then.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Divide before summing so large rates cannot overflow to infinity.
        let n = values.len() as f64;
        let mean = values.iter().map(|v| v / n).sum();
        Some(DerivedStats { min, max, mean })
    }
}
