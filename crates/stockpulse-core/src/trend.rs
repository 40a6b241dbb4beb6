//! Price trend detection via split-window average comparison.

use serde::{Deserialize, Serialize};

use crate::PriceSeries;

/// Qualitative direction of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl Trend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
        }
    }
}

/// Split-window trend detector.
///
/// Looks at the most recent `window` closes, splits them into an
/// earlier and a later half, and compares half averages. Fewer than 3
/// usable points is always `Stable`.
#[derive(Debug, Clone, Copy)]
pub struct TrendDetector {
    /// Number of most recent closes considered.
    pub window: usize,
    /// Percent move of the later half average needed to leave `Stable`.
    pub threshold_pct: f64,
}

impl Default for TrendDetector {
    fn default() -> Self {
        Self {
            window: 7,
            threshold_pct: 2.0,
        }
    }
}

impl TrendDetector {
    pub fn detect(&self, series: &PriceSeries) -> Trend {
        let recent = series.recent_prices(self.window);
        if recent.len() < 3 {
            return Trend::Stable;
        }

        let (first_half, second_half) = recent.split_at(recent.len() / 2);
        let first_avg = mean(first_half);
        let second_avg = mean(second_half);

        // No valid percent change off a zero baseline.
        if first_avg == 0.0 {
            return Trend::Stable;
        }

        let change_pct = (second_avg - first_avg) / first_avg * 100.0;
        if change_pct > self.threshold_pct {
            Trend::Rising
        } else if change_pct < -self.threshold_pct {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
