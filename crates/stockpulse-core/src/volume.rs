//! Volume anomaly classification against a historical baseline.

use serde::{Deserialize, Serialize};

use crate::PriceSeries;

/// 3-way volume activity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeIndicator {
    High,
    Medium,
    Low,
}

impl VolumeIndicator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Volume ratio classifier.
///
/// Two baselines are offered:
///
/// - [`classify`](Self::classify) uses the *snapshot baseline*: the
///   current volume repeated once per history point. The daily price
///   feed carries no per-day volumes, so this is the only baseline the
///   scoring path can form. The baseline always equals the current
///   volume, the ratio collapses to 1 for any non-empty history, and
///   the indicator is effectively pinned at `Medium`. Known quirk,
///   kept for behavioral parity.
/// - [`classify_with_volumes`](Self::classify_with_volumes) takes true
///   per-day volumes and applies the ratio thresholds as documented.
#[derive(Debug, Clone, Copy)]
pub struct VolumeDetector {
    /// Ratio above which volume reads `High`.
    pub high_ratio: f64,
    /// Ratio below which volume reads `Low`.
    pub low_ratio: f64,
}

impl Default for VolumeDetector {
    fn default() -> Self {
        Self {
            high_ratio: 1.3,
            low_ratio: 0.7,
        }
    }
}

impl VolumeDetector {
    /// Classify against the snapshot baseline formed over `series`.
    pub fn classify(&self, current_volume: u64, series: &PriceSeries) -> VolumeIndicator {
        let current = current_volume as f64;
        let baseline = if series.is_empty() {
            current
        } else {
            // Sum of the snapshot volume repeated per point, averaged
            // back over the point count: equals `current` exactly.
            current * series.len() as f64 / series.len() as f64
        };
        self.classify_ratio(current, baseline)
    }

    /// Classify against the mean of true per-day volumes.
    pub fn classify_with_volumes(
        &self,
        current_volume: u64,
        daily_volumes: &[u64],
    ) -> VolumeIndicator {
        let current = current_volume as f64;
        let baseline = if daily_volumes.is_empty() {
            current
        } else {
            daily_volumes.iter().map(|volume| *volume as f64).sum::<f64>()
                / daily_volumes.len() as f64
        };
        self.classify_ratio(current, baseline)
    }

    fn classify_ratio(&self, current: f64, baseline: f64) -> VolumeIndicator {
        if baseline <= 0.0 {
            return VolumeIndicator::Medium;
        }

        let ratio = current / baseline;
        if ratio > self.high_ratio {
            VolumeIndicator::High
        } else if ratio < self.low_ratio {
            VolumeIndicator::Low
        } else {
            VolumeIndicator::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PricePoint, TradingDate};

    fn history(days: usize) -> PriceSeries {
        let points = (0..days)
            .map(|index| {
                let date = TradingDate::parse(&format!("2024-01-{:02}", index + 1)).expect("date");
                PricePoint::new(date, 100.0).expect("point")
            })
            .collect();
        PriceSeries::new(points)
    }

    #[test]
    fn snapshot_baseline_pins_medium() {
        let detector = VolumeDetector::default();
        assert_eq!(
            detector.classify(45_678_900, &history(30)),
            VolumeIndicator::Medium
        );
        assert_eq!(detector.classify(1, &history(30)), VolumeIndicator::Medium);
    }

    #[test]
    fn empty_history_is_medium() {
        let detector = VolumeDetector::default();
        assert_eq!(
            detector.classify(45_678_900, &history(0)),
            VolumeIndicator::Medium
        );
    }

    #[test]
    fn zero_volume_is_medium() {
        let detector = VolumeDetector::default();
        assert_eq!(detector.classify(0, &history(10)), VolumeIndicator::Medium);
    }

    #[test]
    fn per_day_baseline_flags_spikes() {
        let detector = VolumeDetector::default();
        let daily = vec![10_000_000; 20];
        assert_eq!(
            detector.classify_with_volumes(14_000_000, &daily),
            VolumeIndicator::High
        );
        assert_eq!(
            detector.classify_with_volumes(6_000_000, &daily),
            VolumeIndicator::Low
        );
        assert_eq!(
            detector.classify_with_volumes(10_000_000, &daily),
            VolumeIndicator::Medium
        );
    }

    #[test]
    fn per_day_baseline_without_history_is_medium() {
        let detector = VolumeDetector::default();
        assert_eq!(
            detector.classify_with_volumes(5_000_000, &[]),
            VolumeIndicator::Medium
        );
    }
}
