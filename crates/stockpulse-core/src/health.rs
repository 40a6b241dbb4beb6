//! Rule-based fusion of trend, sentiment, and volume signals into a
//! health assessment.

use serde::{Deserialize, Serialize};

use crate::{
    NewsAggregator, NewsItem, PriceSeries, Quote, Sentiment, Trend, TrendDetector, VolumeDetector,
    VolumeIndicator,
};

/// Categorical recommendation for an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Watch,
    Avoid,
}

impl Recommendation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Watch => "Watch",
            Self::Avoid => "Avoid",
        }
    }
}

/// Health assessment produced fresh per scoring call.
///
/// `confidence` is a heuristic self-report, not a calibrated
/// probability. The scorer enforces `0.0 <= confidence <= 0.95` on
/// every output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub status: Recommendation,
    pub price_trend: Trend,
    pub news_sentiment: Sentiment,
    pub volume_indicator: VolumeIndicator,
    pub confidence: f64,
}

/// Signal snapshot fed to the rule cascade.
#[derive(Debug, Clone, Copy)]
struct Signals {
    trend: Trend,
    sentiment: Sentiment,
    positive_ratio: f64,
    negative_ratio: f64,
    change_percent: f64,
}

/// One entry of the ordered rule cascade.
struct Rule {
    name: &'static str,
    matches: fn(&Signals) -> bool,
    verdict: fn(&Signals) -> (Recommendation, f64),
}

/// The cascade, in evaluation order. The first matching rule wins;
/// reordering entries changes scoring behavior.
fn rule_cascade() -> [Rule; 6] {
    [
        Rule {
            name: "aligned_buy",
            matches: |s| {
                s.trend == Trend::Rising
                    && s.sentiment == Sentiment::Positive
                    && s.change_percent > 0.0
            },
            verdict: |s| (Recommendation::Buy, 0.75 + s.positive_ratio * 0.2),
        },
        Rule {
            name: "aligned_avoid",
            matches: |s| {
                s.trend == Trend::Falling
                    && s.sentiment == Sentiment::Negative
                    && s.change_percent < 0.0
            },
            verdict: |s| (Recommendation::Avoid, 0.75 + s.negative_ratio * 0.2),
        },
        Rule {
            name: "momentum_buy",
            matches: |s| s.trend == Trend::Rising && s.change_percent > 1.0,
            verdict: |_| (Recommendation::Buy, 0.6),
        },
        Rule {
            name: "momentum_avoid",
            matches: |s| s.trend == Trend::Falling && s.change_percent < -1.0,
            verdict: |_| (Recommendation::Avoid, 0.6),
        },
        Rule {
            name: "quiet_watch",
            matches: |s| s.change_percent.abs() < 0.5 && s.sentiment == Sentiment::Neutral,
            verdict: |_| (Recommendation::Watch, 0.4),
        },
        Rule {
            name: "mixed_signals",
            matches: |_| true,
            verdict: |_| (Recommendation::Watch, 0.5),
        },
    ]
}

/// Fuses the leaf detectors into a recommendation with a bounded
/// confidence score.
///
/// Pure and deterministic: identical inputs always produce identical
/// assessments, and no input combination faults. Missing history or an
/// empty news pool degrade to the default signal values (stable trend,
/// neutral sentiment, zero ratios).
#[derive(Debug, Clone, Default)]
pub struct HealthScorer {
    trend: TrendDetector,
    news: NewsAggregator,
    volume: VolumeDetector,
}

impl HealthScorer {
    pub fn new(trend: TrendDetector, news: NewsAggregator, volume: VolumeDetector) -> Self {
        Self {
            trend,
            news,
            volume,
        }
    }

    pub fn score(&self, quote: &Quote, series: &PriceSeries, news: &[NewsItem]) -> HealthAssessment {
        let price_trend = self.trend.detect(series);
        let digest = self.news.aggregate(news);
        let volume_indicator = self.volume.classify(quote.volume, series);

        let signals = Signals {
            trend: price_trend,
            sentiment: digest.overall,
            positive_ratio: digest.positive_ratio,
            negative_ratio: digest.negative_ratio,
            change_percent: quote.change_percent,
        };
        let (status, base_confidence) = evaluate(&signals);

        let adjustment = match volume_indicator {
            VolumeIndicator::High => 0.1,
            VolumeIndicator::Low => -0.1,
            VolumeIndicator::Medium => 0.0,
        };
        let confidence = (base_confidence + adjustment).clamp(0.0, 0.95);

        HealthAssessment {
            status,
            price_trend,
            news_sentiment: digest.overall,
            volume_indicator,
            confidence,
        }
    }
}

fn evaluate(signals: &Signals) -> (Recommendation, f64) {
    for rule in rule_cascade() {
        if (rule.matches)(signals) {
            return (rule.verdict)(signals);
        }
    }
    // The cascade ends in a catch-all.
    unreachable!("rule cascade must contain a catch-all entry")
}
