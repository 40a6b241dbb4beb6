//! Short-horizon price projection from trend and volatility.
//!
//! The projector is an explainable heuristic with deliberate random
//! jitter, not a trained model. Randomness is injected through
//! [`JitterSource`] so tests can seed it and assert exact outputs.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PriceSeries, Quote, ValidationError};

/// Minimum history points required before a projection is attempted.
pub const MIN_HISTORY_POINTS: usize = 5;

/// Number of most recent closes the volatility estimate uses.
const VOLATILITY_WINDOW: usize = 10;

/// Prediction lookahead window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
}

impl Horizon {
    pub const ALL: [Self; 3] = [Self::OneDay, Self::OneWeek, Self::OneMonth];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
        }
    }

    /// Human-readable timeframe label carried on the prediction.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneDay => "1 Day",
            Self::OneWeek => "1 Week",
            Self::OneMonth => "1 Month",
        }
    }
}

impl Display for Horizon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Horizon {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(Self::OneDay),
            "1w" => Ok(Self::OneWeek),
            "1m" => Ok(Self::OneMonth),
            // Echo the caller's raw spelling, not the normalized form.
            _ => Err(ValidationError::InvalidHorizon {
                value: value.to_owned(),
            }),
        }
    }
}

/// Qualitative direction of the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }
}

/// Qualitative risk tier attached to a horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Short-horizon price projection.
///
/// `factors` are descriptive strings for display only; nothing
/// downstream computes from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    pub predicted_price: f64,
    pub confidence: f64,
    pub trend: Direction,
    pub timeframe: String,
    pub factors: Vec<String>,
    pub risk_level: RiskLevel,
}

/// Source of uniform random draws for projection jitter.
///
/// Implementations return draws in `[0, 1)`. Production uses
/// [`FastrandJitter`]; tests seed it for reproducible output.
pub trait JitterSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Jitter source backed by `fastrand`.
#[derive(Debug, Clone)]
pub struct FastrandJitter(fastrand::Rng);

impl FastrandJitter {
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastrandJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for FastrandJitter {
    fn next_unit(&mut self) -> f64 {
        self.0.f64()
    }
}

/// Volatility/trend price projector.
///
/// Estimates volatility as the population standard deviation of the
/// last ten closes, reads direction off the move since the start of
/// the series, and projects per horizon with a volatility-scaled
/// offset plus random jitter.
#[derive(Debug, Clone)]
pub struct PricePredictor<J = FastrandJitter> {
    jitter: J,
}

impl Default for PricePredictor<FastrandJitter> {
    fn default() -> Self {
        Self::new(FastrandJitter::new())
    }
}

impl<J: JitterSource> PricePredictor<J> {
    pub fn new(jitter: J) -> Self {
        Self { jitter }
    }

    /// Project a price over `horizon`.
    ///
    /// Returns `None` when the series holds fewer than
    /// [`MIN_HISTORY_POINTS`]: the distinguished insufficient-data
    /// outcome, which renderers must not treat as a fault.
    pub fn predict(
        &mut self,
        quote: &Quote,
        series: &PriceSeries,
        horizon: Horizon,
    ) -> Option<PricePrediction> {
        if series.len() < MIN_HISTORY_POINTS {
            return None;
        }

        let recent = series.recent_prices(VOLATILITY_WINDOW);
        let avg = recent.iter().sum::<f64>() / recent.len() as f64;
        let variance = recent
            .iter()
            .map(|price| (price - avg).powi(2))
            .sum::<f64>()
            / recent.len() as f64;
        let volatility = variance.sqrt();

        let start_price = series.first().map(|point| point.price).unwrap_or(0.0);
        let delta = quote.current_price - start_price;
        let trend = if delta > 0.0 {
            Direction::Bullish
        } else if delta < 0.0 {
            Direction::Bearish
        } else {
            Direction::Neutral
        };
        let sign = if trend == Direction::Bullish { 1.0 } else { -1.0 };

        let (base_offset, confidence, risk_level, factors): (f64, f64, RiskLevel, &[&str]) =
            match horizon {
                Horizon::OneDay => (
                    self.centered_draw() * volatility * 0.1,
                    0.85,
                    RiskLevel::Low,
                    &[
                        "Recent price momentum",
                        "Market sentiment",
                        "Technical indicators",
                    ],
                ),
                Horizon::OneWeek => (
                    sign * volatility * 0.3,
                    0.75,
                    RiskLevel::Medium,
                    &[
                        "Weekly trend analysis",
                        "Volume patterns",
                        "Support/resistance levels",
                    ],
                ),
                Horizon::OneMonth => (
                    sign * volatility * 0.8,
                    0.65,
                    RiskLevel::High,
                    &[
                        "Monthly trend analysis",
                        "Market cycles",
                        "Economic indicators",
                    ],
                ),
            };

        let mut predicted_price = quote.current_price + base_offset;
        // Independent second draw keeps the projection from looking
        // artificially precise.
        predicted_price += self.centered_draw() * volatility * 0.2;

        Some(PricePrediction {
            predicted_price: predicted_price.max(0.0),
            confidence,
            trend,
            timeframe: horizon.label().to_owned(),
            factors: factors.iter().map(|factor| (*factor).to_owned()).collect(),
            risk_level,
        })
    }

    /// Uniform draw in `[-0.5, 0.5)`.
    fn centered_draw(&mut self) -> f64 {
        self.jitter.next_unit() - 0.5
    }
}
