use serde::{Deserialize, Serialize};

use crate::{Symbol, TradingDate, UtcDateTime, ValidationError};

/// Qualitative polarity of a piece of text or a news pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Point-in-time price/volume snapshot for an instrument.
///
/// `change` and `change_percent` are taken as delivered by the
/// upstream provider. They are validated finite but never recomputed
/// or reconciled against the price fields; inconsistent inputs flow
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub current_price: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

impl Quote {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: Symbol,
        current_price: f64,
        previous_close: f64,
        change: f64,
        change_percent: f64,
        high: f64,
        low: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("current_price", current_price)?;
        validate_non_negative("previous_close", previous_close)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_finite("change", change)?;
        validate_finite("change_percent", change_percent)?;

        Ok(Self {
            symbol,
            current_price,
            previous_close,
            change,
            change_percent,
            high,
            low,
            volume,
        })
    }
}

/// Single daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: TradingDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: TradingDate, price: f64) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        Ok(Self { date, price })
    }
}

/// Ordered daily closing prices over a lookback window.
///
/// Points are expected ascending by date. The ordering is not
/// enforced; detectors treat the sequence positionally and stay total
/// over unordered or empty input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Closing prices of the most recent `n` points (fewer if shorter).
    pub fn recent_prices(&self, n: usize) -> Vec<f64> {
        let start = self.points.len().saturating_sub(n);
        self.points[start..].iter().map(|point| point.price).collect()
    }
}

/// Single news headline with optional pre-assigned sentiment.
///
/// `sentiment` is `None` when the upstream provider left
/// classification to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub published_at: UtcDateTime,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        url: impl Into<String>,
        published_at: UtcDateTime,
        source: impl Into<String>,
        sentiment: Option<Sentiment>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyNewsTitle);
        }

        Ok(Self {
            title,
            description,
            url: url.into(),
            published_at,
            source: source.into(),
            sentiment,
        })
    }

    /// Title and description joined, the text the classifier scores.
    pub fn full_text(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {}", self.title, description),
            None => self.title.clone(),
        }
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
