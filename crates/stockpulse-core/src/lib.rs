//! # Stockpulse Core
//!
//! Signal-aggregation and scoring engine for single-stock dashboards.
//!
//! ## Overview
//!
//! Given a quote snapshot, a daily price history, and a pool of news
//! items, the engine produces two derived artifacts:
//!
//! - a **health assessment**: a Buy/Watch/Avoid recommendation with the
//!   supporting trend, sentiment, and volume signals and a bounded
//!   confidence score
//! - a **price projection**: a short-horizon point estimate with a
//!   qualitative direction and risk tier
//!
//! The engine is pure and stateless: every call computes fresh values
//! from its inputs, retains nothing, and (outside the projector's
//! explicit jitter) is fully deterministic. Calls may run concurrently
//! without coordination.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Feed adapters (deterministic mock feed) |
//! | [`domain`] | Domain models (Quote, PriceSeries, NewsItem) |
//! | [`error`] | Core error types |
//! | [`feed`] | Upstream market-data contract |
//! | [`health`] | Rule-cascade health scoring |
//! | [`news`] | News sentiment aggregation |
//! | [`predict`] | Short-horizon price projection |
//! | [`sentiment`] | Lexical sentiment classification |
//! | [`trend`] | Split-window trend detection |
//! | [`volume`] | Volume anomaly classification |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockpulse_core::{
//!     HealthScorer, Horizon, MarketFeed, MockFeed, PricePredictor, Symbol,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let feed = MockFeed::new();
//!     let symbol = Symbol::parse("AAPL")?;
//!
//!     let quote = feed.quote(&symbol).await?;
//!     let history = feed.history(&symbol, 30).await?;
//!     let news = feed.news(&symbol).await?;
//!
//!     let assessment = HealthScorer::default().score(&quote, &history, &news);
//!     println!("{:?} at {:.0}%", assessment.status, assessment.confidence * 100.0);
//!
//!     if let Some(projection) =
//!         PricePredictor::default().predict(&quote, &history, Horizon::OneWeek)
//!     {
//!         println!("projected: ${:.2}", projection.predicted_price);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Scoring is total over its documented input domain: malformed or
//! missing inputs degrade to default labels (stable trend, neutral
//! sentiment, medium volume) instead of raising. The projector reports
//! insufficient history as `None`, a distinguished outcome rather than
//! a fault. Construction of domain values returns structured
//! [`ValidationError`]s; feed adapters return structured
//! [`feed::FeedError`]s.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod feed;
pub mod health;
pub mod news;
pub mod predict;
pub mod sentiment;
pub mod trend;
pub mod volume;

// Re-export commonly used types at crate root for convenience

// Adapters
pub use adapters::MockFeed;

// Domain models
pub use domain::{NewsItem, PricePoint, PriceSeries, Quote, Sentiment, Symbol, TradingDate, UtcDateTime};

// Error types
pub use error::ValidationError;

// Feed contract
pub use feed::{FeedError, FeedErrorKind, FeedFuture, MarketFeed};

// Health scoring
pub use health::{HealthAssessment, HealthScorer, Recommendation};

// News aggregation
pub use news::{NewsAggregator, NewsDigest};

// Price projection
pub use predict::{
    Direction, FastrandJitter, Horizon, JitterSource, PricePrediction, PricePredictor,
    RiskLevel, MIN_HISTORY_POINTS,
};

// Sentiment classification
pub use sentiment::{SentimentClassifier, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};

// Trend detection
pub use trend::{Trend, TrendDetector};

// Volume classification
pub use volume::{VolumeDetector, VolumeIndicator};
