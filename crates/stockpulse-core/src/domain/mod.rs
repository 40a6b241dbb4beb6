//! # Domain Models
//!
//! Canonical domain types for the stockpulse scoring engine.
//!
//! ## Overview
//!
//! This module provides strongly-typed domain models with built-in
//! validation. All models are designed to be:
//!
//! - **Type-safe**: label vocabulary lives in enums, not strings
//! - **Validated**: construction checks numeric and string invariants
//! - **Serializable**: full serde support for JSON
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Quote`] | Point-in-time price/volume snapshot |
//! | [`PricePoint`] | Single daily closing price |
//! | [`PriceSeries`] | Ordered daily closes over a lookback window |
//! | [`NewsItem`] | Headline with optional pre-assigned sentiment |
//! | [`Sentiment`] | 3-way polarity label |
//! | [`Symbol`] | Validated stock symbol |
//! | [`TradingDate`] | ISO 8601 calendar date |
//! | [`UtcDateTime`] | RFC3339 UTC timestamp |
//!
//! ## Validation
//!
//! Numeric fields must be finite; prices and volumes must be
//! non-negative. Quote `change`/`change_percent` may be negative and
//! are never reconciled against the price fields: inconsistent
//! upstream values flow through and the scoring engine computes from
//! the fields as given.

mod date;
mod models;
mod symbol;
mod timestamp;

pub use date::TradingDate;
pub use models::{NewsItem, PricePoint, PriceSeries, Quote, Sentiment};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
