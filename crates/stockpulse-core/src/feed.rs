//! Upstream market-data contract.
//!
//! The scoring engine never fetches anything itself; it consumes
//! fixed-shape records delivered by a [`MarketFeed`]. The three
//! fetches are independent and may run concurrently; a failure from
//! any one aborts that request's analysis without affecting others.
//! Retry, timeout, and circuit-breaking policy belong to the adapter
//! that owns the network call, not to this contract.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{NewsItem, PriceSeries, Quote, Symbol};

/// Feed-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured error returned by feed adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    kind: FeedErrorKind,
    message: String,
    retryable: bool,
}

impl FeedError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FeedErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FeedErrorKind::Unavailable => "feed.unavailable",
            FeedErrorKind::RateLimited => "feed.rate_limited",
            FeedErrorKind::InvalidRequest => "feed.invalid_request",
            FeedErrorKind::Internal => "feed.internal",
        }
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FeedError {}

/// Boxed future alias used by the feed contract.
pub type FeedFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FeedError>> + Send + 'a>>;

/// Upstream data provider contract.
///
/// Implementations must be `Send + Sync` so a single feed can serve
/// concurrent analysis requests.
pub trait MarketFeed: Send + Sync {
    /// Fetch the current quote snapshot for `symbol`.
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FeedFuture<'a, Quote>;

    /// Fetch up to `days` daily closes for `symbol`, ascending by date.
    fn history<'a>(&'a self, symbol: &'a Symbol, days: usize) -> FeedFuture<'a, PriceSeries>;

    /// Fetch recent news items for `symbol`.
    ///
    /// Items may carry a pre-assigned sentiment or leave it for the
    /// engine to classify.
    fn news<'a>(&'a self, symbol: &'a Symbol) -> FeedFuture<'a, Vec<NewsItem>>;
}
