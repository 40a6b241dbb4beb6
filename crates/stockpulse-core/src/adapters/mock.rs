//! Deterministic in-process market feed.
//!
//! Serves a curated dataset for a handful of well-known tickers and
//! symbol-seeded synthetic data for everything else, so the engine and
//! its display surfaces run without any network dependency. All
//! generated values are reproducible: the generator is seeded from the
//! symbol, never from wall-clock entropy.

use time::{Duration, OffsetDateTime};

use crate::feed::{FeedError, FeedFuture, MarketFeed};
use crate::{
    NewsItem, PricePoint, PriceSeries, Quote, Sentiment, Symbol, TradingDate, UtcDateTime,
    ValidationError,
};

/// Curated quote values keyed by ticker:
/// (current, previous close, change, change percent, high, low, volume).
const CURATED_QUOTES: &[(&str, f64, f64, f64, f64, f64, f64, u64)] = &[
    ("AAPL", 175.43, 173.50, 1.93, 1.11, 176.20, 172.80, 45_678_900),
    ("MSFT", 338.11, 335.80, 2.31, 0.69, 340.50, 334.20, 23_456_700),
    ("GOOGL", 142.56, 141.20, 1.36, 0.96, 143.80, 140.50, 34_567_800),
    ("TSLA", 248.42, 252.75, -4.33, -1.71, 255.20, 246.80, 56_789_000),
];

/// Deterministic mock feed.
#[derive(Debug, Clone, Default)]
pub struct MockFeed;

impl MockFeed {
    pub fn new() -> Self {
        Self
    }

    fn curated_quote(symbol: &Symbol) -> Option<Result<Quote, ValidationError>> {
        CURATED_QUOTES
            .iter()
            .find(|entry| entry.0 == symbol.as_str())
            .map(|&(_, current, previous, change, change_pct, high, low, volume)| {
                Quote::new(
                    symbol.clone(),
                    current,
                    previous,
                    change,
                    change_pct,
                    high,
                    low,
                    volume,
                )
            })
    }

    fn synthetic_quote(symbol: &Symbol) -> Result<Quote, ValidationError> {
        let mut rng = fastrand::Rng::with_seed(symbol_seed(symbol));
        let base = 100.0 + rng.f64() * 200.0;
        let change = (rng.f64() - 0.5) * 10.0;
        let previous_close = base - change;
        let change_percent = change / previous_close * 100.0;
        let high = base + rng.f64() * 5.0;
        let low = base - rng.f64() * 5.0;
        let volume = rng.u64(1_000_000..51_000_000);

        Quote::new(
            symbol.clone(),
            base,
            previous_close,
            change,
            change_percent,
            high,
            low,
            volume,
        )
    }

    fn base_price(symbol: &Symbol) -> f64 {
        CURATED_QUOTES
            .iter()
            .find(|entry| entry.0 == symbol.as_str())
            .map(|entry| entry.1)
            .unwrap_or_else(|| 100.0 + fastrand::Rng::with_seed(symbol_seed(symbol)).f64() * 200.0)
    }

    fn generate_history(symbol: &Symbol, days: usize) -> Result<PriceSeries, ValidationError> {
        let mut rng = fastrand::Rng::with_seed(symbol_seed(symbol) ^ 0x9e37_79b9);
        let today = OffsetDateTime::now_utc().date();
        let mut price = Self::base_price(symbol);

        let mut points = Vec::with_capacity(days);
        for offset in (0..days).rev() {
            // Small daily move plus a slow sinusoidal drift, floored
            // so the walk never reaches zero.
            let daily_move = (rng.f64() - 0.5) * 0.04;
            price *= 1.0 + daily_move;
            let drift = (offset as f64 * 0.1).sin() * 0.01;
            price *= 1.0 + drift;

            let date = TradingDate::from_date(today - Duration::days(offset as i64));
            points.push(PricePoint::new(date, price.max(0.01))?);
        }

        Ok(PriceSeries::new(points))
    }

    fn curated_news(symbol: &Symbol) -> Option<Result<Vec<NewsItem>, ValidationError>> {
        let build = |entries: &[(&str, &str, &str, &str, Sentiment)]| {
            entries
                .iter()
                .map(|&(title, description, url, published_at, sentiment)| {
                    NewsItem::new(
                        title,
                        Some(description.to_owned()),
                        url,
                        UtcDateTime::parse(published_at)?,
                        wire_for(url),
                        Some(sentiment),
                    )
                })
                .collect::<Result<Vec<_>, _>>()
        };

        match symbol.as_str() {
            "AAPL" => Some(build(&[
                (
                    "Apple Reports Strong Q4 Earnings, iPhone Sales Surge",
                    "Apple Inc. reported better-than-expected quarterly earnings with iPhone sales showing strong growth.",
                    "https://finance.yahoo.com/quote/AAPL",
                    "2024-01-15T10:30:00Z",
                    Sentiment::Positive,
                ),
                (
                    "Apple Stock Reaches New Highs on Strong Performance",
                    "Apple shares hit record levels as investors remain bullish on the company's future prospects.",
                    "https://www.marketwatch.com/investing/stock/aapl",
                    "2024-01-14T15:45:00Z",
                    Sentiment::Positive,
                ),
                (
                    "Apple Technical Analysis: Support and Resistance Levels",
                    "Technical analysts are monitoring key support and resistance levels for Apple as the stock continues to show volatility.",
                    "https://www.tradingview.com/symbols/AAPL/",
                    "2024-01-13T14:20:00Z",
                    Sentiment::Neutral,
                ),
            ])),
            "MSFT" => Some(build(&[
                (
                    "Microsoft Cloud Services Drive Revenue Growth",
                    "Microsoft's Azure cloud platform continues to show strong growth, boosting overall revenue.",
                    "https://finance.yahoo.com/quote/MSFT",
                    "2024-01-15T09:15:00Z",
                    Sentiment::Positive,
                ),
                (
                    "Microsoft Stock Analysis: Cloud Computing Dominance",
                    "Microsoft continues to dominate the cloud computing space with strong Azure performance.",
                    "https://www.marketwatch.com/investing/stock/msft",
                    "2024-01-14T16:30:00Z",
                    Sentiment::Positive,
                ),
            ])),
            "GOOGL" => Some(build(&[
                (
                    "Google Faces Regulatory Challenges in EU",
                    "Google parent Alphabet faces new regulatory scrutiny over its advertising practices.",
                    "https://finance.yahoo.com/quote/GOOGL",
                    "2024-01-15T11:20:00Z",
                    Sentiment::Negative,
                ),
                (
                    "Alphabet Stock Update: AI Investments Pay Off",
                    "Google's parent company Alphabet sees positive returns from its artificial intelligence investments.",
                    "https://www.marketwatch.com/investing/stock/googl",
                    "2024-01-14T13:45:00Z",
                    Sentiment::Positive,
                ),
            ])),
            "TSLA" => Some(build(&[
                (
                    "Tesla Stock Declines on Production Concerns",
                    "Tesla shares fell as investors worry about production delays and supply chain issues.",
                    "https://finance.yahoo.com/quote/TSLA",
                    "2024-01-15T12:10:00Z",
                    Sentiment::Negative,
                ),
                (
                    "Tesla Electric Vehicle Market Share Analysis",
                    "Tesla maintains strong position in the electric vehicle market despite increasing competition.",
                    "https://www.marketwatch.com/investing/stock/tsla",
                    "2024-01-14T10:15:00Z",
                    Sentiment::Neutral,
                ),
            ])),
            _ => None,
        }
    }

    fn synthetic_news(symbol: &Symbol) -> Result<Vec<NewsItem>, ValidationError> {
        let now = OffsetDateTime::now_utc();
        let ticker = symbol.as_str();

        // Sentiment is left unassigned so the engine's classifier runs
        // over synthetic headlines.
        let items = vec![
            NewsItem::new(
                format!("{ticker} Stock Analysis: Market Trends and Outlook"),
                Some(format!(
                    "Recent analysis shows {ticker} stock performance and market trends. \
                     Investors are closely watching the company's quarterly results and \
                     future projections."
                )),
                format!("https://finance.yahoo.com/quote/{ticker}"),
                UtcDateTime::from_offset_datetime(now)?,
                "Yahoo Finance",
                None,
            )?,
            NewsItem::new(
                format!("{ticker} Reports Quarterly Earnings"),
                Some(format!(
                    "{ticker} has released its latest quarterly earnings report, showing \
                     mixed results across different business segments."
                )),
                format!(
                    "https://www.marketwatch.com/investing/stock/{}",
                    ticker.to_ascii_lowercase()
                ),
                UtcDateTime::from_offset_datetime(now - Duration::days(1))?,
                "MarketWatch",
                None,
            )?,
            NewsItem::new(
                format!("{ticker} Technical Analysis: Support and Resistance Levels"),
                Some(format!(
                    "Technical analysts are monitoring key support and resistance levels \
                     for {ticker} as the stock continues to show volatility in current \
                     market conditions."
                )),
                format!("https://www.tradingview.com/symbols/{ticker}/"),
                UtcDateTime::from_offset_datetime(now - Duration::days(2))?,
                "TradingView",
                None,
            )?,
        ];

        Ok(items)
    }
}

impl MarketFeed for MockFeed {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FeedFuture<'a, Quote> {
        Box::pin(async move {
            let built = match Self::curated_quote(symbol) {
                Some(curated) => curated,
                None => Self::synthetic_quote(symbol),
            };
            built.map_err(|error| FeedError::internal(error.to_string()))
        })
    }

    fn history<'a>(&'a self, symbol: &'a Symbol, days: usize) -> FeedFuture<'a, PriceSeries> {
        Box::pin(async move {
            if days == 0 {
                return Err(FeedError::invalid_request(
                    "history request must cover at least one day",
                ));
            }
            Self::generate_history(symbol, days)
                .map_err(|error| FeedError::internal(error.to_string()))
        })
    }

    fn news<'a>(&'a self, symbol: &'a Symbol) -> FeedFuture<'a, Vec<NewsItem>> {
        Box::pin(async move {
            let built = match Self::curated_news(symbol) {
                Some(curated) => curated,
                None => Self::synthetic_news(symbol),
            };
            built.map_err(|error| FeedError::internal(error.to_string()))
        })
    }
}

fn wire_for(url: &str) -> &'static str {
    if url.contains("marketwatch") {
        "MarketWatch"
    } else if url.contains("tradingview") {
        "TradingView"
    } else {
        "Yahoo Finance"
    }
}

/// FNV-1a over the symbol text; stable across runs and platforms.
fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol
        .as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        })
}
