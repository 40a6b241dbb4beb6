use stockpulse_core::{HealthScorer, MarketFeed, Symbol};

use crate::cli::HealthArgs;
use crate::error::CliError;

use super::{HealthReport, Report};

pub async fn run(args: &HealthArgs, feed: &dyn MarketFeed) -> Result<Report, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    // The three fetches are independent; run them concurrently.
    let (quote, history, news) = tokio::join!(
        feed.quote(&symbol),
        feed.history(&symbol, args.days),
        feed.news(&symbol),
    );
    let (quote, history, news) = (quote?, history?, news?);

    let assessment = HealthScorer::default().score(&quote, &history, &news);

    Ok(Report::Health(HealthReport {
        symbol: symbol.as_str().to_owned(),
        assessment,
    }))
}
