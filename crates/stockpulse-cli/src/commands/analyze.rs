use std::str::FromStr;

use stockpulse_core::{
    HealthScorer, Horizon, MarketFeed, PricePredictor, Symbol, MIN_HISTORY_POINTS,
};

use crate::cli::AnalyzeArgs;
use crate::error::CliError;

use super::{AnalysisReport, InsufficientHistory, Report};

pub async fn run(args: &AnalyzeArgs, feed: &dyn MarketFeed) -> Result<Report, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let horizon = Horizon::from_str(&args.horizon)?;

    let (quote, history, news) = tokio::join!(
        feed.quote(&symbol),
        feed.history(&symbol, args.days),
        feed.news(&symbol),
    );
    let (quote, history, news) = (quote?, history?, news?);

    let assessment = HealthScorer::default().score(&quote, &history, &news);
    let prediction = PricePredictor::default().predict(&quote, &history, horizon);
    let insufficient_history = prediction.is_none().then(|| InsufficientHistory {
        points: history.len(),
        required: MIN_HISTORY_POINTS,
    });

    Ok(Report::Analysis(AnalysisReport {
        symbol: symbol.as_str().to_owned(),
        assessment,
        horizon: horizon.label().to_owned(),
        prediction,
        insufficient_history,
    }))
}
