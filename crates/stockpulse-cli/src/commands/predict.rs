use std::str::FromStr;

use stockpulse_core::{Horizon, MarketFeed, PricePredictor, Symbol, MIN_HISTORY_POINTS};

use crate::cli::PredictArgs;
use crate::error::CliError;

use super::{InsufficientHistory, PredictionReport, Report};

pub async fn run(args: &PredictArgs, feed: &dyn MarketFeed) -> Result<Report, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let horizon = Horizon::from_str(&args.horizon)?;

    let (quote, history) = tokio::join!(feed.quote(&symbol), feed.history(&symbol, args.days));
    let (quote, history) = (quote?, history?);

    let prediction = PricePredictor::default().predict(&quote, &history, horizon);
    let insufficient_history = prediction.is_none().then(|| InsufficientHistory {
        points: history.len(),
        required: MIN_HISTORY_POINTS,
    });

    Ok(Report::Prediction(PredictionReport {
        symbol: symbol.as_str().to_owned(),
        horizon: horizon.label().to_owned(),
        prediction,
        insufficient_history,
    }))
}
