mod analyze;
mod health;
mod predict;

use serde::Serialize;

use stockpulse_core::{HealthAssessment, MarketFeed, PricePrediction};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Payload produced by a command, ready for rendering.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Health(HealthReport),
    Prediction(PredictionReport),
    Analysis(AnalysisReport),
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub symbol: String,
    pub assessment: HealthAssessment,
}

#[derive(Debug, Serialize)]
pub struct PredictionReport {
    pub symbol: String,
    pub horizon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PricePrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insufficient_history: Option<InsufficientHistory>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub assessment: HealthAssessment,
    pub horizon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PricePrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insufficient_history: Option<InsufficientHistory>,
}

/// Distinguished no-prediction outcome; not an error.
#[derive(Debug, Serialize)]
pub struct InsufficientHistory {
    pub points: usize,
    pub required: usize,
}

pub async fn run(cli: &Cli, feed: &dyn MarketFeed) -> Result<Report, CliError> {
    match &cli.command {
        Command::Health(args) => health::run(args, feed).await,
        Command::Predict(args) => predict::run(args, feed).await,
        Command::Analyze(args) => analyze::run(args, feed).await,
    }
}
