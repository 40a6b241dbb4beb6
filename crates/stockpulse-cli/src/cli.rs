//! CLI argument definitions for stockpulse.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `health` | Score a stock's health from quote, history, and news |
//! | `predict` | Project a short-horizon price |
//! | `analyze` | Combined health assessment and price projection |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! # Score a stock
//! stockpulse health AAPL
//!
//! # Weekly price projection, pretty JSON
//! stockpulse predict AAPL --horizon 1w --pretty
//!
//! # Full report over 60 days of history
//! stockpulse analyze TSLA --days 60 --format table
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stockpulse - stock health scoring and price projection CLI
///
/// Fuses price trend, news sentiment, and volume signals into a
/// Buy/Watch/Avoid recommendation, and projects short-horizon prices
/// from trend and volatility.
#[derive(Debug, Parser)]
#[command(
    name = "stockpulse",
    author,
    version,
    about = "Stock health scoring and price projection CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object output.
    Json,
    /// Plain text lines for terminal display.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a stock's health from quote, history, and news signals.
    ///
    /// # Examples
    ///
    ///   stockpulse health AAPL
    ///   stockpulse health TSLA --days 60 --pretty
    Health(HealthArgs),

    /// Project a short-horizon price from trend and volatility.
    ///
    /// Reports an "insufficient history" outcome instead of failing
    /// when fewer than five history points are available.
    ///
    /// # Examples
    ///
    ///   stockpulse predict AAPL
    ///   stockpulse predict MSFT --horizon 1m
    Predict(PredictArgs),

    /// Combined report: health assessment plus price projection.
    ///
    /// # Examples
    ///
    ///   stockpulse analyze AAPL --horizon 1w
    Analyze(AnalyzeArgs),
}

/// Arguments for the `health` command.
#[derive(Debug, Args)]
pub struct HealthArgs {
    /// Market symbol to score (e.g., AAPL).
    pub symbol: String,

    /// Days of price history to fetch.
    #[arg(long, default_value_t = 30)]
    pub days: usize,
}

/// Arguments for the `predict` command.
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Market symbol to project.
    pub symbol: String,

    /// Prediction horizon: 1d, 1w, or 1m.
    #[arg(long, default_value = "1w")]
    pub horizon: String,

    /// Days of price history to fetch.
    #[arg(long, default_value_t = 30)]
    pub days: usize,
}

/// Arguments for the `analyze` command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Market symbol to analyze.
    pub symbol: String,

    /// Prediction horizon: 1d, 1w, or 1m.
    #[arg(long, default_value = "1w")]
    pub horizon: String,

    /// Days of price history to fetch.
    #[arg(long, default_value_t = 30)]
    pub days: usize,
}
