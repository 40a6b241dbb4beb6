use crate::cli::OutputFormat;
use crate::commands::{AnalysisReport, HealthReport, PredictionReport, Report};
use crate::error::CliError;

use stockpulse_core::{HealthAssessment, PricePrediction};

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report),
    }

    Ok(())
}

fn render_table(report: &Report) {
    match report {
        Report::Health(health) => {
            println!("symbol      : {}", health.symbol);
            render_assessment(&health.assessment);
        }
        Report::Prediction(prediction) => {
            println!("symbol      : {}", prediction.symbol);
            println!("horizon     : {}", prediction.horizon);
            render_projection(prediction.prediction.as_ref(), prediction);
        }
        Report::Analysis(analysis) => {
            println!("symbol      : {}", analysis.symbol);
            render_assessment(&analysis.assessment);
            println!("horizon     : {}", analysis.horizon);
            match &analysis.prediction {
                Some(prediction) => render_prediction(prediction),
                None => println!("projection  : insufficient history"),
            }
        }
    }
}

fn render_assessment(assessment: &HealthAssessment) {
    println!("status      : {}", assessment.status.as_str());
    println!("trend       : {}", assessment.price_trend.as_str());
    println!("sentiment   : {}", assessment.news_sentiment.as_str());
    println!("volume      : {}", assessment.volume_indicator.as_str());
    println!("confidence  : {:.0}%", assessment.confidence * 100.0);
}

fn render_projection(prediction: Option<&PricePrediction>, report: &PredictionReport) {
    match prediction {
        Some(prediction) => render_prediction(prediction),
        None => {
            if let Some(insufficient) = &report.insufficient_history {
                println!(
                    "projection  : insufficient history ({} of {} points)",
                    insufficient.points, insufficient.required
                );
            }
        }
    }
}

fn render_prediction(prediction: &PricePrediction) {
    println!("projected   : ${:.2}", prediction.predicted_price);
    println!("direction   : {}", prediction.trend.as_str());
    println!("risk        : {}", prediction.risk_level.as_str());
    println!("confidence  : {:.0}%", prediction.confidence * 100.0);
    for factor in &prediction.factors {
        println!("factor      : {factor}");
    }
}
