//! Behavior-driven tests for health scoring.
//!
//! These tests verify HOW the scorer fuses trend, sentiment, and
//! volume signals: cascade ordering, confidence bounds, and graceful
//! degradation on thin input.

use stockpulse_core::{
    HealthScorer, PriceSeries, Recommendation, Sentiment, Trend, VolumeIndicator,
};
use stockpulse_tests::{
    falling_series, negative_news, news_item, positive_news, quote, rising_series, series,
};

// =============================================================================
// Health Scorer: Rule Cascade
// =============================================================================

#[test]
fn when_all_signals_align_bullishly_the_scorer_recommends_buy() {
    // Given: rising prices, a positive news pool, and a positive day
    let scorer = HealthScorer::default();

    // When: the stock is scored
    let assessment = scorer.score(&quote(2.0), &rising_series(), &positive_news());

    // Then: an aligned Buy with ratio-scaled confidence
    assert_eq!(assessment.status, Recommendation::Buy);
    assert_eq!(assessment.price_trend, Trend::Rising);
    assert_eq!(assessment.news_sentiment, Sentiment::Positive);
    // Base 0.75 + 0.6 positive ratio * 0.2 = 0.87, medium volume adds nothing.
    assert!((assessment.confidence - 0.87).abs() < 1e-12);
}

#[test]
fn when_all_signals_align_bearishly_the_scorer_recommends_avoid() {
    let scorer = HealthScorer::default();

    let assessment = scorer.score(&quote(-2.0), &falling_series(), &negative_news());

    assert_eq!(assessment.status, Recommendation::Avoid);
    assert_eq!(assessment.price_trend, Trend::Falling);
    assert_eq!(assessment.news_sentiment, Sentiment::Negative);
    assert!((assessment.confidence - 0.87).abs() < 1e-12);
}

#[test]
fn when_two_rules_match_the_earlier_one_wins() {
    // Given: rising trend, positive sentiment, +2% change. Both the
    // aligned-buy rule and the momentum-buy rule (change > 1%) match.
    let scorer = HealthScorer::default();

    // When: the stock is scored
    let assessment = scorer.score(&quote(2.0), &rising_series(), &positive_news());

    // Then: the aligned rule's ratio-scaled confidence appears, not
    // the momentum rule's flat 0.6. First match wins.
    assert!((assessment.confidence - 0.87).abs() < 1e-12);
    assert_eq!(assessment.status, Recommendation::Buy);
}

#[test]
fn when_trend_rises_without_news_support_momentum_alone_buys() {
    // Given: rising prices but a neutral news pool
    let scorer = HealthScorer::default();
    let news = vec![news_item("flat coverage", Some(Sentiment::Neutral))];

    // When: the day is up more than 1%
    let assessment = scorer.score(&quote(1.5), &rising_series(), &news);

    // Then: momentum Buy at flat confidence
    assert_eq!(assessment.status, Recommendation::Buy);
    assert!((assessment.confidence - 0.6).abs() < 1e-12);
}

#[test]
fn when_trend_falls_hard_without_news_support_the_scorer_avoids() {
    let scorer = HealthScorer::default();
    let news = vec![news_item("flat coverage", Some(Sentiment::Neutral))];

    let assessment = scorer.score(&quote(-1.5), &falling_series(), &news);

    assert_eq!(assessment.status, Recommendation::Avoid);
    assert!((assessment.confidence - 0.6).abs() < 1e-12);
}

#[test]
fn when_the_market_is_quiet_and_news_neutral_confidence_drops() {
    // Given: a flat series and neutral coverage
    let scorer = HealthScorer::default();
    let flat = series(&[100.0; 7]);
    let news = vec![news_item("flat coverage", Some(Sentiment::Neutral))];

    // When: the day moved less than half a percent
    let assessment = scorer.score(&quote(0.2), &flat, &news);

    // Then: a low-confidence Watch
    assert_eq!(assessment.status, Recommendation::Watch);
    assert!((assessment.confidence - 0.4).abs() < 1e-12);
}

#[test]
fn when_signals_conflict_the_scorer_defaults_to_watch() {
    // Given: rising prices but clearly negative news and a modest move
    let scorer = HealthScorer::default();

    let assessment = scorer.score(&quote(0.8), &rising_series(), &negative_news());

    // Then: mixed signals land on the catch-all Watch
    assert_eq!(assessment.status, Recommendation::Watch);
    assert!((assessment.confidence - 0.5).abs() < 1e-12);
}

// =============================================================================
// Health Scorer: Confidence Bounds
// =============================================================================

#[test]
fn confidence_never_exceeds_the_ceiling() {
    // Given: a fully positive news pool (ratio 1.0) pushing the
    // aligned-buy confidence to 0.95 before adjustment
    let scorer = HealthScorer::default();
    let unanimous: Vec<_> = (0..5)
        .map(|_| news_item("up", Some(Sentiment::Positive)))
        .collect();

    let assessment = scorer.score(&quote(2.0), &rising_series(), &unanimous);

    assert!(assessment.confidence <= 0.95);
    assert!((assessment.confidence - 0.95).abs() < 1e-12);
}

#[test]
fn confidence_stays_within_bounds_across_input_sweeps() {
    let scorer = HealthScorer::default();
    let pools = [positive_news(), negative_news(), Vec::new()];
    let serieses = [
        rising_series(),
        falling_series(),
        series(&[100.0; 7]),
        PriceSeries::default(),
    ];

    for change_percent in [-5.0, -1.5, -0.2, 0.0, 0.2, 1.5, 5.0] {
        for pool in &pools {
            for history in &serieses {
                let assessment = scorer.score(&quote(change_percent), history, pool);
                assert!(
                    (0.0..=0.95).contains(&assessment.confidence),
                    "confidence {} out of bounds for change_percent={}",
                    assessment.confidence,
                    change_percent
                );
            }
        }
    }
}

// =============================================================================
// Health Scorer: Degradation
// =============================================================================

#[test]
fn when_history_and_news_are_empty_the_scorer_degrades_to_defaults() {
    // Given: no history and no news at all
    let scorer = HealthScorer::default();

    // When: a quiet day is scored
    let assessment = scorer.score(&quote(0.1), &PriceSeries::default(), &[]);

    // Then: default signals and the quiet-watch verdict, no fault
    assert_eq!(assessment.status, Recommendation::Watch);
    assert_eq!(assessment.price_trend, Trend::Stable);
    assert_eq!(assessment.news_sentiment, Sentiment::Neutral);
    assert_eq!(assessment.volume_indicator, VolumeIndicator::Medium);
    assert!((assessment.confidence - 0.4).abs() < 1e-12);
}

#[test]
fn scoring_is_deterministic_for_identical_inputs() {
    let scorer = HealthScorer::default();
    let history = rising_series();
    let news = positive_news();

    let first = scorer.score(&quote(2.0), &history, &news);
    let second = scorer.score(&quote(2.0), &history, &news);
    assert_eq!(first, second);
}

#[test]
fn unlabeled_news_items_are_classified_before_aggregation() {
    // Given: headlines with no pre-assigned sentiment whose keywords
    // are clearly positive
    let scorer = HealthScorer::default();
    let news = vec![
        news_item("Shares surge on strong earnings beat", None),
        news_item("Analysts recommend buy after rally", None),
        news_item("Record profit growth this quarter", None),
    ];

    // When: scored alongside a rising series and a positive day
    let assessment = scorer.score(&quote(2.0), &rising_series(), &news);

    // Then: the engine-classified pool drives the aligned Buy
    assert_eq!(assessment.status, Recommendation::Buy);
    assert_eq!(assessment.news_sentiment, Sentiment::Positive);
}
