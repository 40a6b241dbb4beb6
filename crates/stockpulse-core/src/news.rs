//! News pool sentiment aggregation.

use serde::{Deserialize, Serialize};

use crate::{NewsItem, Sentiment, SentimentClassifier};

/// Aggregated sentiment of a news pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewsDigest {
    pub overall: Sentiment,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub total: usize,
}

impl NewsDigest {
    /// Digest of an empty news pool.
    pub fn empty() -> Self {
        Self {
            overall: Sentiment::Neutral,
            positive_ratio: 0.0,
            negative_ratio: 0.0,
            total: 0,
        }
    }
}

/// Reduces per-item sentiment labels to an overall label and ratios.
///
/// Items without a pre-assigned label are classified from their full
/// text first, so upstream-labeled and engine-labeled pools aggregate
/// identically.
#[derive(Debug, Clone, Default)]
pub struct NewsAggregator {
    classifier: SentimentClassifier,
}

impl NewsAggregator {
    pub fn new(classifier: SentimentClassifier) -> Self {
        Self { classifier }
    }

    /// Label a single item, classifying when the provider left it out.
    pub fn label(&self, item: &NewsItem) -> Sentiment {
        item.sentiment
            .unwrap_or_else(|| self.classifier.classify(&item.full_text()))
    }

    pub fn aggregate(&self, items: &[NewsItem]) -> NewsDigest {
        if items.is_empty() {
            return NewsDigest::empty();
        }

        let mut positive = 0usize;
        let mut negative = 0usize;
        for item in items {
            match self.label(item) {
                Sentiment::Positive => positive += 1,
                Sentiment::Negative => negative += 1,
                Sentiment::Neutral => {}
            }
        }

        let total = items.len();
        let positive_ratio = positive as f64 / total as f64;
        let negative_ratio = negative as f64 / total as f64;

        let overall = if positive_ratio > 0.4 {
            Sentiment::Positive
        } else if negative_ratio > 0.4 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        NewsDigest {
            overall,
            positive_ratio,
            negative_ratio,
            total,
        }
    }
}
