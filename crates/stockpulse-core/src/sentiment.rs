//! Lexical sentiment classification for news text.
//!
//! Classification is a keyword count: the text is lower-cased and each
//! keyword is matched by substring containment (not tokenized, so a
//! keyword inside a larger word counts). Whichever polarity has
//! strictly more hits wins; ties, including zero hits on both sides,
//! are neutral.

use crate::Sentiment;

/// Default positive-polarity keyword set.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "surge", "jump", "rise", "gain", "up", "positive", "growth", "profit", "earnings", "beat",
    "strong", "bullish", "rally", "recovery", "outperform", "upgrade", "buy", "recommend",
];

/// Default negative-polarity keyword set.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "fall", "drop", "decline", "down", "negative", "loss", "miss", "weak", "bearish", "crash",
    "plunge", "downgrade", "sell", "avoid", "risk", "concern", "worry", "fear",
];

/// Keyword-count sentiment classifier.
///
/// Total and deterministic: every input maps to exactly one label and
/// repeated calls agree.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::with_keywords(POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS)
    }
}

impl SentimentClassifier {
    /// Build a classifier over custom keyword sets.
    ///
    /// Keywords are normalized to lowercase so matching stays
    /// case-insensitive regardless of how the sets are written.
    pub fn with_keywords(positive: &[&str], negative: &[&str]) -> Self {
        let lower = |words: &[&str]| {
            words
                .iter()
                .map(|word| word.to_ascii_lowercase())
                .collect::<Vec<_>>()
        };
        Self {
            positive: lower(positive),
            negative: lower(negative),
        }
    }

    /// Classify free text into a 3-way sentiment label.
    pub fn classify(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        let positive_hits = count_hits(&lowered, &self.positive);
        let negative_hits = count_hits(&lowered, &self.negative);

        if positive_hits > negative_hits {
            Sentiment::Positive
        } else if negative_hits > positive_hits {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

fn count_hits(text: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| text.contains(keyword.as_str()))
        .count()
}
