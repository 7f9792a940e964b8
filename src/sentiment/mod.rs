//! Lexicon-based sentiment classification.

pub mod lexicon;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::word_set;

pub use lexicon::Lexicon;

/// Scores inside `[-NEUTRAL_BAND, NEUTRAL_BAND]` are labelled neutral.
pub const NEUTRAL_BAND: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label plus a score in `[-1.0, 1.0]`, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    pub score: f64,
}

impl SentimentResult {
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            label: Sentiment::Neutral,
            score: 0.0,
        }
    }
}

/// Classifies text by counting distinct lexicon hits.
#[derive(Debug, Clone, Copy)]
pub struct SentimentClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl Default for SentimentClassifier<'static> {
    fn default() -> Self {
        Self::new(Lexicon::news())
    }
}

impl<'a> SentimentClassifier<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify `text`.
    ///
    /// The score is `(pos - neg) / (pos + neg)` over the distinct words of the
    /// text that appear in the lexicon. Text with no lexicon words is neutral
    /// with a score of exactly zero.
    ///
    /// ```
    /// use briefly::sentiment::{Sentiment, SentimentClassifier};
    ///
    /// let result = SentimentClassifier::default().classify("Record profit and strong growth");
    /// assert_eq!(result.label, Sentiment::Positive);
    /// assert_eq!(result.score, 1.0);
    /// ```
    #[must_use]
    pub fn classify(&self, text: &str) -> SentimentResult {
        let words = word_set(text);
        let (pos, neg) = self.lexicon.count_matches(&words);
        let total = pos + neg;

        if total == 0 {
            return SentimentResult::neutral();
        }

        let score = (pos as f64 - neg as f64) / total as f64;

        if score > NEUTRAL_BAND {
            SentimentResult {
                label: Sentiment::Positive,
                score: round2(score.min(1.0)),
            }
        } else if score < -NEUTRAL_BAND {
            SentimentResult {
                label: Sentiment::Negative,
                score: round2(score.max(-1.0)),
            }
        } else {
            SentimentResult {
                label: Sentiment::Neutral,
                score: round2(score),
            }
        }
    }
}

/// Classify with the built-in news lexicon.
#[must_use]
pub fn classify(text: &str) -> SentimentResult {
    SentimentClassifier::default().classify(text)
}

// Rounds the stored double, not `value * 100`: (37 - 43) / 80 is stored just
// above -0.075 and must come out as -0.07. Exact halves go to the even digit.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
