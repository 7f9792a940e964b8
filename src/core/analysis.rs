use tracing::info;

use super::config::AppConfig;
use super::models::{Analysis, ArticleInput};
use crate::sentiment::SentimentClassifier;
use crate::summary::{estimate_read_time_secs, summarize_with_policy};

/// Joins title and description into the text that gets analyzed.
#[must_use]
pub fn full_text(title: &str, description: &str) -> String {
    if description.is_empty() {
        title.to_string()
    } else {
        format!("{}. {}", title, description)
    }
}

/// Summarize and classify one article with the built-in lexicon.
#[must_use]
pub fn analyze(input: &ArticleInput, config: &AppConfig) -> Analysis {
    analyze_with(input, config, &SentimentClassifier::default())
}

/// Summarize and classify one article with the given classifier.
#[must_use]
pub fn analyze_with(
    input: &ArticleInput,
    config: &AppConfig,
    classifier: &SentimentClassifier<'_>,
) -> Analysis {
    let text = full_text(input.title(), input.description());

    let summary = summarize_with_policy(&text, &config.summary_policy);
    let sentiment = classifier.classify(&text);
    let read_time_sec = estimate_read_time_secs(&summary);

    info!(
        input_chars = text.chars().count(),
        summary_chars = summary.chars().count(),
        sentiment = %sentiment.label,
        score = sentiment.score,
        "Article analyzed"
    );

    Analysis {
        summary,
        sentiment: sentiment.label,
        score: sentiment.score,
        read_time_sec,
    }
}
