//! Extractive summarization.
//!
//! Sentences are ranked by word frequency with a lead-position boost, the
//! best ones are kept, and they're put back in document order.

pub mod scoring;

use tracing::debug;

use crate::text::{split_sentences, trim_space};

pub use scoring::{ScoredSentence, WordFrequencies, position_boost, score_sentences};

/// Sentences kept on the first attempt.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Sentences kept when the first attempt runs long.
pub const DEFAULT_FALLBACK_SENTENCES: usize = 2;

/// Summaries longer than this many characters trigger the fallback attempt.
pub const DEFAULT_CHAR_LIMIT: usize = 250;

/// Assumed reading speed for [`estimate_read_time_secs`].
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Floor for [`estimate_read_time_secs`].
pub const MIN_READ_TIME_SECS: u32 = 15;

/// Length control for [`summarize_with_policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryPolicy {
    pub max_sentences: usize,
    pub fallback_sentences: usize,
    pub char_limit: usize,
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            fallback_sentences: DEFAULT_FALLBACK_SENTENCES,
            char_limit: DEFAULT_CHAR_LIMIT,
        }
    }
}

/// Summarize `text` down to at most `max_sentences` sentences.
///
/// When the text has no more than `max_sentences` qualifying sentences the
/// trimmed input comes back unchanged. Otherwise the top-scoring sentences
/// are joined with single spaces in their original order. Equal scores keep
/// document order, so the earlier sentence wins a tie.
///
/// ```
/// use briefly::summary::summarize;
///
/// assert_eq!(summarize("  Just one sentence in here.  ", 3), "Just one sentence in here.");
/// ```
#[must_use]
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);

    if sentences.len() <= max_sentences {
        return trim_space(text).to_string();
    }

    let mut ranked = score_sentences(&sentences);
    // sort_by is stable: ties stay in document order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(max_sentences);
    ranked.sort_by_key(|s| s.index);

    debug!(
        total = sentences.len(),
        kept = ranked.len(),
        "Selected summary sentences"
    );

    ranked
        .into_iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summarize with the length-control fallback.
///
/// Tries `policy.max_sentences` first. If that result is longer than
/// `policy.char_limit` characters, it is thrown away and the text is
/// summarized again with `policy.fallback_sentences`. The second result is
/// returned as-is even if it is still over the limit.
#[must_use]
pub fn summarize_with_policy(text: &str, policy: &SummaryPolicy) -> String {
    let summary = summarize(text, policy.max_sentences);
    if summary.chars().count() > policy.char_limit {
        debug!(
            limit = policy.char_limit,
            fallback = policy.fallback_sentences,
            "Summary over limit, retrying with fewer sentences"
        );
        return summarize(text, policy.fallback_sentences);
    }
    summary
}

/// Estimated seconds needed to read `text`, never less than
/// [`MIN_READ_TIME_SECS`].
#[must_use]
pub fn estimate_read_time_secs(text: &str) -> u32 {
    let word_count = text
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphabetic))
        .count();
    let secs = (word_count as f64 / WORDS_PER_MINUTE * 60.0).round() as u32;
    secs.max(MIN_READ_TIME_SECS)
}
