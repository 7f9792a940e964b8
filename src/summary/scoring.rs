use std::collections::HashMap;

use crate::text::words;

/// Words of this many characters or fewer don't count toward importance.
pub const MIN_SCORED_WORD_LEN: usize = 3;

/// Per-index decay applied to sentence scores.
pub const POSITION_DECAY: f64 = 0.15;

/// Occurrence counts of every scored word across one document.
#[derive(Debug, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, u32>,
    max: u32,
}

impl WordFrequencies {
    #[must_use]
    pub fn from_sentences(sentences: &[String]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for sentence in sentences {
            for word in words(sentence) {
                if word.len() > MIN_SCORED_WORD_LEN {
                    *counts.entry(word).or_insert(0) += 1;
                }
            }
        }
        let max = counts.values().copied().max().unwrap_or(0);
        Self { counts, max }
    }

    #[must_use]
    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn max_frequency(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// A sentence with its importance score and original position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Lead-paragraph weighting: 1.0 for the first sentence, then decaying.
#[must_use]
pub fn position_boost(index: usize) -> f64 {
    1.0 / (1.0 + index as f64 * POSITION_DECAY)
}

/// Score each sentence by the normalized frequency of its words.
///
/// The raw score sums `freq(w) / max_freq` over the sentence's long words,
/// divides by the total number of words in the sentence, and is then scaled
/// by [`position_boost`]. Output order matches input order.
#[must_use]
pub fn score_sentences(sentences: &[String]) -> Vec<ScoredSentence> {
    let freqs = WordFrequencies::from_sentences(sentences);

    if freqs.is_empty() {
        return sentences
            .iter()
            .enumerate()
            .map(|(index, text)| ScoredSentence {
                index,
                text: text.clone(),
                score: 0.0,
            })
            .collect();
    }

    let max_freq = f64::from(freqs.max_frequency());

    sentences
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let tokens = words(text);
            let score = if tokens.is_empty() {
                0.0
            } else {
                let raw: f64 = tokens
                    .iter()
                    .filter(|w| w.len() > MIN_SCORED_WORD_LEN)
                    .map(|w| f64::from(freqs.get(w)) / max_freq)
                    .sum();
                raw / tokens.len().max(1) as f64 * position_boost(index)
            };
            ScoredSentence {
                index,
                text: text.clone(),
                score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn counts_only_long_words() {
        let freqs = WordFrequencies::from_sentences(&owned(&[
            "The markets rallied and markets rose.",
            "Then the markets fell.",
        ]));
        assert_eq!(freqs.get("markets"), 3);
        assert_eq!(freqs.get("rose"), 1);
        assert_eq!(freqs.get("the"), 0);
        assert_eq!(freqs.get("and"), 0);
        assert_eq!(freqs.max_frequency(), 3);
        assert_eq!(freqs.get("then"), 1);
        assert_eq!(freqs.get("fell"), 1);
    }

    #[test]
    fn position_boost_decays() {
        assert!((position_boost(0) - 1.0).abs() < f64::EPSILON);
        assert!(position_boost(1) < position_boost(0));
        assert!(position_boost(10) < position_boost(9));
        assert!((position_boost(2) - 1.0 / 1.3).abs() < 1e-12);
    }

    #[test]
    fn no_long_words_scores_everything_zero() {
        let scored = score_sentences(&owned(&["a bb ccc is on to it", "123 456 789 000 111"]));
        assert_eq!(scored.len(), 2);
        assert!(scored.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn sentence_without_tokens_scores_zero() {
        let scored = score_sentences(&owned(&["Central banks hold rates steady", "1234 5678 9012 3456"]));
        assert!(scored[0].score > 0.0);
        assert_eq!(scored[1].score, 0.0);
    }

    #[test]
    fn normalizes_by_sentence_length() {
        // "growth" appears twice (max_freq = 2); single-word sentence vs padded one.
        let scored = score_sentences(&owned(&["growth", "growth is up a bit"]));
        assert!((scored[0].score - 1.0).abs() < 1e-12);
        let expected = (1.0 / 5.0) * position_boost(1);
        assert!((scored[1].score - expected).abs() < 1e-12);
    }

    #[test]
    fn preserves_input_order_and_indices() {
        let input = owned(&["Zeta sentence here", "Alpha sentence here", "Mid sentence here"]);
        let scored = score_sentences(&input);
        let texts: Vec<&str> = scored.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Zeta sentence here", "Alpha sentence here", "Mid sentence here"]);
        assert_eq!(scored.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn earlier_identical_sentence_scores_higher() {
        let scored = score_sentences(&owned(&[
            "Inflation worries weigh on global markets",
            "Inflation worries weigh on global markets",
        ]));
        assert!(scored[0].score > scored[1].score);
    }
}
