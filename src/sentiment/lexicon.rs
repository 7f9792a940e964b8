use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::errors::BrieflyError;

const NEWS_POSITIVE: &[&str] = &[
    "achieve", "advance", "amazing", "approval", "benefit", "best", "boost", "breakthrough",
    "celebrate", "climb", "confident", "cure", "deliver", "discover", "earn", "effective",
    "efficacy", "efficient", "enhance", "exceed", "excellent", "excitement", "expand",
    "gain", "good", "great", "grow", "growth", "happy", "highest", "hope", "improve",
    "increase", "innovate", "innovation", "launch", "lead", "milestone", "opportunity",
    "optimistic", "outstanding", "overcome", "positive", "profit", "progress", "promising",
    "prosper", "rally", "record", "recover", "recovery", "reform", "resolve", "revenue",
    "reward", "rise", "safe", "save", "secure", "soar", "solution", "strong", "succeed",
    "success", "support", "surge", "surpass", "thrive", "top", "triumph", "upgrade",
    "victory", "win", "wonderful",
];

const NEWS_NEGATIVE: &[&str] = &[
    "abandon", "abuse", "accident", "attack", "ban", "bankrupt", "blame", "block", "breach",
    "break", "burden", "cancel", "catastrophe", "chaos", "collapse", "concern", "conflict",
    "controversy", "correction", "crash", "crime", "crisis", "critical", "cut", "damage",
    "danger", "dead", "death", "debt", "decline", "default", "deficit", "delay", "destroy",
    "disaster", "disease", "disruption", "downturn", "drop", "emergency", "error", "evict",
    "exploit", "expose", "fail", "failure", "fall", "fear", "fire", "flood", "fraud",
    "hack", "harm", "hurt", "illegal", "inflation", "injure", "investigation", "kill",
    "lack", "lag", "layoff", "leak", "limit", "lose", "loss", "negative", "overvalue",
    "panic", "penalty", "plunge", "poor", "problem", "protest", "punish", "recession",
    "reject", "resign", "restrict", "risk", "scam", "scandal", "shortage", "shrink",
    "shutdown", "sink", "slow", "slump", "steal", "stress", "struggle", "sue", "suffer",
    "suspend", "tension", "threat", "toxic", "trouble", "tumble", "turmoil", "unemployment",
    "unstable", "victim", "violate", "volatile", "warn", "warning", "weak", "worsen",
    "worst",
];

static NEWS_LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    positive: NEWS_POSITIVE.iter().map(|w| (*w).to_string()).collect(),
    negative: NEWS_NEGATIVE.iter().map(|w| (*w).to_string()).collect(),
});

/// Positive and negative word sets used by the classifier.
///
/// Both sets hold lowercase root forms and never share a word. A lexicon is
/// built once and only read afterwards, so it can be shared freely across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from custom word lists. Entries are lowercased.
    ///
    /// # Errors
    ///
    /// Returns `BrieflyError::ConfigError` if a word appears in both lists.
    pub fn new<P, N>(positive: P, negative: N) -> Result<Self, BrieflyError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let positive: HashSet<String> = positive
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .collect();
        let negative: HashSet<String> = negative
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .collect();

        if let Some(word) = positive.intersection(&negative).next() {
            return Err(BrieflyError::ConfigError(format!(
                "word '{}' is listed as both positive and negative",
                word
            )));
        }

        Ok(Self { positive, negative })
    }

    /// The built-in news lexicon, shared process-wide.
    #[must_use]
    pub fn news() -> &'static Lexicon {
        &NEWS_LEXICON
    }

    #[must_use]
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    #[must_use]
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Number of distinct positive and negative words in `words`.
    #[must_use]
    pub fn count_matches(&self, words: &HashSet<String>) -> (usize, usize) {
        let pos = words.iter().filter(|w| self.is_positive(w)).count();
        let neg = words.iter().filter(|w| self.is_negative(w)).count();
        (pos, neg)
    }
}
