use std::env;

use crate::summary::{
    DEFAULT_CHAR_LIMIT, DEFAULT_FALLBACK_SENTENCES, DEFAULT_MAX_SENTENCES, SummaryPolicy,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub summary_policy: SummaryPolicy,
    pub cors_allow_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            summary_policy: SummaryPolicy::default(),
            cors_allow_origin: "*".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_sentences =
            parse_count(&lookup, "SUMMARY_MAX_SENTENCES", DEFAULT_MAX_SENTENCES)?;
        let fallback_sentences = parse_count(
            &lookup,
            "SUMMARY_FALLBACK_SENTENCES",
            DEFAULT_FALLBACK_SENTENCES,
        )?;
        if fallback_sentences > max_sentences {
            return Err(format!(
                "SUMMARY_FALLBACK_SENTENCES: must not exceed SUMMARY_MAX_SENTENCES ({} > {})",
                fallback_sentences, max_sentences
            ));
        }
        let char_limit = match lookup("SUMMARY_CHAR_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("SUMMARY_CHAR_LIMIT: {}", e))?,
            None => DEFAULT_CHAR_LIMIT,
        };

        Ok(Self {
            summary_policy: SummaryPolicy {
                max_sentences,
                fallback_sentences,
                char_limit,
            },
            cors_allow_origin: lookup("CORS_ALLOW_ORIGIN")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "*".to_string()),
        })
    }
}

fn parse_count<F>(lookup: &F, key: &str, default: usize) -> Result<usize, String>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(format!("{}: must be at least 1", key)),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{}: {}", key, e)),
    }
}
