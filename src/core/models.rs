use serde::{Deserialize, Serialize};

use crate::sentiment::Sentiment;

/// Summary shown when a request fails before a title could be read.
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable.";

/// Inbound article fields. Missing or `null` fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ArticleInput {
    #[must_use]
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub summary: String,
    pub sentiment: Sentiment,
    pub score: f64,
    pub read_time_sec: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisFailure {
    pub error: String,
    pub summary: String,
    pub sentiment: Sentiment,
    pub score: f64,
}

impl AnalysisFailure {
    /// Neutral fallback that echoes the title when one is known.
    #[must_use]
    pub fn new(error: impl Into<String>, title: Option<&str>) -> Self {
        let summary = match title {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => SUMMARY_UNAVAILABLE.to_string(),
        };
        Self {
            error: error.into(),
            summary,
            sentiment: Sentiment::Neutral,
            score: 0.0,
        }
    }
}

/// Body returned to the caller, serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Success(Analysis),
    Failure(AnalysisFailure),
}
