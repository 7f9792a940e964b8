//! Briefly - extractive summaries and sentiment labels for news articles.
//!
//! This crate backs a single HTTP endpoint deployed as an AWS Lambda. Given an
//! article `title` and optional `description` it returns a short extractive
//! summary plus a coarse sentiment label with a score in `[-1.0, 1.0]`.
//!
//! # Architecture
//!
//! - `text`: sentence splitting and word tokenization
//! - `summary`: term-frequency sentence scoring with a lead-position boost
//! - `sentiment`: lexicon-based polarity classification
//! - `core`: configuration, payload models and the analysis pipeline
//! - `api`: the Lambda proxy handler (CORS preflight, JSON in and out)
//!
//! Every core operation is pure and total; the only shared state is the
//! read-only news lexicon.
//!
//! # Example
//!
//! ```
//! use briefly::core::{analyze, config::AppConfig, models::ArticleInput};
//! use briefly::sentiment::Sentiment;
//!
//! let article = ArticleInput::new(
//!     "Company reports record growth and strong earnings",
//!     "Analysts praised the outstanding results amid a challenging market.",
//! );
//! let analysis = analyze(&article, &AppConfig::default());
//!
//! assert_eq!(analysis.sentiment, Sentiment::Positive);
//! assert_eq!(
//!     analysis.summary,
//!     "Company reports record growth and strong earnings. \
//!      Analysts praised the outstanding results amid a challenging market."
//! );
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod sentiment;
pub mod summary;
pub mod text;

pub use errors::BrieflyError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at startup; later
/// calls are ignored.
///
/// # Example
///
/// ```
/// briefly::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
