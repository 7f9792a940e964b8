//! Request-independent pieces: configuration, payload models and the
//! summarize-and-classify pipeline.

pub mod analysis;
pub mod config;
pub mod models;

pub use analysis::{analyze, analyze_with, full_text};
