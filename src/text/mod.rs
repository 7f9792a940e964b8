//! Text primitives shared by the summarizer and the sentiment classifier.

pub mod splitter;
pub mod tokenizer;

pub use splitter::{MIN_SENTENCE_CHARS, split_sentences, trim_space};
pub use tokenizer::{word_set, words};
