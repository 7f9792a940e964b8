use once_cell::sync::Lazy;
use regex::Regex;

/// Fragments at or below this many characters are dropped as noise
/// (headers, datelines, stray abbreviations).
pub const MIN_SENTENCE_CHARS: usize = 15;

// Separators include the information separators U+001C..U+001F.
static BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?][\s\x1C-\x1F]+").expect("static regex compile"));

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim whitespace, counting U+001C..U+001F as whitespace too.
#[must_use]
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Split text into sentences.
///
/// A boundary is a `.`, `!` or `?` followed by whitespace. The punctuation
/// stays with the sentence it ends and the whitespace run is consumed. Every
/// fragment is trimmed, and fragments of `MIN_SENTENCE_CHARS` characters or
/// fewer are discarded.
///
/// ```
/// use briefly::text::splitter::split_sentences;
///
/// let s = split_sentences("Shares jumped on Monday morning. Ok. Investors cheered the news!");
/// assert_eq!(s, vec!["Shares jumped on Monday morning.", "Investors cheered the news!"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = trim_space(text);
    let mut fragments = Vec::new();
    let mut start = 0;

    for m in BOUNDARY_RE.find_iter(text) {
        // Terminators are ASCII, so the byte after it is a char boundary.
        let end = m.start() + 1;
        fragments.push(&text[start..end]);
        start = m.end();
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(trim_space)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(ToString::to_string)
        .collect()
}
