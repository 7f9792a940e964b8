use std::collections::HashSet;

/// Returns true for characters that count as part of a word when deciding
/// whether an ASCII-letter run stands on its own.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lowercase ASCII-letter words, in order of appearance.
///
/// A token is a maximal run of `a-z` (after case folding) that is bounded on
/// both sides by a non-word character or the edge of the text. Runs glued to
/// digits, underscores or non-ASCII letters (`abc123`, `caf\u{e9}`) are not
/// tokens at all.
///
/// # Examples
///
/// ```
/// use briefly::text::tokenizer::words;
///
/// assert_eq!(words("Markets RALLY, again!"), vec!["markets", "rally", "again"]);
/// assert_eq!(words("don't"), vec!["don", "t"]);
/// assert!(words("covid19 x_y").is_empty());
/// ```
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut out = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_lowercase() {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_lowercase() {
            i += 1;
        }

        let bounded_left = start == 0 || !is_word_char(chars[start - 1]);
        let bounded_right = i == chars.len() || !is_word_char(chars[i]);
        if bounded_left && bounded_right {
            out.push(chars[start..i].iter().collect());
        } else {
            // Skip the rest of this word so its tail can't be picked up later.
            while i < chars.len() && is_word_char(chars[i]) {
                i += 1;
            }
        }
    }

    out
}

/// Distinct words of `text`, duplicates collapsed.
#[must_use]
pub fn word_set(text: &str) -> HashSet<String> {
    words(text).into_iter().collect()
}
