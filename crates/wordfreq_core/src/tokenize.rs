use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Split text into lowercase word tokens.
///
/// A token is a maximal run of word characters (letters, digits, underscore);
/// everything else is a separator and never appears in the output. Empty input
/// yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
