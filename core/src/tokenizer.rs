use crate::config::MIN_TOKEN_LEN;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"[^a-z0-9[:space:]]").expect("valid regex");
}

/// Case-fold and replace every character that is neither ASCII alphanumeric
/// nor ASCII whitespace with spaces, so "cat,dog" stays two words.
///
/// Classification is ASCII only: accented and other non-ASCII characters act
/// as separators and no Unicode normalization is applied. Each separator
/// becomes one space per UTF-8 byte, so the output has the same byte length
/// as the input and is always ASCII.
pub fn normalize(text: &str) -> String {
    let lower = text.to_ascii_lowercase();
    SEPARATOR
        .replace_all(&lower, |caps: &Captures| " ".repeat(caps[0].len()))
        .into_owned()
}

/// Tokenize text into normalized terms, in input order with duplicates kept.
///
/// Documents and queries both go through this function; index lookups only
/// line up because the two sides share it.
pub fn tokenize(text: &str) -> Vec<String> {
    words(&normalize(text)).map(str::to_string).collect()
}

/// Split already-normalized text and drop fragments below the length floor.
pub(crate) fn words(normalized: &str) -> impl Iterator<Item = &str> + '_ {
    normalized
        .split_whitespace()
        .filter(|w| w.len() >= MIN_TOKEN_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The Quick, brown FOX!");
        assert_eq!(t, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(tokenize("cat,dog"), vec!["cat", "dog"]);
        assert_eq!(normalize("Hello-World"), "hello world");
    }

    #[test]
    fn drops_short_fragments() {
        assert_eq!(tokenize("a is of the sea"), vec!["the", "sea"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(tokenize("rust go rust java rust"), vec!["rust", "rust", "java", "rust"]);
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,.;!? \t\n ").is_empty());
    }

    #[test]
    fn non_ascii_is_a_separator() {
        assert_eq!(normalize("café"), "caf  ");
        assert_eq!(tokenize("naïve approach"), vec!["approach"]);
    }

    #[test]
    fn multibyte_separators_keep_byte_length() {
        let text = "café bar — naïve";
        let normalized = normalize(text);
        assert_eq!(normalized.len(), text.len());
        assert_eq!(normalized, "caf   bar     na  ve");
        assert!(normalized.is_ascii());
    }
}
