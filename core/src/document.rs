use crate::tokenizer::{normalize, words};
use crate::DocId;
use std::collections::HashMap;

/// An ingested document and the statistics derived from it.
///
/// Built once from raw text and never mutated afterwards. `content` holds the
/// normalized text (case-folded, punctuation replaced by spaces), which is
/// what snippets are cut from.
#[derive(Debug, Clone)]
pub struct Document {
    id: DocId,
    filename: String,
    content: String,
    frequencies: HashMap<String, u32>,
    total_words: u32,
}

impl Document {
    pub fn new(id: DocId, filename: impl Into<String>, raw_text: &str) -> Self {
        let content = normalize(raw_text);
        let mut frequencies: HashMap<String, u32> = HashMap::new();
        let mut total_words = 0u32;
        for word in words(&content) {
            *frequencies.entry(word.to_string()).or_insert(0) += 1;
            total_words += 1;
        }
        Self { id, filename: filename.into(), content, frequencies, total_words }
    }

    pub fn id(&self) -> DocId { self.id }
    pub fn filename(&self) -> &str { &self.filename }
    pub fn content(&self) -> &str { &self.content }

    /// Number of counted tokens (those that passed the length filter).
    pub fn total_words(&self) -> u32 { self.total_words }

    /// Occurrences of `token` in this document; 0 when absent.
    pub fn word_frequency(&self, token: &str) -> u32 {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    /// Distinct tokens of the document, each once, in no particular order.
    pub fn unique_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.frequencies.keys().map(String::as_str)
    }

    pub fn unique_word_count(&self) -> usize { self.frequencies.len() }
}
