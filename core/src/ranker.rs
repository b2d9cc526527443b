//! TF-IDF scoring, result ordering and snippet extraction.

use crate::config::{DEFAULT_MAX_RESULTS, SNIPPET_ELLIPSIS, SNIPPET_LEAD, SNIPPET_WIDTH};
use crate::document::Document;
use crate::index::{InvertedIndex, MatchMode};
use crate::tokenizer::tokenize;
use crate::DocId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    pub max_results: usize,
    pub match_mode: MatchMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_results: DEFAULT_MAX_RESULTS, match_mode: MatchMode::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub filename: String,
    pub score: f64,
    pub snippet: String,
}

/// Result of a query. Every variant is a normal outcome; searching never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The raw query was blank.
    EmptyQuery,
    /// Nothing in the query survived tokenization.
    NoValidTerms,
    /// No indexed document matched the query terms.
    NoMatches { terms: Vec<String> },
    Hits {
        terms: Vec<String>,
        total_candidates: usize,
        hits: Vec<SearchHit>,
    },
}

impl SearchOutcome {
    /// Ranked hits; empty for every outcome other than [`SearchOutcome::Hits`].
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Hits { hits, .. } => hits.as_slice(),
            _ => &[],
        }
    }

    pub fn terms(&self) -> &[String] {
        match self {
            SearchOutcome::NoMatches { terms } | SearchOutcome::Hits { terms, .. } => terms.as_slice(),
            _ => &[],
        }
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        match self {
            SearchOutcome::Hits { hits, .. } => hits,
            _ => Vec::new(),
        }
    }
}

/// Log-scaled term frequency: `1 + ln(count)`, or 0 when the term is absent.
pub fn tf(doc: &Document, token: &str) -> f64 {
    if doc.total_words() == 0 {
        return 0.0;
    }
    let count = doc.word_frequency(token);
    if count > 0 { 1.0 + (count as f64).ln() } else { 0.0 }
}

/// `ln(N / df)`; 0 when no document holds the term.
pub fn idf(num_docs: usize, df: u32) -> f64 {
    if df == 0 || num_docs == 0 {
        return 0.0;
    }
    (num_docs as f64 / df as f64).ln()
}

pub fn tf_idf(doc: &Document, index: &InvertedIndex, num_docs: usize, token: &str) -> f64 {
    tf(doc, token) * idf(num_docs, index.document_frequency(token))
}

/// Sum of per-term scores over the query sequence. A term repeated in the
/// query counts once per occurrence.
pub fn score<S: AsRef<str>>(doc: &Document, index: &InvertedIndex, num_docs: usize, terms: &[S]) -> f64 {
    terms.iter().map(|t| tf_idf(doc, index, num_docs, t.as_ref())).sum()
}

/// Excerpt of a document around the earliest occurrence of any query term.
///
/// Short documents come back whole. Longer ones get a window opening
/// [`SNIPPET_LEAD`] characters before the first match (or at the start when
/// no term occurs) followed by an ellipsis.
pub fn snippet<S: AsRef<str>>(doc: &Document, terms: &[S]) -> String {
    let content = doc.content();
    if content.len() <= SNIPPET_WIDTH {
        return content.to_string();
    }
    let pos = terms
        .iter()
        .filter_map(|t| content.find(t.as_ref()))
        .min()
        .unwrap_or(0);
    let start = pos.saturating_sub(SNIPPET_LEAD);
    let end = (start + SNIPPET_WIDTH).min(content.len());
    // normalized content is pure ASCII, so any byte range is a char range
    format!("{}{}", &content[start..end], SNIPPET_ELLIPSIS)
}

/// Tokenize `query`, gather candidates and return them best first.
///
/// Equal scores are ordered by ascending document id so results are
/// reproducible.
pub fn search(documents: &[Document], index: &InvertedIndex, query: &str, opts: &SearchOptions) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::EmptyQuery;
    }
    let terms = tokenize(query);
    if terms.is_empty() {
        return SearchOutcome::NoValidTerms;
    }
    tracing::debug!(?terms, mode = ?opts.match_mode, "query terms");

    let candidates = index.find_candidates(&terms, opts.match_mode);
    if candidates.is_empty() {
        return SearchOutcome::NoMatches { terms };
    }
    let total_candidates = candidates.len();
    tracing::debug!(total_candidates, "candidate documents");

    let num_docs = documents.len();
    let mut scored: Vec<(&Document, f64)> = candidates
        .into_iter()
        .filter_map(|id| documents.get(id as usize))
        .map(|doc| (doc, score(doc, index, num_docs, &terms)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.id().cmp(&b.0.id())));

    let hits = scored
        .into_iter()
        .take(opts.max_results)
        .map(|(doc, score)| SearchHit {
            doc_id: doc.id(),
            filename: doc.filename().to_string(),
            score,
            snippet: snippet(doc, &terms),
        })
        .collect();

    SearchOutcome::Hits { terms, total_candidates, hits }
}
