use crate::document::Document;
use crate::error::{Error, Result};
use crate::DocId;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

/// How posting lists of several query terms are combined into candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MatchMode {
    /// Any document containing at least one query term (union).
    #[default]
    Any,
    /// Only documents containing every distinct query term (intersection).
    All,
}

/// Token → posting list, plus per-token document frequencies.
///
/// Append-only. Posting lists hold document ids only; occurrence counts live
/// in [`Document`].
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeSet<DocId>>,
    df: HashMap<String, u32>,
    num_docs: u32,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Fold a document's unique tokens into the index.
    ///
    /// The whole batch is staged before anything is written, so a rejected
    /// document leaves the index untouched.
    pub fn add_document(&mut self, doc: &Document) -> Result<()> {
        let staged = self.stage(doc)?;
        self.commit(doc.id(), staged);
        Ok(())
    }

    fn stage<'d>(&self, doc: &'d Document) -> Result<Vec<&'d str>> {
        let id = doc.id();
        let mut batch = Vec::with_capacity(doc.unique_word_count());
        for word in doc.unique_words() {
            if self.postings.get(word).is_some_and(|p| p.contains(&id)) {
                return Err(Error::DuplicateDocument(id));
            }
            batch.push(word);
        }
        Ok(batch)
    }

    fn commit(&mut self, id: DocId, staged: Vec<&str>) {
        for word in staged {
            let plist = self.postings.entry(word.to_string()).or_default();
            plist.insert(id);
            self.df.insert(word.to_string(), plist.len() as u32);
        }
        self.num_docs += 1;
    }

    /// Number of documents containing `token`; 0 when unknown.
    pub fn document_frequency(&self, token: &str) -> u32 {
        self.df.get(token).copied().unwrap_or(0)
    }

    pub fn postings(&self, token: &str) -> Option<&BTreeSet<DocId>> {
        self.postings.get(token)
    }

    pub fn contains(&self, token: &str) -> bool { self.postings.contains_key(token) }

    pub fn vocabulary_size(&self) -> usize { self.postings.len() }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    /// Documents eligible for scoring.
    ///
    /// Tokens missing from the index contribute nothing under
    /// [`MatchMode::Any`] and empty the result under [`MatchMode::All`].
    /// No tokens means no candidates in either mode.
    pub fn find_candidates<S: AsRef<str>>(&self, tokens: &[S], mode: MatchMode) -> BTreeSet<DocId> {
        match mode {
            MatchMode::Any => tokens
                .iter()
                .filter_map(|t| self.postings.get(t.as_ref()))
                .flatten()
                .copied()
                .collect(),
            MatchMode::All => {
                let distinct: HashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
                let mut lists = Vec::with_capacity(distinct.len());
                for t in distinct {
                    match self.postings.get(t) {
                        Some(plist) => lists.push(plist),
                        None => return BTreeSet::new(),
                    }
                }
                lists.sort_by_key(|p| p.len());
                let Some((first, rest)) = lists.split_first() else {
                    return BTreeSet::new();
                };
                first
                    .iter()
                    .filter(|id| rest.iter().all(|p| p.contains(*id)))
                    .copied()
                    .collect()
            }
        }
    }

    pub fn iter_postings(&self) -> impl Iterator<Item = (&str, &BTreeSet<DocId>)> + '_ {
        self.postings.iter().map(|(k, v)| (k.as_str(), v))
    }
}
