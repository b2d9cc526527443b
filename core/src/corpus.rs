use crate::document::Document;
use crate::error::{Error, Result};
use crate::index::InvertedIndex;
use crate::ranker::{self, SearchOptions, SearchOutcome};
use crate::DocId;
use serde::Serialize;

/// Summary figures for a loaded corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub documents: usize,
    pub vocabulary: usize,
    pub total_words: u64,
    /// Integer mean of counted tokens per document; 0 for an empty corpus.
    pub average_words: u64,
}

/// Owns every ingested document together with the index built over them.
///
/// Ingestion takes `&mut self` and search `&self`, so any sharing across
/// threads has to go through an external lock.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    index: InvertedIndex,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Ingest one document and return its id.
    ///
    /// Ids are handed out sequentially from 0. Empty text is rejected and
    /// leaves the corpus unchanged; whitespace-only text is indexed with no
    /// words.
    pub fn add_document(&mut self, filename: &str, raw_text: &str) -> Result<DocId> {
        if raw_text.is_empty() {
            return Err(Error::EmptyDocument(filename.to_string()));
        }
        let doc_id = self.documents.len() as DocId;
        let doc = Document::new(doc_id, filename, raw_text);
        self.index.add_document(&doc)?;
        tracing::info!(doc_id, filename, words = doc.total_words(), "added document");
        self.documents.push(doc);
        Ok(doc_id)
    }

    pub fn search(&self, query: &str, opts: &SearchOptions) -> SearchOutcome {
        ranker::search(&self.documents, &self.index, query, opts)
    }

    pub fn document(&self, id: DocId) -> Option<&Document> { self.documents.get(id as usize) }
    pub fn documents(&self) -> &[Document] { &self.documents }
    pub fn index(&self) -> &InvertedIndex { &self.index }
    pub fn len(&self) -> usize { self.documents.len() }
    pub fn document_count(&self) -> usize { self.documents.len() }
    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
    pub fn vocabulary_size(&self) -> usize { self.index.vocabulary_size() }

    pub fn stats(&self) -> CorpusStats {
        let documents = self.documents.len();
        let total_words: u64 = self.documents.iter().map(|d| d.total_words() as u64).sum();
        let average_words = if documents == 0 { 0 } else { total_words / documents as u64 };
        CorpusStats { documents, vocabulary: self.vocabulary_size(), total_words, average_words }
    }
}
