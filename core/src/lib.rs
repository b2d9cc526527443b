//! In-memory TF-IDF full-text search.
//!
//! Raw text flows through [`tokenizer`] into a [`Document`], the document is
//! folded into the [`InvertedIndex`], and queries are answered by the
//! [`ranker`]. [`Corpus`] owns all of it.

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod index;
pub mod ranker;
pub mod tokenizer;

pub use corpus::{Corpus, CorpusStats};
pub use document::Document;
pub use error::{Error, Result};
pub use index::{InvertedIndex, MatchMode};
pub use ranker::{SearchHit, SearchOptions, SearchOutcome};

pub type DocId = u32;
