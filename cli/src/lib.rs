use anyhow::Result;
use search_core::{Corpus, CorpusStats, Error as CoreError, SearchOptions, SearchOutcome};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Serialize)]
pub struct QueryReport<'a> {
    pub query: &'a str,
    pub result: &'a SearchOutcome,
}

/// Expand the given paths into the list of text files to ingest.
///
/// Directories are walked recursively for `.txt` files in file-name order so
/// document ids are stable between runs; plain files are taken as given.
pub fn collect_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
                    files.push(p.to_path_buf());
                }
            }
        } else {
            files.push(input.clone());
        }
    }
    files
}

/// Read a file line by line, ending every line with a space so words on
/// adjacent lines never join.
pub fn read_text(path: &Path) -> Result<String> {
    let reader = BufReader::new(File::open(path)?);
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line?);
        content.push(' ');
    }
    Ok(content)
}

/// Build a corpus from every file under `inputs`. Unreadable and empty files
/// are logged and skipped.
pub fn load_corpus(inputs: &[PathBuf]) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for file in collect_files(inputs) {
        let name = file.to_string_lossy();
        let text = match read_text(&file) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(file = %name, error = %err, "cannot read file, skipping");
                continue;
            }
        };
        match corpus.add_document(&name, &text) {
            Ok(_) => {}
            Err(CoreError::EmptyDocument(_)) => tracing::warn!(file = %name, "empty file, skipping"),
            Err(err) => return Err(err.into()),
        }
    }
    tracing::info!(num_docs = corpus.len(), num_terms = corpus.vocabulary_size(), "ingested documents");
    Ok(corpus)
}

pub fn render_outcome(query: &str, outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Searching for: \"{query}\" ===");
    match outcome {
        SearchOutcome::EmptyQuery => {
            let _ = writeln!(out, "Empty query!");
        }
        SearchOutcome::NoValidTerms => {
            let _ = writeln!(out, "No valid search terms found!");
        }
        SearchOutcome::NoMatches { .. } => {
            let _ = writeln!(out, "No documents found containing the search terms.");
        }
        SearchOutcome::Hits { terms, total_candidates, hits } => {
            let quoted: Vec<String> = terms.iter().map(|t| format!("'{t}'")).collect();
            let _ = writeln!(out, "Query terms: {}", quoted.join(" "));
            let _ = writeln!(out, "Found {total_candidates} candidate document(s)");
            for (i, hit) in hits.iter().enumerate() {
                let _ = writeln!(out, "{}. {} (Score: {:.4})", i + 1, hit.filename, hit.score);
                let _ = writeln!(out, "   {}", hit.snippet);
            }
        }
    }
    out
}

pub fn render_stats(stats: &CorpusStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Search Engine Statistics ===");
    let _ = writeln!(out, "Total Documents: {}", stats.documents);
    let _ = writeln!(out, "Vocabulary Size: {}", stats.vocabulary);
    if stats.documents > 0 {
        let _ = writeln!(out, "Total Words: {}", stats.total_words);
        let _ = writeln!(out, "Average Words per Document: {}", stats.average_words);
    }
    out
}

pub fn render_json(query: &str, outcome: &SearchOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(&QueryReport { query, result: outcome })?)
}

/// Interactive prompt: one query per line until `quit`, `exit` or EOF.
pub fn run_repl<R: BufRead, W: Write>(corpus: &Corpus, opts: &SearchOptions, input: R, mut output: W) -> Result<()> {
    writeln!(output, "Enter search queries (type 'quit' to exit):")?;
    write!(output, "search> ")?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        if query == "quit" || query == "exit" {
            break;
        }
        if !query.is_empty() {
            let outcome = corpus.search(query, opts);
            write!(output, "{}", render_outcome(query, &outcome))?;
        }
        write!(output, "search> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}
