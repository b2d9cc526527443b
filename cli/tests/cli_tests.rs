use search_cli::{collect_files, load_corpus, read_text, render_json, render_outcome, render_stats, run_repl};
use search_core::SearchOptions;
use serde_json::Value;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn sample_dir() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("doc1.txt"), "The quick brown fox\njumps over the lazy dog.\n").unwrap();
    fs::write(dir.path().join("doc2.txt"), "Sorting algorithms and search\nalgorithms in practice.").unwrap();
    fs::write(dir.path().join("doc3.txt"), "").unwrap();
    fs::write(dir.path().join("notes.md"), "quick markdown that is ignored").unwrap();
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/doc4.txt"), "Forest animals hide from the fox.").unwrap();
    dir
}

#[test]
fn collects_txt_files_in_name_order() {
    let dir = sample_dir();
    let files = collect_files(&[dir.path().to_path_buf()]);
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, vec!["doc1.txt", "doc2.txt", "doc3.txt", "nested/doc4.txt"]);
}

#[test]
fn lines_are_joined_with_spaces() {
    let dir = sample_dir();
    let text = read_text(&dir.path().join("doc1.txt")).unwrap();
    assert_eq!(text, "The quick brown fox jumps over the lazy dog. ");
}

#[test]
fn empty_and_missing_files_are_skipped() {
    let dir = sample_dir();
    let missing = dir.path().join("missing.txt");
    let corpus = load_corpus(&[dir.path().to_path_buf(), missing]).unwrap();
    assert_eq!(corpus.len(), 3);
    assert!(corpus.document(1).unwrap().filename().ends_with("doc2.txt"));
    assert!(corpus.document(2).unwrap().filename().ends_with("doc4.txt"));
}

#[test]
fn blank_line_file_still_takes_an_id() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "\n\n").unwrap();
    fs::write(dir.path().join("b.txt"), "quick brown fox").unwrap();
    let corpus = load_corpus(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.document(0).unwrap().total_words(), 0);
    assert!(corpus.document(1).unwrap().filename().ends_with("b.txt"));
}

#[test]
fn renders_ranked_results() {
    let dir = sample_dir();
    let corpus = load_corpus(&[dir.path().to_path_buf()]).unwrap();
    let outcome = corpus.search("fox", &SearchOptions::default());
    let text = render_outcome("fox", &outcome);
    assert!(text.contains("Query terms: 'fox'"));
    assert!(text.contains("Found 2 candidate document(s)"));
    assert!(text.contains("1. "));
    assert!(text.contains("2. "));
    assert!(text.contains("(Score: 0.4055)"));

    let none = corpus.search("zzzznotfound", &SearchOptions::default());
    assert!(render_outcome("zzzznotfound", &none).contains("No documents found"));
}

#[test]
fn renders_json_with_outcome_tag() {
    let dir = sample_dir();
    let corpus = load_corpus(&[dir.path().to_path_buf()]).unwrap();
    let outcome = corpus.search("algorithms", &SearchOptions::default());
    let json: Value = serde_json::from_str(&render_json("algorithms", &outcome).unwrap()).unwrap();
    assert_eq!(json["query"], "algorithms");
    assert_eq!(json["result"]["outcome"], "hits");
    let hits = json["result"]["hits"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["doc_id"], 1);

    let empty = corpus.search("?!", &SearchOptions::default());
    let json: Value = serde_json::from_str(&render_json("?!", &empty).unwrap()).unwrap();
    assert_eq!(json["result"]["outcome"], "no_valid_terms");
}

#[test]
fn renders_stats() {
    let dir = sample_dir();
    let corpus = load_corpus(&[dir.path().to_path_buf()]).unwrap();
    let text = render_stats(&corpus.stats());
    assert!(text.contains("Total Documents: 3"));
    assert!(text.contains("Average Words per Document:"));
}

#[test]
fn repl_runs_until_quit() {
    let dir = sample_dir();
    let corpus = load_corpus(&[dir.path().to_path_buf()]).unwrap();
    let input = Cursor::new("fox\n\nforest animals\nquit\nalgorithms\n");
    let mut output = Vec::new();
    run_repl(&corpus, &SearchOptions::default(), input, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Searching for: \"fox\""));
    assert!(text.contains("Searching for: \"forest animals\""));
    assert!(!text.contains("Searching for: \"algorithms\""));
}
