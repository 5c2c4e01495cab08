//! Tests for quote-file loading against real files.

use std::collections::HashMap;
use std::fs;

use quotesaver::model::QuoteDeck;
use tempfile::TempDir;

fn write_quotes(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write quote file");
    path
}

#[test]
fn load_counts_non_blank_trimmed_lines_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_quotes(&dir, "q.txt", "  first \nsecond\n\nthird\n");

    let deck = QuoteDeck::load(&path);
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.quotes()[0].text, "first");
    assert_eq!(deck.quotes()[1].text, "second");
    assert_eq!(deck.quotes()[2].text, "third");
}

#[test]
fn load_blank_and_whitespace_lines_are_dropped() {
    let dir = TempDir::new().unwrap();
    let path = write_quotes(&dir, "q.txt", "A\n\nB\n  \nC");

    let deck = QuoteDeck::load(&path);
    assert_eq!(deck.len(), 3);
    let texts: Vec<&str> = deck.quotes().iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, ["A", "B", "C"]);
}

#[test]
fn load_missing_file_gives_exact_diagnostic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone.txt");

    let deck = QuoteDeck::load(&path);
    assert_eq!(deck.len(), 1);
    assert_eq!(
        deck.quotes()[0].text,
        format!("Quote file not found at: {}", path.display())
    );
}

#[test]
fn load_empty_file_gives_no_content_diagnostic() {
    let dir = TempDir::new().unwrap();
    let path = write_quotes(&dir, "empty.txt", "");

    let deck = QuoteDeck::load(&path);
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.quotes()[0].text, "No content found in file");
}

#[test]
fn load_whitespace_only_file_gives_no_content_diagnostic() {
    let dir = TempDir::new().unwrap();
    let path = write_quotes(&dir, "blank.txt", "   \n\t\n  \n");

    let deck = QuoteDeck::load(&path);
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.quotes()[0].text, "No content found in file");
}

#[test]
fn load_expands_literal_backslash_n_to_line_break() {
    let dir = TempDir::new().unwrap();
    let path = write_quotes(&dir, "multi.txt", "Hello\\nWorld\n");

    let deck = QuoteDeck::load(&path);
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.quotes()[0].text, "Hello\nWorld");
}

#[test]
fn pick_random_is_roughly_uniform() {
    let dir = TempDir::new().unwrap();
    let path = write_quotes(&dir, "five.txt", "a\nb\nc\nd\ne\n");
    let deck = QuoteDeck::load(&path);
    assert_eq!(deck.len(), 5);

    let mut rng = rand::rng();
    let mut counts: HashMap<String, u32> = HashMap::new();
    let trials = 5_000;
    for _ in 0..trials {
        *counts.entry(deck.pick_random(&mut rng).text.clone()).or_default() += 1;
    }

    assert_eq!(counts.len(), 5, "every quote should be selected");
    for (text, count) in counts {
        // Expected 1000 per quote; allow a generous statistical band.
        assert!(
            (600..=1400).contains(&count),
            "quote {text:?} selected {count} times out of {trials}"
        );
    }
}
