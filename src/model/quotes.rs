//! Quote file parsing and selection (pure Rust, no FFI).
//!
//! A quote file is plain text, one quote per line. Blank lines are
//! ignored and a literal two-character `\n` inside a line expands to a
//! real line break, so multi-line quotes can be authored on one line.

use std::fmt;
use std::path::Path;

use rand::Rng;
use thiserror::Error;

/// One displayable unit of text from the quote file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Why a quote file failed to produce any quotes.
///
/// The `Display` output of each variant is shown on screen verbatim as a
/// single diagnostic quote, so failures never propagate to the host.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Quote file not found at: {path}")]
    NotFound { path: String },

    #[error("No content found in file")]
    Empty,

    #[error("Error reading quote file: {0}")]
    Read(#[from] std::io::Error),
}

/// The in-memory collection of quotes parsed from the current file.
///
/// Invariant: never empty. Every failure path substitutes a one-element
/// deck holding a diagnostic quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDeck {
    quotes: Vec<Quote>,
}

impl QuoteDeck {
    /// Read and parse the file at `path`. Never returns an empty deck.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(deck) => {
                log::debug!("loaded {} quote(s) from {}", deck.len(), path.display());
                deck
            }
            Err(err) => {
                log::debug!("quote load failed for {}: {err}", path.display());
                Self::diagnostic(err)
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let quotes = parse_quotes(&content);
        if quotes.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { quotes })
    }

    /// One-element deck carrying the failure description.
    pub fn diagnostic(err: LoadError) -> Self {
        Self {
            quotes: vec![Quote::new(err.to_string())],
        }
    }

    /// Uniform random selection. Deterministic on a one-element deck.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Quote {
        // Index is always in range: the deck is never empty.
        &self.quotes[rng.random_range(0..self.quotes.len())]
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}

/// Split `content` into quotes: one per line, trimmed, blanks dropped,
/// literal `\n` pairs expanded to real newlines. Preserves file order.
pub fn parse_quotes(content: &str) -> Vec<Quote> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Quote::new(line.replace("\\n", "\n")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_one_quote_per_line_in_file_order() {
        let quotes = parse_quotes("first\nsecond\nthird\n");
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].text, "first");
        assert_eq!(quotes[1].text, "second");
        assert_eq!(quotes[2].text, "third");
    }

    #[test]
    fn parse_trims_and_drops_blank_lines() {
        let quotes = parse_quotes("A\n\nB\n  \nC");
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].text, "A");
        assert_eq!(quotes[1].text, "B");
        assert_eq!(quotes[2].text, "C");
    }

    #[test]
    fn parse_expands_literal_backslash_n() {
        let quotes = parse_quotes("Hello\\nWorld");
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "Hello\nWorld");
    }

    #[test]
    fn parse_leaves_other_escapes_alone() {
        let quotes = parse_quotes("a\\tb \\\\n");
        assert_eq!(quotes[0].text, "a\\tb \\\n");
    }

    #[test]
    fn parse_whitespace_only_content_yields_nothing() {
        assert!(parse_quotes("   \n\t\n  ").is_empty());
    }

    #[test]
    fn missing_file_yields_diagnostic_deck() {
        let deck = QuoteDeck::load("/nonexistent/quotes.txt");
        assert_eq!(deck.len(), 1);
        assert_eq!(
            deck.quotes()[0].text,
            "Quote file not found at: /nonexistent/quotes.txt"
        );
    }

    #[test]
    fn empty_error_message_is_exact() {
        assert_eq!(LoadError::Empty.to_string(), "No content found in file");
    }

    #[test]
    fn read_error_message_carries_description() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let msg = LoadError::from(io).to_string();
        assert!(msg.starts_with("Error reading quote file: "));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn pick_random_single_element_is_deterministic() {
        let deck = QuoteDeck::diagnostic(LoadError::Empty);
        let mut rng = rand::rng();
        for _ in 0..20 {
            assert_eq!(deck.pick_random(&mut rng).text, "No content found in file");
        }
    }
}
