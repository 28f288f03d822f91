//! Whitespace tokenizer used for inverted index construction.
//!
//! # Invariants
//! - Tokens are split on Unicode whitespace and lowercased.
//! - No stemming and no punctuation stripping: `"Rights?"` yields `"rights?"`.

use std::str::SplitWhitespace;

/// Lazy token sequence over borrowed text.
///
/// Cloning restarts iteration from the clone point without re-reading input.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    pieces: SplitWhitespace<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.pieces.next().map(str::to_lowercase)
    }
}

/// Tokenizes `text` into lowercase whitespace-delimited pieces.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        pieces: text.split_whitespace(),
    }
}
