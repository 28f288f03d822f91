//! Incremental inverted index from token to entity ids.
//!
//! # Invariants
//! - Posting lists are append-only and keep insertion order.
//! - An id appears once per occurrence of the token in its text, so the same
//!   id may be listed several times under one token.

use super::tokenizer::tokenize;
use crate::model::EntityId;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<EntityId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `text` and appends `id` to the posting list of every token.
    ///
    /// Returns the number of tokens indexed.
    pub fn insert_text(&mut self, id: EntityId, text: &str) -> usize {
        let mut indexed = 0;
        for token in tokenize(text) {
            self.postings.entry(token).or_default().push(id);
            indexed += 1;
        }
        indexed
    }

    /// Posting list for one token. The lookup key is lowercased first.
    pub fn postings(&self, token: &str) -> &[EntityId] {
        self.postings
            .get(token.to_lowercase().as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ids whose indexed text contains every token of `query`.
    ///
    /// A query without tokens matches nothing.
    pub fn ids_matching_all(&self, query: &str) -> HashSet<EntityId> {
        let mut matched: Option<HashSet<EntityId>> = None;
        for token in tokenize(query) {
            let ids = self
                .postings
                .get(token.as_str())
                .map(|list| list.iter().copied().collect::<HashSet<_>>())
                .unwrap_or_default();
            let next = match matched {
                Some(current) => current.intersection(&ids).copied().collect(),
                None => ids,
            };
            if next.is_empty() {
                return next;
            }
            matched = Some(next);
        }
        matched.unwrap_or_default()
    }

    /// Number of distinct tokens.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }
}
