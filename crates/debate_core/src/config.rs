//! Store construction options.
//!
//! # Responsibility
//! - Decide whether a new store is seeded with the default topic set.
//! - Select how `search_topics`/`search_notes` resolve a query.
//!
//! # Invariants
//! - `StoreConfig::default()` reproduces the reference behavior: seeded,
//!   substring search.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Config string for substring search.
pub const SEARCH_MODE_SUBSTRING: &str = "substring";
/// Config string for whole-token search through the inverted index.
pub const SEARCH_MODE_TOKEN: &str = "token";

/// How text queries are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Lowercased query is a substring of the lowercased searchable text.
    /// The inverted index is still maintained but not consulted.
    #[default]
    Substring,
    /// Every query token must be a whole token of the entity text, resolved
    /// through the inverted index.
    Token,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Substring => SEARCH_MODE_SUBSTRING,
            Self::Token => SEARCH_MODE_TOKEN,
        }
    }
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptySearchMode,
    UnsupportedSearchMode(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySearchMode => write!(f, "search mode cannot be empty"),
            Self::UnsupportedSearchMode(value) => write!(
                f,
                "unsupported search mode `{value}`; expected {SEARCH_MODE_SUBSTRING}|{SEARCH_MODE_TOKEN}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Parses a search mode id, ignoring case and surrounding whitespace.
pub fn parse_search_mode(value: &str) -> Result<SearchMode, ConfigError> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "" => Err(ConfigError::EmptySearchMode),
        SEARCH_MODE_SUBSTRING => Ok(SearchMode::Substring),
        SEARCH_MODE_TOKEN => Ok(SearchMode::Token),
        _ => Err(ConfigError::UnsupportedSearchMode(normalized)),
    }
}

/// Options applied once when a store is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Create the twelve sample topics on construction.
    pub seed_default_topics: bool,
    pub search_mode: SearchMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_default_topics: true,
            search_mode: SearchMode::Substring,
        }
    }
}

impl StoreConfig {
    /// Unseeded store with default search; useful for isolated fixtures.
    pub fn empty() -> Self {
        Self {
            seed_default_topics: false,
            ..Self::default()
        }
    }

    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }
}
